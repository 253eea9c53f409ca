//! Prompt builders, one per section topic.
//!
//! Each builder interpolates the institution, the tier's analysis depth and
//! page budget, and a plain-text digest of the scoring result.

use std::sync::Arc;

use super::{AnalysisDepth, PromptBuilder, PromptContext, SectionTopic};

/// Maximum number of free-text quotes included in a prompt.
const MAX_QUOTES: usize = 5;

type BuilderFn = fn(&PromptContext<'_>) -> String;

/// Returns the builder for a topic.
pub fn builder_for(topic: SectionTopic) -> PromptBuilder {
    let builder: BuilderFn = match topic {
        SectionTopic::ExecutiveSummary => executive_summary,
        SectionTopic::StrategicRecommendations => strategic_recommendations,
        SectionTopic::RiskAssessment => risk_assessment,
        SectionTopic::OrganizationalStructure => organizational_structure,
        SectionTopic::Benchmarking => benchmarking,
        SectionTopic::FinancialProjections => financial_projections,
        SectionTopic::ChangeManagement => change_management,
        SectionTopic::StructureVisualization => structure_visualization,
    };
    Arc::new(builder)
}

/// Plain-text digest of the scoring result shared by every prompt.
pub fn scoring_digest(ctx: &PromptContext<'_>) -> String {
    let scoring = ctx.scoring;
    let mut out = String::new();

    out.push_str(&format!(
        "Overall score: {:.2} / 5 ({:.1}%), maturity level {} ({})\n",
        scoring.overall_score,
        scoring.overall_percentage(),
        scoring.maturity_profile.overall.level,
        scoring.maturity_profile.overall.name
    ));
    out.push_str("Domain scores:\n");
    for domain in &scoring.domain_scores {
        out.push_str(&format!(
            "- {}: {:.2} / 5 ({:.1}%), {} ({} questions)\n",
            domain.domain.display_name(),
            domain.average_score,
            domain.percentage,
            domain.maturity.name,
            domain.question_count
        ));
    }

    if let Some(team) = &scoring.team_analysis {
        out.push_str(&format!(
            "Team consensus: {:.1}% across {} respondents\n",
            team.consensus_percent, team.member_count
        ));
    }

    if !scoring.recommendations.is_empty() {
        out.push_str("Engine recommendations:\n");
        for rec in &scoring.recommendations {
            out.push_str(&format!("- [{}] {}\n", rec.priority.label(), rec.title));
        }
    }

    let quotes: Vec<&String> = scoring.open_ended_responses.values().flatten().take(MAX_QUOTES).collect();
    if !quotes.is_empty() {
        out.push_str("Respondent comments:\n");
        for quote in quotes {
            out.push_str(&format!("- \"{}\"\n", quote));
        }
    }

    out
}

fn enterprise_note(depth: AnalysisDepth, note: &str) -> &str {
    if depth == AnalysisDepth::Enterprise {
        note
    } else {
        ""
    }
}

fn executive_summary(ctx: &PromptContext<'_>) -> String {
    let depth = ctx.tier.analysis_depth;
    format!(
        "Create a {depth} executive summary of AI readiness for {name}.\n\n{digest}\n\
         Include: strategic overview, critical findings, top {count} priorities, competitive position.\n\
         Make it executive-ready and actionable. Target: {pages} pages of content.",
        depth = depth,
        name = ctx.institution_name,
        digest = scoring_digest(ctx),
        count = depth.priority_count(),
        pages = ctx.tier.pages_for_share(0.15),
    )
}

fn strategic_recommendations(ctx: &PromptContext<'_>) -> String {
    let depth = ctx.tier.analysis_depth;
    format!(
        "Generate {depth} strategic recommendations for {name}.\n\n{digest}\n\
         Provide: immediate actions (0-90 days), short-term initiatives (3-12 months), long-term strategy (1-3 years).\n\
         {extra}Focus on ROI and implementation feasibility. Target: {pages} pages of content.",
        depth = depth,
        name = ctx.institution_name,
        digest = scoring_digest(ctx),
        extra = enterprise_note(
            depth,
            "Include system-wide transformation strategies, multi-site coordination and enterprise governance models.\n"
        ),
        pages = ctx.tier.pages_for_share(0.2),
    )
}

fn risk_assessment(ctx: &PromptContext<'_>) -> String {
    let depth = ctx.tier.analysis_depth;
    format!(
        "Write a {depth} risk analysis of AI adoption for {name}.\n\n{digest}\n\
         Identify: top {count} risks, mitigation strategies, early warning signs.\n\
         {extra}Target: {pages} pages of content.",
        depth = depth,
        name = ctx.institution_name,
        digest = scoring_digest(ctx),
        count = depth.priority_count(),
        extra = enterprise_note(
            depth,
            "Include enterprise-level systemic risks, regulatory compliance and multi-stakeholder risk scenarios.\n"
        ),
        pages = ctx.tier.pages_for_share(0.15),
    )
}

fn organizational_structure(ctx: &PromptContext<'_>) -> String {
    let mut departments = String::new();
    if let Some(team) = &ctx.scoring.team_analysis {
        for (department, count) in &team.department_breakdown {
            departments.push_str(&format!("- {}: {} respondents\n", department, count));
        }
    }
    format!(
        "Analyze the organizational structure of {name} as it affects AI adoption.\n\n{digest}\n\
         Departments represented:\n{departments}\n\
         Analyze: reporting relationships, span of control, decision-making efficiency, structural optimization opportunities.\n\
         Target: {pages} pages of content.",
        name = ctx.institution_name,
        digest = scoring_digest(ctx),
        departments = if departments.is_empty() { "- not provided\n".to_string() } else { departments },
        pages = ctx.tier.pages_for_share(0.2),
    )
}

fn benchmarking(ctx: &PromptContext<'_>) -> String {
    format!(
        "Write an industry benchmarking analysis of AI readiness for {name}.\n\n{digest}\n\
         Provide: peer comparisons, best practices, competitive positioning, performance gaps and opportunities.\n\
         Target: {pages} pages of content.",
        name = ctx.institution_name,
        digest = scoring_digest(ctx),
        pages = ctx.tier.pages_for_share(0.15),
    )
}

fn financial_projections(ctx: &PromptContext<'_>) -> String {
    format!(
        "Project the financial impact of AI initiatives for {name}.\n\n{digest}\n\
         Calculate: cost savings potential, revenue enhancement opportunities, ROI projections, implementation costs.\n\
         Include a 3-year outlook with conservative and aggressive scenarios.\n\
         Target: {pages} pages of content.",
        name = ctx.institution_name,
        digest = scoring_digest(ctx),
        pages = ctx.tier.pages_for_share(0.15),
    )
}

fn change_management(ctx: &PromptContext<'_>) -> String {
    let depth = ctx.tier.analysis_depth;
    format!(
        "Design a change management strategy for AI adoption at {name}.\n\n{digest}\n\
         Design: stakeholder engagement plan, communication strategy, training programs, resistance management.\n\
         {extra}Target: {pages} pages of content.",
        name = ctx.institution_name,
        digest = scoring_digest(ctx),
        extra = enterprise_note(
            depth,
            "Include multi-site coordination and enterprise-wide change governance.\n"
        ),
        pages = ctx.tier.pages_for_share(0.15),
    )
}

fn structure_visualization(ctx: &PromptContext<'_>) -> String {
    format!(
        "Describe a simple organizational chart for {name} highlighting the units responsible for AI \
         strategy, governance and support. Return one line per box in the form `Parent > Child`.\n\n{digest}",
        name = ctx.institution_name,
        digest = scoring_digest(ctx),
    )
}
