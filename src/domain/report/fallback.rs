//! Fallback Content Provider - deterministic narrative used when generation
//! fails or runs out of time.
//!
//! Text is computed from the scoring context alone; it never looks at the
//! prompt or the failed response, and it cannot fail.

use super::{PromptContext, SectionTopic};
use crate::domain::foundation::{round_to, DomainId, Priority};

/// Stateless templated text synthesizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackContentProvider;

impl FallbackContentProvider {
    pub fn new() -> Self {
        Self
    }

    /// Returns templated text for a topic.
    pub fn content_for(&self, topic: SectionTopic, ctx: &PromptContext<'_>) -> String {
        match topic {
            SectionTopic::ExecutiveSummary => Self::executive_summary(ctx),
            SectionTopic::StrategicRecommendations => Self::strategic_recommendations(ctx),
            SectionTopic::RiskAssessment => Self::risk_assessment(ctx),
            SectionTopic::OrganizationalStructure => Self::organizational_structure(ctx),
            SectionTopic::Benchmarking => Self::benchmarking(ctx),
            SectionTopic::FinancialProjections => Self::financial_projections(ctx),
            SectionTopic::ChangeManagement => Self::change_management(ctx),
            SectionTopic::StructureVisualization => Self::structure_visualization(ctx),
        }
    }

    fn overall_percent(ctx: &PromptContext<'_>) -> f64 {
        round_to(ctx.scoring.overall_percentage(), 0)
    }

    fn health_label(percent: f64) -> &'static str {
        if percent > 80.0 {
            "strong"
        } else if percent > 60.0 {
            "moderate"
        } else {
            "developing"
        }
    }

    fn executive_summary(ctx: &PromptContext<'_>) -> String {
        let scoring = ctx.scoring;
        let percent = Self::overall_percent(ctx);
        let mut out = format!(
            "EXECUTIVE SUMMARY - {}\n\n\
             This assessment yields an overall AI readiness score of {:.0}% ({:.2} of 5), \
             indicating {} readiness at the {} stage of maturity.\n\n",
            ctx.institution_name,
            percent,
            scoring.overall_score,
            Self::health_label(percent),
            scoring.maturity_profile.overall.name
        );

        out.push_str("KEY FINDINGS:\n");
        match (scoring.strongest_domain(), scoring.weakest_domain()) {
            (Some(strongest), Some(weakest)) => {
                out.push_str(&format!(
                    "- Strongest domain: {} ({:.1}%)\n",
                    strongest.domain.display_name(),
                    strongest.percentage
                ));
                out.push_str(&format!(
                    "- Domain needing most attention: {} ({:.1}%)\n",
                    weakest.domain.display_name(),
                    weakest.percentage
                ));
            }
            _ => out.push_str("- No domain responses were recorded\n"),
        }
        if let Some(team) = &scoring.team_analysis {
            out.push_str(&format!(
                "- Team consensus stands at {:.1}% across {} respondents\n",
                team.consensus_percent, team.member_count
            ));
        }

        out.push_str("\nSTRATEGIC PRIORITIES:\n");
        let count = ctx.tier.analysis_depth.priority_count();
        if scoring.recommendations.is_empty() {
            out.push_str("1. Sustain current practice and extend successful initiatives\n");
        }
        for (i, rec) in scoring.recommendations.iter().take(count).enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, rec.title));
        }

        out.push_str("\nThis assessment provides a foundation for strategic planning and targeted improvement.");
        out
    }

    fn strategic_recommendations(ctx: &PromptContext<'_>) -> String {
        let mut out = String::from("STRATEGIC RECOMMENDATIONS\n\n");

        if ctx.scoring.recommendations.is_empty() {
            out.push_str(
                "IMMEDIATE ACTIONS (0-90 days):\n\
                 - Share assessment findings with leadership\n\
                 - Identify the next set of AI initiatives to scale\n",
            );
            return out;
        }

        for rec in &ctx.scoring.recommendations {
            out.push_str(&format!("{} [{} priority, {}]\n", rec.title, rec.priority.label(), rec.timeline));
            out.push_str(&format!("{}\n", rec.description));
            for action in &rec.actions {
                out.push_str(&format!("- {}\n", action));
            }
            out.push('\n');
        }
        out.trim_end().to_string()
    }

    fn risk_assessment(ctx: &PromptContext<'_>) -> String {
        let mut out = String::from("RISK ASSESSMENT & MITIGATION\n\nHIGH-PRIORITY RISKS:\n");

        let mut weak: Vec<_> = ctx
            .scoring
            .domain_scores
            .iter()
            .filter(|d| d.question_count > 0 && d.maturity.level <= 2)
            .collect();
        weak.sort_by(|a, b| a.average_score.total_cmp(&b.average_score));

        if weak.is_empty() {
            out.push_str("- Change fatigue as initiatives scale\n");
        }
        for domain in weak.iter().take(ctx.tier.analysis_depth.priority_count()) {
            out.push_str(&format!(
                "- {} at {} maturity ({:.1}%)\n",
                domain.domain.display_name(),
                domain.maturity.name,
                domain.percentage
            ));
        }

        out.push_str(
            "\nMITIGATION STRATEGIES:\n\
             - Phased implementation with adequate resource allocation\n\
             - Training, support and stakeholder engagement programs\n\
             - Clear governance with named accountability\n\n\
             MONITORING & CONTROLS:\n\
             - Monthly progress reviews and course correction\n\
             - Risk indicator tracking and early warning signs",
        );
        out
    }

    fn organizational_structure(ctx: &PromptContext<'_>) -> String {
        let mut out = String::from("ORGANIZATIONAL STRUCTURE ANALYSIS\n\n");
        match &ctx.scoring.team_analysis {
            Some(team) => {
                out.push_str(&format!(
                    "Responses were collected from {} participants across {} departments:\n",
                    team.member_count,
                    team.department_breakdown.len()
                ));
                for (department, count) in &team.department_breakdown {
                    out.push_str(&format!("- {}: {}\n", department, count));
                }
                out.push('\n');
            }
            None => out.push_str("No departmental roster was provided with this assessment.\n\n"),
        }
        out.push_str(
            "OPTIMIZATION RECOMMENDATIONS:\n\
             - Clarify ownership of AI strategy and governance\n\
             - Streamline decision-making for AI initiatives\n\
             - Align organizational design with strategic objectives",
        );
        out
    }

    fn benchmarking(ctx: &PromptContext<'_>) -> String {
        let percent = Self::overall_percent(ctx);
        format!(
            "INDUSTRY BENCHMARKING\n\n\
             {} scores {:.0}% overall, at the {} stage. Institutions at this stage typically \
             focus on {}.",
            ctx.institution_name,
            percent,
            ctx.scoring.maturity_profile.overall.name,
            match ctx.scoring.maturity_profile.overall.level {
                0..=2 => "building governance foundations and running first pilots",
                3 => "scaling pilots and measuring impact",
                _ => "embedding AI across core processes and sharing practice with peers",
            }
        )
    }

    fn financial_projections(ctx: &PromptContext<'_>) -> String {
        format!(
            "FINANCIAL IMPACT PROJECTIONS\n\n\
             Detailed projections for {} were not available for this report. \
             Cost and ROI modelling should follow once the {} high-priority recommendations are scoped.",
            ctx.institution_name,
            ctx.scoring
                .recommendations
                .iter()
                .filter(|r| r.priority == Priority::High)
                .count()
        )
    }

    fn change_management(ctx: &PromptContext<'_>) -> String {
        let culture = ctx
            .scoring
            .domain_score(DomainId::Culture)
            .filter(|d| d.question_count > 0)
            .map(|d| format!("Culture and change readiness currently scores {:.1}%.\n\n", d.percentage))
            .unwrap_or_default();
        format!(
            "CHANGE MANAGEMENT STRATEGY\n\n{}\
             - Stakeholder engagement plan covering faculty, staff and students\n\
             - Regular communication on AI decisions and their impact\n\
             - Training programs matched to role and confidence\n\
             - Channels for surfacing and addressing resistance",
            culture
        )
    }

    fn structure_visualization(ctx: &PromptContext<'_>) -> String {
        format!(
            "{} > AI Steering Committee\n\
             AI Steering Committee > Governance & Ethics\n\
             AI Steering Committee > Teaching & Learning\n\
             AI Steering Committee > Technology & Infrastructure",
            ctx.institution_name
        )
    }
}
