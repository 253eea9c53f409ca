//! Tier Content Planner - turns a tier into the list of section requests.
//!
//! The planner only emits configuration; it never calls the generation
//! service.

use std::time::Duration;

use super::{
    prompts, ConfigurationError, ModelParams, OptionalSection, ReportTier, SectionRequest, SectionTopic, TierConfig,
};

/// Default deadline for auxiliary units.
pub const DEFAULT_AUXILIARY_DEADLINE: Duration = Duration::from_secs(15);

/// Share of the token ceiling given to risk sections.
const RISK_TOKEN_SHARE: f64 = 0.8;

/// Token ceiling for the auxiliary structure visualization.
const VISUALIZATION_MAX_TOKENS: u32 = 800;

/// Per-run planning switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanOptions {
    /// Adds the organizational structure section and its auxiliary diagram.
    pub include_org_structure: bool,
    pub auxiliary_deadline: Duration,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            include_org_structure: false,
            auxiliary_deadline: DEFAULT_AUXILIARY_DEADLINE,
        }
    }
}

/// Stateless tier lookup and request builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct TierContentPlanner;

impl TierContentPlanner {
    /// Resolves a tier id to its configuration.
    ///
    /// # Errors
    ///
    /// `UnknownTier` for any id outside the closed tier set.
    pub fn resolve(tier_id: &str) -> Result<TierConfig, ConfigurationError> {
        Ok(Self::config_for(tier_id.parse()?))
    }

    pub fn config_for(tier: ReportTier) -> TierConfig {
        TierConfig::for_tier(tier)
    }

    /// Builds section requests in report order.
    pub fn plan(config: &TierConfig, options: &PlanOptions) -> Vec<SectionRequest> {
        let mut topics = vec![
            SectionTopic::ExecutiveSummary,
            SectionTopic::StrategicRecommendations,
            SectionTopic::RiskAssessment,
        ];
        if options.include_org_structure {
            topics.push(SectionTopic::OrganizationalStructure);
        }
        let optional = [
            (OptionalSection::Benchmarking, SectionTopic::Benchmarking),
            (OptionalSection::FinancialProjections, SectionTopic::FinancialProjections),
            (OptionalSection::ChangeManagement, SectionTopic::ChangeManagement),
        ];
        topics.extend(
            optional
                .iter()
                .filter(|(section, _)| config.includes(*section))
                .map(|(_, topic)| *topic),
        );
        if options.include_org_structure {
            topics.push(SectionTopic::StructureVisualization);
        }

        topics
            .into_iter()
            .map(|topic| {
                let request = SectionRequest::new(topic, prompts::builder_for(topic), Self::params_for(topic, config));
                if topic.is_auxiliary() {
                    request.with_deadline(options.auxiliary_deadline)
                } else {
                    request
                }
            })
            .collect()
    }

    /// Model parameters for a topic under a tier's token ceiling.
    pub fn params_for(topic: SectionTopic, config: &TierConfig) -> ModelParams {
        let ceiling = config.max_tokens_per_section;
        let (max_tokens, temperature) = match topic {
            SectionTopic::ExecutiveSummary | SectionTopic::FinancialProjections => (ceiling, 0.3),
            SectionTopic::RiskAssessment => ((f64::from(ceiling) * RISK_TOKEN_SHARE).floor() as u32, 0.5),
            SectionTopic::StructureVisualization => (VISUALIZATION_MAX_TOKENS.min(ceiling), 0.4),
            SectionTopic::StrategicRecommendations
            | SectionTopic::OrganizationalStructure
            | SectionTopic::Benchmarking
            | SectionTopic::ChangeManagement => (ceiling, 0.4),
        };
        ModelParams {
            max_tokens,
            temperature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topics(requests: &[SectionRequest]) -> Vec<SectionTopic> {
        requests.iter().map(|r| r.topic).collect()
    }

    #[test]
    fn resolve_rejects_unknown_tier() {
        assert!(TierContentPlanner::resolve("comprehensive").is_ok());
        assert_eq!(
            TierContentPlanner::resolve("express-diagnostic").unwrap_err(),
            ConfigurationError::UnknownTier("express-diagnostic".to_string())
        );
    }

    #[test]
    fn basic_plans_core_sections_only() {
        let config = TierContentPlanner::config_for(ReportTier::Basic);
        let requests = TierContentPlanner::plan(&config, &PlanOptions::default());
        assert_eq!(
            topics(&requests),
            vec![
                SectionTopic::ExecutiveSummary,
                SectionTopic::StrategicRecommendations,
                SectionTopic::RiskAssessment
            ]
        );
        assert_eq!(requests.len(), config.target_section_count);
        assert!(requests.iter().all(|r| r.deadline.is_none()));
    }

    #[test]
    fn enterprise_requests_more_and_larger_sections_than_basic() {
        let basic = TierContentPlanner::plan(&TierContentPlanner::config_for(ReportTier::Basic), &PlanOptions::default());
        let enterprise = TierContentPlanner::plan(
            &TierContentPlanner::config_for(ReportTier::Enterprise),
            &PlanOptions::default(),
        );

        assert!(enterprise.len() > basic.len());
        let total = |requests: &[SectionRequest]| requests.iter().map(|r| r.params.max_tokens).sum::<u32>();
        assert!(total(&enterprise[..]) > total(&basic[..]));
        for (b, e) in basic.iter().zip(&enterprise) {
            assert_eq!(b.topic, e.topic);
            assert!(e.params.max_tokens > b.params.max_tokens);
        }
    }

    #[test]
    fn org_structure_adds_section_and_auxiliary_unit() {
        let config = TierContentPlanner::config_for(ReportTier::Standard);
        let options = PlanOptions {
            include_org_structure: true,
            auxiliary_deadline: Duration::from_secs(5),
        };
        let requests = TierContentPlanner::plan(&config, &options);

        assert_eq!(
            topics(&requests),
            vec![
                SectionTopic::ExecutiveSummary,
                SectionTopic::StrategicRecommendations,
                SectionTopic::RiskAssessment,
                SectionTopic::OrganizationalStructure,
                SectionTopic::Benchmarking,
                SectionTopic::StructureVisualization
            ]
        );
        let last = requests.last().unwrap();
        assert_eq!(last.deadline, Some(Duration::from_secs(5)));
        assert!(requests[..5].iter().all(|r| r.deadline.is_none()));
    }

    #[test]
    fn risk_sections_use_reduced_token_ceiling() {
        let config = TierContentPlanner::config_for(ReportTier::Basic);
        let params = TierContentPlanner::params_for(SectionTopic::RiskAssessment, &config);
        assert_eq!(params.max_tokens, 1200);
        assert_eq!(params.temperature, 0.5);

        let summary = TierContentPlanner::params_for(SectionTopic::ExecutiveSummary, &config);
        assert_eq!(summary.max_tokens, 1500);
        assert_eq!(summary.temperature, 0.3);
    }
}
