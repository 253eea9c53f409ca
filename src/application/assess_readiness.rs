//! AssessReadinessHandler - Command handler producing a full readiness report.
//!
//! Scores the responses, plans the tier's narrative sections and runs them
//! through the content orchestrator. Scoring and tier errors are fatal;
//! generation failures only ever show up as fallback sections.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::content_orchestrator::{BatchReport, ContentOrchestrator};
use crate::domain::assessment::{ScoringEngine, ScoringResult};
use crate::domain::foundation::{AssessmentId, Timestamp};
use crate::domain::report::{
    ConfigurationError, PlanOptions, PromptContext, SectionResult, TierConfig, TierContentPlanner,
};
use crate::domain::scoring::{Response, ScoringError, TeamMember};

/// Errors that abort report production.
#[derive(Debug, thiserror::Error)]
pub enum AssessReadinessError {
    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoringError),

    #[error("invalid report configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("invalid assessment input: {0}")]
    InvalidInput(#[from] serde_json::Error),

    #[error("failed to read assessment input: {0}")]
    Io(#[from] std::io::Error),
}

/// Assessment document as submitted by callers.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentInput {
    pub institution_name: String,
    #[serde(default)]
    pub responses: Vec<Response>,
    #[serde(default)]
    pub team_members: Vec<TeamMember>,
    /// Tier id; the configured default applies when absent.
    #[serde(default)]
    pub tier: Option<String>,
}

impl AssessmentInput {
    /// Parses an assessment from JSON.
    ///
    /// Unknown domains, unknown question prefixes and out-of-range scores
    /// are rejected here.
    pub fn from_json_str(json: &str) -> Result<Self, AssessReadinessError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses an assessment file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AssessReadinessError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Converts the input into a command, using `default_tier` when the
    /// document names none.
    pub fn into_command(self, default_tier: &str) -> AssessReadinessCommand {
        AssessReadinessCommand {
            institution_name: self.institution_name,
            responses: self.responses,
            team_members: self.team_members,
            tier: self.tier.unwrap_or_else(|| default_tier.to_string()),
        }
    }
}

/// Command to assess an institution and produce its report.
#[derive(Debug, Clone)]
pub struct AssessReadinessCommand {
    pub institution_name: String,
    pub responses: Vec<Response>,
    pub team_members: Vec<TeamMember>,
    pub tier: String,
}

/// Batch statistics reported alongside the sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub processing_time_ms: u64,
    pub fulfilled: usize,
    pub fallback: usize,
}

/// The complete report: scores plus narrative sections.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessReport {
    pub assessment_id: AssessmentId,
    pub generated_at: Timestamp,
    pub institution_name: String,
    pub tier: TierConfig,
    pub scoring: ScoringResult,
    pub sections: Vec<SectionResult>,
    pub batch: BatchSummary,
}

/// Handler for readiness assessments.
pub struct AssessReadinessHandler {
    engine: ScoringEngine,
    orchestrator: ContentOrchestrator,
    plan_options: PlanOptions,
}

impl AssessReadinessHandler {
    pub fn new(engine: ScoringEngine, orchestrator: ContentOrchestrator, plan_options: PlanOptions) -> Self {
        Self {
            engine,
            orchestrator,
            plan_options,
        }
    }

    pub async fn handle(&self, cmd: AssessReadinessCommand) -> Result<ReadinessReport, AssessReadinessError> {
        // 1. Resolve the tier before doing any work
        let tier = TierContentPlanner::resolve(&cmd.tier)?;

        // 2. Score
        let scoring = self.engine.assess(&cmd.responses, &cmd.team_members)?;
        info!(
            institution = %cmd.institution_name,
            overall_score = scoring.overall_score,
            maturity = %scoring.maturity_profile.overall.name,
            "Assessment scored"
        );

        // 3. Plan and generate narrative sections
        let requests = TierContentPlanner::plan(&tier, &self.plan_options);
        let ctx = PromptContext {
            institution_name: &cmd.institution_name,
            tier: &tier,
            scoring: &scoring,
        };
        let BatchReport {
            sections,
            processing_time,
            fulfilled,
            fallback,
        } = self.orchestrator.generate(&requests, &ctx).await;

        Ok(ReadinessReport {
            assessment_id: AssessmentId::new(),
            generated_at: Timestamp::now(),
            institution_name: cmd.institution_name,
            tier,
            scoring,
            sections,
            batch: BatchSummary {
                processing_time_ms: u64::try_from(processing_time.as_millis()).unwrap_or(u64::MAX),
                fulfilled,
                fallback,
            },
        })
    }
}
