//! Narrative section requests and results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use super::TierConfig;
use crate::domain::assessment::ScoringResult;

/// A named unit of narrative report content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionTopic {
    ExecutiveSummary,
    StrategicRecommendations,
    RiskAssessment,
    OrganizationalStructure,
    Benchmarking,
    FinancialProjections,
    ChangeManagement,
    /// Supplementary structure diagram description; lower priority.
    StructureVisualization,
}

impl SectionTopic {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionTopic::ExecutiveSummary => "executive_summary",
            SectionTopic::StrategicRecommendations => "strategic_recommendations",
            SectionTopic::RiskAssessment => "risk_assessment",
            SectionTopic::OrganizationalStructure => "organizational_structure",
            SectionTopic::Benchmarking => "benchmarking",
            SectionTopic::FinancialProjections => "financial_projections",
            SectionTopic::ChangeManagement => "change_management",
            SectionTopic::StructureVisualization => "structure_visualization",
        }
    }

    /// Heading used by the renderer and by fallback text.
    pub fn title(&self) -> &'static str {
        match self {
            SectionTopic::ExecutiveSummary => "Executive Summary",
            SectionTopic::StrategicRecommendations => "Strategic Recommendations",
            SectionTopic::RiskAssessment => "Risk Assessment & Mitigation",
            SectionTopic::OrganizationalStructure => "Organizational Structure Analysis",
            SectionTopic::Benchmarking => "Industry Benchmarking",
            SectionTopic::FinancialProjections => "Financial Impact Projections",
            SectionTopic::ChangeManagement => "Change Management Strategy",
            SectionTopic::StructureVisualization => "Structure Visualization",
        }
    }

    /// Auxiliary units may run under a shorter, independent deadline.
    pub fn is_auxiliary(&self) -> bool {
        matches!(self, SectionTopic::StructureVisualization)
    }
}

impl fmt::Display for SectionTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generation parameters for one section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Everything a prompt builder or fallback template may read.
#[derive(Debug, Clone, Copy)]
pub struct PromptContext<'a> {
    pub institution_name: &'a str,
    pub tier: &'a TierConfig,
    pub scoring: &'a ScoringResult,
}

/// Builds a prompt from the scoring context.
pub type PromptBuilder = Arc<dyn Fn(&PromptContext<'_>) -> String + Send + Sync>;

/// One narrative section to generate.
#[derive(Clone)]
pub struct SectionRequest {
    pub topic: SectionTopic,
    pub prompt_builder: PromptBuilder,
    pub params: ModelParams,
    /// Shorter, independent deadline for auxiliary units. Never extends the
    /// batch deadline.
    pub deadline: Option<Duration>,
}

impl SectionRequest {
    pub fn new(topic: SectionTopic, prompt_builder: PromptBuilder, params: ModelParams) -> Self {
        Self {
            topic,
            prompt_builder,
            params,
            deadline: None,
        }
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn build_prompt(&self, ctx: &PromptContext<'_>) -> String {
        (self.prompt_builder)(ctx)
    }
}

impl fmt::Debug for SectionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionRequest")
            .field("topic", &self.topic)
            .field("params", &self.params)
            .field("deadline", &self.deadline)
            .finish_non_exhaustive()
    }
}

/// How a section's text was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionStatus {
    Fulfilled,
    Fallback,
}

/// Resolved content for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionResult {
    pub topic: SectionTopic,
    pub status: SectionStatus,
    pub text: String,
    /// Why generation was abandoned, for fallback sections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl SectionResult {
    pub fn fulfilled(topic: SectionTopic, text: impl Into<String>) -> Self {
        Self {
            topic,
            status: SectionStatus::Fulfilled,
            text: text.into(),
            failure: None,
        }
    }

    pub fn fallback(topic: SectionTopic, text: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            topic,
            status: SectionStatus::Fallback,
            text: text.into(),
            failure: Some(reason.into()),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.status == SectionStatus::Fallback
    }
}
