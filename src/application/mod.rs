//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

mod assess_readiness;
mod content_orchestrator;

pub use assess_readiness::{
    AssessReadinessCommand, AssessReadinessError, AssessReadinessHandler, AssessmentInput, BatchSummary,
    ReadinessReport,
};
pub use content_orchestrator::{
    BatchReport, ContentOrchestrator, OrchestratorConfig, SectionFailure, DEFAULT_GLOBAL_DEADLINE,
    DEFAULT_SYSTEM_PROMPT,
};
