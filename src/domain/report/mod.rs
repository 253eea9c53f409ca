//! Report module - planning narrative sections and their fallbacks.
//!
//! - `tier` - closed tier set and content budgets
//! - `section` - section requests, results and the prompt context
//! - `planner` - tier to section-request mapping
//! - `prompts` - prompt builders per topic
//! - `fallback` - deterministic text used when generation fails

mod errors;
mod fallback;
mod planner;
pub mod prompts;
mod section;
mod tier;

pub use errors::ConfigurationError;
pub use fallback::FallbackContentProvider;
pub use planner::{PlanOptions, TierContentPlanner, DEFAULT_AUXILIARY_DEADLINE};
pub use section::{
    ModelParams, PromptBuilder, PromptContext, SectionRequest, SectionResult, SectionStatus, SectionTopic,
};
pub use tier::{AnalysisDepth, OptionalSection, ReportTier, TierConfig};
