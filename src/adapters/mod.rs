//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `ai` - Text generation services (OpenAI, mock, offline)

pub mod ai;

pub use ai::{MockGenerationService, OfflineGenerationService, OpenAiConfig, OpenAiGenerationService};
