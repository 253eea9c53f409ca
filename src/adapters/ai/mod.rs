//! Generation Service Adapters.
//!
//! Implementations of the GenerationService port.
//!
//! ## Available Adapters
//!
//! - `OpenAiGenerationService` - OpenAI chat completions over HTTP
//! - `MockGenerationService` - Configurable mock for testing
//! - `OfflineGenerationService` - Always unavailable, forcing fallback content

mod mock_generation;
mod offline_generation;
mod openai_generation;

pub use mock_generation::{MockGenerationService, MockResponse};
pub use offline_generation::OfflineGenerationService;
pub use openai_generation::{OpenAiConfig, OpenAiGenerationService};
