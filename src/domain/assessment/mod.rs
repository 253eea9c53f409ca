//! Assessment module - the scoring pass and its assembled result.

mod engine;
mod result;

pub use engine::ScoringEngine;
pub use result::{MaturityProfileSet, ScoringResult};
