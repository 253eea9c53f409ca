//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the readiness assessment domain.

mod domain_id;
mod errors;
mod ids;
mod priority;
mod timestamp;

pub use domain_id::{DomainId, PolicyArea, QuestionArea};
pub use errors::ValidationError;
pub use ids::AssessmentId;
pub use priority::Priority;
pub use timestamp::Timestamp;

/// Rounds `value` to `decimals` decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
