//! Scoring error types.

use thiserror::Error;

use crate::domain::foundation::{DomainId, ValidationError};

/// Errors raised while configuring or running a scoring pass.
///
/// All of these are fatal: a malformed input or table must not silently
/// produce a plausible-looking report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("domain weights must sum to 1.0, got {sum}")]
    InvalidWeightSum { sum: f64 },

    #[error("no weight configured for domain '{0}'")]
    MissingWeight(DomainId),

    #[error("weight for domain '{domain}' must be a finite non-negative number, got {weight}")]
    InvalidWeight { domain: DomainId, weight: f64 },

    #[error("maturity table is empty")]
    EmptyMaturityTable,

    #[error("maturity table must span 0.0 to 5.0, covers {min} to {max}")]
    MaturityTableBounds { min: f64, max: f64 },

    #[error("maturity table has a gap between {previous_max} and {next_min}")]
    MaturityTableGap { previous_max: f64, next_min: f64 },

    #[error("maturity band {level} is inverted or not finite: {min} to {max}")]
    InvalidMaturityBand { level: u8, min: f64, max: f64 },

    #[error("maturity bands must ascend, band {level} starts below its predecessor")]
    MaturityTableOrder { level: u8 },

    #[error("consensus calibration must be finite and positive, got {0}")]
    InvalidCalibration(f64),

    #[error("duplicate response for question '{0}'")]
    DuplicateResponse(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
