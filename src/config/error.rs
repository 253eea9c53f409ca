//! Configuration error types

use thiserror::Error;

use crate::domain::recommendations::PolicyRuleError;
use crate::domain::scoring::ScoringError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Scoring engine setup failed: {0}")]
    Scoring(#[from] ScoringError),

    #[error("Policy rules could not be loaded: {0}")]
    PolicyRules(#[from] PolicyRuleError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("Model name must not be empty")]
    EmptyModel,

    #[error("Deadline '{0}' must be greater than zero")]
    InvalidDeadline(&'static str),

    #[error("Auxiliary deadline exceeds the global deadline")]
    AuxiliaryDeadlineTooLong,

    #[error("Unknown default tier: {0}")]
    UnknownTier(String),

    #[error("Consensus calibration must be finite and positive")]
    InvalidCalibration,

    #[error("Invalid domain weights: {0}")]
    InvalidDomainWeights(String),
}
