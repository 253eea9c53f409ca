//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `READINESS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use readiness_assessor::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Batch deadline: {:?}", config.report.global_deadline());
//! ```

mod ai;
mod error;
mod report;
mod scoring;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use report::ReportConfig;
pub use scoring::ScoringConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// offline configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Generation service configuration (OpenAI)
    #[serde(default)]
    pub ai: AiConfig,

    /// Report deadlines, tier and section switches
    #[serde(default)]
    pub report: ReportConfig,

    /// Scoring tables and calibration
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `READINESS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `READINESS__AI__OPENAI_API_KEY=sk-...` -> `ai.openai_api_key = ...`
    /// - `READINESS__REPORT__GLOBAL_DEADLINE_SECS=30` -> `report.global_deadline_secs = 30`
    /// - `READINESS__SCORING__DOMAIN_WEIGHTS__STRATEGY=0.25` -> `scoring.domain_weights.strategy`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("READINESS").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.report.validate()?;
        self.scoring.validate()?;
        Ok(())
    }
}
