//! Scoring engine configuration

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::error::{ConfigError, ValidationError};
use crate::domain::assessment::ScoringEngine;
use crate::domain::foundation::DomainId;
use crate::domain::recommendations::PolicyTriggerEvaluator;
use crate::domain::scoring::{DomainWeights, TeamConsensusAnalyzer, DEFAULT_CONSENSUS_CALIBRATION};

/// Scoring engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Variance-to-percent factor for team consensus
    #[serde(default = "default_calibration")]
    pub consensus_calibration: f64,

    /// Overrides the default domain weights; must cover every domain
    #[serde(default)]
    pub domain_weights: Option<BTreeMap<DomainId, f64>>,

    /// YAML file replacing the built-in policy rules
    #[serde(default)]
    pub policy_rules_path: Option<PathBuf>,
}

impl ScoringConfig {
    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.consensus_calibration.is_finite() || self.consensus_calibration <= 0.0 {
            return Err(ValidationError::InvalidCalibration);
        }
        if let Some(weights) = &self.domain_weights {
            DomainWeights::new(weights.clone()).map_err(|e| ValidationError::InvalidDomainWeights(e.to_string()))?;
        }
        Ok(())
    }

    /// Builds a scoring engine with the configured tables and the built-in scorers
    ///
    /// # Errors
    ///
    /// - `Scoring` if the weights or calibration are invalid
    /// - `PolicyRules` if the rule file cannot be read or fails validation
    pub fn engine(&self) -> Result<ScoringEngine, ConfigError> {
        let mut engine = ScoringEngine::with_default_scorers()
            .with_consensus(TeamConsensusAnalyzer::new(self.consensus_calibration)?);

        if let Some(weights) = &self.domain_weights {
            engine = engine.with_weights(DomainWeights::new(weights.clone())?);
        }
        if let Some(path) = &self.policy_rules_path {
            engine = engine.with_policy_evaluator(PolicyTriggerEvaluator::from_path(path)?);
        }
        Ok(engine)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            consensus_calibration: default_calibration(),
            domain_weights: None,
            policy_rules_path: None,
        }
    }
}

fn default_calibration() -> f64 {
    DEFAULT_CONSENSUS_CALIBRATION
}
