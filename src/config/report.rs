//! Report generation configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::report::{PlanOptions, ReportTier};

/// Report generation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Bound on the whole section batch, in seconds
    #[serde(default = "default_global_deadline")]
    pub global_deadline_secs: u64,

    /// Bound on auxiliary units (structure visualization), in seconds
    #[serde(default = "default_auxiliary_deadline")]
    pub auxiliary_deadline_secs: u64,

    /// Adds the organizational structure section
    #[serde(default)]
    pub include_org_structure: bool,

    /// Tier used when an assessment names none
    #[serde(default = "default_tier")]
    pub default_tier: String,
}

impl ReportConfig {
    pub fn global_deadline(&self) -> Duration {
        Duration::from_secs(self.global_deadline_secs)
    }

    pub fn auxiliary_deadline(&self) -> Duration {
        Duration::from_secs(self.auxiliary_deadline_secs)
    }

    /// Planner options derived from this configuration
    pub fn plan_options(&self) -> PlanOptions {
        PlanOptions {
            include_org_structure: self.include_org_structure,
            auxiliary_deadline: self.auxiliary_deadline(),
        }
    }

    /// Validate report configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.global_deadline_secs == 0 {
            return Err(ValidationError::InvalidDeadline("global_deadline_secs"));
        }
        if self.auxiliary_deadline_secs == 0 {
            return Err(ValidationError::InvalidDeadline("auxiliary_deadline_secs"));
        }
        if self.auxiliary_deadline_secs > self.global_deadline_secs {
            return Err(ValidationError::AuxiliaryDeadlineTooLong);
        }
        self.default_tier
            .parse::<ReportTier>()
            .map_err(|_| ValidationError::UnknownTier(self.default_tier.clone()))?;
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            global_deadline_secs: default_global_deadline(),
            auxiliary_deadline_secs: default_auxiliary_deadline(),
            include_org_structure: false,
            default_tier: default_tier(),
        }
    }
}

fn default_global_deadline() -> u64 {
    45
}

fn default_auxiliary_deadline() -> u64 {
    15
}

fn default_tier() -> String {
    "standard".to_string()
}
