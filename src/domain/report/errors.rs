//! Report planning errors.

use thiserror::Error;

/// Configuration defects. Always fatal: they indicate a programming or
/// deployment mistake, not bad input data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("unknown report tier '{0}' (expected basic, standard, comprehensive or enterprise)")]
    UnknownTier(String),
}
