//! Generation service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::application::DEFAULT_SYSTEM_PROMPT;

/// Generation service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key; without one the report uses fallback content only
    pub openai_api_key: Option<String>,

    /// Chat model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,

    /// System prompt sent with every section
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Check if OpenAI is configured
    pub fn has_openai(&self) -> bool {
        self.openai_api_key.as_ref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Validate generation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.request_timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.model.trim().is_empty() {
            return Err(ValidationError::EmptyModel);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            request_timeout_secs: default_timeout(),
            system_prompt: default_system_prompt(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.request_timeout_secs, 60);
        assert!(config.system_prompt.starts_with("You are an expert organizational analyst"));
        assert!(!config.has_openai());
    }

    #[test]
    fn test_timeout_duration() {
        let config = AiConfig {
            request_timeout_secs: 30,
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_blank_key_is_not_configured() {
        let config = AiConfig {
            openai_api_key: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(!config.has_openai());
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let config = AiConfig {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidTimeout)));
    }

    #[test]
    fn test_validation_rejects_bad_base_url() {
        let config = AiConfig {
            base_url: "api.openai.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidBaseUrl)));
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(AiConfig::default().validate().is_ok());
    }
}
