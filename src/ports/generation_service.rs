//! Generation Service Port - Interface for external text generation.
//!
//! The report orchestrator sends one request per narrative section and treats
//! every error uniformly: the section falls back to templated content. The
//! port therefore stays small: a single non-streaming call plus metadata.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EchoService;
//!
//! #[async_trait]
//! impl GenerationService for EchoService {
//!     async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, GenerationError> {
//!         Ok(GenerationResponse::new(request.prompt))
//!     }
//!
//!     fn service_info(&self) -> ServiceInfo {
//!         ServiceInfo::new("echo", "none")
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::report::SectionTopic;

/// Port for the external text-generation service.
///
/// Implementations must not retry internally; the orchestrator owns the
/// deadline and the fallback decision.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Generates text for a single prompt.
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, GenerationError>;

    /// Service information (name, model).
    fn service_info(&self) -> ServiceInfo;
}

/// Request for a single generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// User prompt.
    pub prompt: String,
    /// Optional system prompt sent ahead of the user prompt.
    pub system_prompt: Option<String>,
    /// Model identifier; `None` lets the adapter use its configured model.
    pub model: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Section this request belongs to, for routing and logging.
    pub topic: Option<SectionTopic>,
}

impl GenerationRequest {
    /// Creates a request with default parameters.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_prompt: None,
            model: None,
            max_tokens: 1000,
            temperature: 0.4,
            topic: None,
        }
    }

    /// Sets the system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Sets the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets max tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Sets temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Tags the request with its section topic.
    pub fn with_topic(mut self, topic: SectionTopic) -> Self {
        self.topic = Some(topic);
        self
    }
}

/// Response from a generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResponse {
    /// Generated text.
    pub content: String,
    pub usage: TokenUsage,
}

impl GenerationResponse {
    /// Creates a response with zero usage.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            usage: TokenUsage::zero(),
        }
    }

    /// Sets token usage.
    pub fn with_usage(mut self, usage: TokenUsage) -> Self {
        self.usage = usage;
        self
    }
}

/// Token usage reported by the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl TokenUsage {
    /// Creates new token usage.
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens.saturating_add(completion_tokens),
        }
    }

    /// Creates zero usage.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Service information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Service name (e.g., "openai", "offline").
    pub name: String,
    /// Model identifier (e.g., "gpt-4o").
    pub model: String,
}

impl ServiceInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Generation service errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// The call did not complete in time.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Network or protocol failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// API key missing or rejected.
    #[error("authentication failed")]
    Auth,

    /// Rate limited by the service.
    #[error("rate limited")]
    RateLimited,

    /// Response body could not be interpreted.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Service unavailable or not configured.
    #[error("service unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },
}

impl GenerationError {
    /// Creates a timeout error.
    pub fn timeout(timeout_secs: u64) -> Self {
        Self::Timeout { timeout_secs }
    }

    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a malformed response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}
