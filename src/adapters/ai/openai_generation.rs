//! OpenAI Generation Service - Implementation of GenerationService for the
//! OpenAI chat completions API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAiConfig::new(api_key)
//!     .with_model("gpt-4o")
//!     .with_base_url("https://api.openai.com/v1");
//!
//! let service = OpenAiGenerationService::new(config)?;
//! ```
//!
//! Requests are sent once. Retrying is left to the caller, which for report
//! sections means falling back to templated content.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{GenerationError, GenerationRequest, GenerationResponse, GenerationService, ServiceInfo, TokenUsage};

/// Configuration for the OpenAI service.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model used when the request does not name one.
    pub model: String,
    /// Base URL for the API (default: https://api.openai.com/v1).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-4o".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI chat completions client.
pub struct OpenAiGenerationService {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiGenerationService {
    /// Creates a new service with the given configuration.
    ///
    /// # Errors
    ///
    /// `Transport` if the HTTP client cannot be built.
    pub fn new(config: OpenAiConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GenerationError::transport(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Converts our request to OpenAI's format.
    fn to_openai_request(&self, request: &GenerationRequest) -> OpenAiRequest {
        let mut messages = Vec::with_capacity(2);
        if let Some(ref prompt) = request.system_prompt {
            messages.push(OpenAiMessage {
                role: "system".to_string(),
                content: prompt.clone(),
            });
        }
        messages.push(OpenAiMessage {
            role: "user".to_string(),
            content: request.prompt.clone(),
        });

        OpenAiRequest {
            model: request.model.clone().unwrap_or_else(|| self.config.model.clone()),
            messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }

    fn map_send_error(&self, e: reqwest::Error) -> GenerationError {
        if e.is_timeout() {
            GenerationError::timeout(self.config.timeout.as_secs())
        } else if e.is_connect() {
            GenerationError::transport(format!("connection failed: {}", e))
        } else {
            GenerationError::transport(e.to_string())
        }
    }
}

/// Maps a non-success HTTP status to a generation error.
pub(crate) fn classify_status(status: StatusCode, body: &str) -> GenerationError {
    match status.as_u16() {
        401 | 403 => GenerationError::Auth,
        429 => GenerationError::RateLimited,
        500..=599 => GenerationError::unavailable(format!("server error {}: {}", status, body)),
        _ => GenerationError::transport(format!("unexpected status {}: {}", status, body)),
    }
}

/// Extracts content and usage from a response body.
pub(crate) fn parse_completion(body: &str) -> Result<GenerationResponse, GenerationError> {
    let response: OpenAiResponse =
        serde_json::from_str(body).map_err(|e| GenerationError::malformed(format!("failed to parse response: {}", e)))?;

    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| GenerationError::malformed("no content in response"))?;

    let usage = response
        .usage
        .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens))
        .unwrap_or_default();

    Ok(GenerationResponse::new(content).with_usage(usage))
}

#[async_trait]
impl GenerationService for OpenAiGenerationService {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, GenerationError> {
        let body = self.to_openai_request(&request);

        let response = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            return Err(classify_status(status, &text));
        }
        parse_completion(&text)
    }

    fn service_info(&self) -> ServiceInfo {
        ServiceInfo::new("openai", self.config.model.clone())
    }
}

// ----- OpenAI API Types -----

#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    usage: Option<OpenAiUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}
