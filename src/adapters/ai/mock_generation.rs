//! Mock Generation Service - Test double for the generation port.
//!
//! Provides configurable responses per section topic for testing the
//! orchestrator and the assessment handler without calling a real service.
//!
//! # Features
//!
//! - Scripted responses or errors per topic, with a default for the rest
//! - Simulated latency, per topic or global
//! - Hanging calls that never resolve, for deadline tests
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let service = MockGenerationService::new()
//!     .with_topic_response(SectionTopic::ExecutiveSummary, "Summary text")
//!     .with_topic_error(SectionTopic::RiskAssessment, GenerationError::Auth)
//!     .with_topic_hang(SectionTopic::Benchmarking);
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::report::SectionTopic;
use crate::ports::{GenerationError, GenerationRequest, GenerationResponse, GenerationService, ServiceInfo, TokenUsage};

/// Configured outcome of a mock call.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return generated content.
    Success {
        content: String,
        usage: TokenUsage,
    },
    /// Return an error.
    Error(GenerationError),
    /// Never resolve.
    Hang,
}

#[derive(Debug, Clone)]
struct Script {
    response: MockResponse,
    delay: Option<Duration>,
}

impl Script {
    fn new(response: MockResponse) -> Self {
        Self { response, delay: None }
    }
}

/// Mock generation service for testing.
#[derive(Debug, Clone)]
pub struct MockGenerationService {
    scripts: Arc<Mutex<HashMap<SectionTopic, Script>>>,
    default_response: MockResponse,
    delay: Duration,
    info: ServiceInfo,
    calls: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl Default for MockGenerationService {
    fn default() -> Self {
        Self::new()
    }
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockGenerationService {
    /// Creates a mock that answers every topic with default content.
    pub fn new() -> Self {
        Self {
            scripts: Arc::new(Mutex::new(HashMap::new())),
            default_response: MockResponse::Success {
                content: "Mock section content".to_string(),
                usage: TokenUsage::new(50, 100),
            },
            delay: Duration::ZERO,
            info: ServiceInfo::new("mock", "mock-model-1"),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a mock whose calls never resolve.
    pub fn hanging() -> Self {
        Self::new().with_default(MockResponse::Hang)
    }

    /// Creates a mock whose calls all fail with the given error.
    pub fn failing(error: GenerationError) -> Self {
        Self::new().with_default(MockResponse::Error(error))
    }

    /// Sets the outcome for topics without a script.
    pub fn with_default(mut self, response: MockResponse) -> Self {
        self.default_response = response;
        self
    }

    /// Scripts an outcome for one topic.
    pub fn with_topic(self, topic: SectionTopic, response: MockResponse) -> Self {
        locked(&self.scripts).insert(topic, Script::new(response));
        self
    }

    /// Scripts successful content for one topic.
    pub fn with_topic_response(self, topic: SectionTopic, content: impl Into<String>) -> Self {
        self.with_topic(
            topic,
            MockResponse::Success {
                content: content.into(),
                usage: TokenUsage::new(50, 100),
            },
        )
    }

    /// Scripts an error for one topic.
    pub fn with_topic_error(self, topic: SectionTopic, error: GenerationError) -> Self {
        self.with_topic(topic, MockResponse::Error(error))
    }

    /// Scripts a call that never resolves for one topic.
    pub fn with_topic_hang(self, topic: SectionTopic) -> Self {
        self.with_topic(topic, MockResponse::Hang)
    }

    /// Sets simulated latency for one topic, overriding the global delay.
    pub fn with_topic_delay(self, topic: SectionTopic, delay: Duration) -> Self {
        {
            let mut scripts = locked(&self.scripts);
            let default = self.default_response.clone();
            scripts
                .entry(topic)
                .or_insert_with(|| Script::new(default))
                .delay = Some(delay);
        }
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this service.
    pub fn call_count(&self) -> usize {
        locked(&self.calls).len()
    }

    /// Returns all recorded calls.
    pub fn calls(&self) -> Vec<GenerationRequest> {
        locked(&self.calls).clone()
    }

    /// Topics of recorded calls, in dispatch order.
    pub fn called_topics(&self) -> Vec<SectionTopic> {
        locked(&self.calls).iter().filter_map(|r| r.topic).collect()
    }

    fn script_for(&self, topic: Option<SectionTopic>) -> (MockResponse, Duration) {
        let script = topic.and_then(|t| locked(&self.scripts).get(&t).cloned());
        match script {
            Some(script) => (script.response, script.delay.unwrap_or(self.delay)),
            None => (self.default_response.clone(), self.delay),
        }
    }
}

#[async_trait]
impl GenerationService for MockGenerationService {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, GenerationError> {
        let (response, delay) = self.script_for(request.topic);
        locked(&self.calls).push(request);

        if !delay.is_zero() {
            sleep(delay).await;
        }

        match response {
            MockResponse::Success { content, usage } => Ok(GenerationResponse::new(content).with_usage(usage)),
            MockResponse::Error(err) => Err(err),
            MockResponse::Hang => futures::future::pending().await,
        }
    }

    fn service_info(&self) -> ServiceInfo {
        self.info.clone()
    }
}
