//! ContentOrchestrator - Concurrent generation of report sections.
//!
//! Every section request becomes an independent unit of work awaiting the
//! generation service. All units share one batch deadline measured from the
//! moment the batch is dispatched; auxiliary units may carry a shorter one.
//! A unit that fails, panics, returns nothing, or is still pending when its
//! deadline passes is replaced by fallback text computed from the scoring result.
//!
//! The orchestrator never fails: N requests always yield N results, in
//! request order.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use futures::FutureExt;
use serde::{Serialize, Serializer};
use tokio::time::{timeout_at, Instant};
use tracing::{debug, info, warn};

use crate::domain::report::{FallbackContentProvider, PromptContext, SectionRequest, SectionResult};
use crate::ports::{GenerationError, GenerationRequest, GenerationService};

/// Batch deadline used when none is configured.
pub const DEFAULT_GLOBAL_DEADLINE: Duration = Duration::from_secs(45);

/// System prompt sent ahead of every section prompt.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are an expert organizational analyst and technical writer. \
     Create clear, professional, and actionable content for executive reports.";

/// Orchestrator settings.
#[derive(Debug, Clone, PartialEq)]
pub struct OrchestratorConfig {
    /// Upper bound on the whole batch, from dispatch.
    pub global_deadline: Duration,
    pub system_prompt: Option<String>,
    /// Model override; `None` uses the service's configured model.
    pub model: Option<String>,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            global_deadline: DEFAULT_GLOBAL_DEADLINE,
            system_prompt: Some(DEFAULT_SYSTEM_PROMPT.to_string()),
            model: None,
        }
    }
}

impl OrchestratorConfig {
    pub fn with_global_deadline(mut self, deadline: Duration) -> Self {
        self.global_deadline = deadline;
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Why a unit resolved to fallback content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionFailure {
    #[error("deadline of {0:?} elapsed")]
    DeadlineElapsed(Duration),

    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("empty response")]
    EmptyResponse,

    #[error("section unit panicked")]
    Panicked,
}

/// Resolved sections plus batch statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub sections: Vec<SectionResult>,
    #[serde(rename = "processingTimeMs", serialize_with = "serialize_millis")]
    pub processing_time: Duration,
    pub fulfilled: usize,
    pub fallback: usize,
}

fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}

impl BatchReport {
    /// Returns true when every section used fallback content.
    pub fn all_fallback(&self) -> bool {
        self.fulfilled == 0
    }
}

/// Dispatches section requests concurrently and substitutes fallbacks.
pub struct ContentOrchestrator {
    service: Arc<dyn GenerationService>,
    fallback: FallbackContentProvider,
    config: OrchestratorConfig,
}

impl ContentOrchestrator {
    pub fn new(service: Arc<dyn GenerationService>, config: OrchestratorConfig) -> Self {
        Self {
            service,
            fallback: FallbackContentProvider::new(),
            config,
        }
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Generates every requested section, returning results in request order.
    pub async fn generate(&self, requests: &[SectionRequest], ctx: &PromptContext<'_>) -> BatchReport {
        let start = Instant::now();
        let batch_deadline = start + self.config.global_deadline;

        info!(
            tier = %ctx.tier.tier,
            sections = requests.len(),
            service = %self.service.service_info().name,
            deadline_ms = self.config.global_deadline.as_millis() as u64,
            "Dispatching report sections"
        );

        let units = requests.iter().map(|request| {
            let deadline = match request.deadline {
                Some(own) => (start + own).min(batch_deadline),
                None => batch_deadline,
            };
            AssertUnwindSafe(self.run_unit(request, ctx, deadline, deadline.duration_since(start)))
                .catch_unwind()
                .map(|outcome| outcome.unwrap_or(Err(SectionFailure::Panicked)))
        });
        let outcomes = join_all(units).await;

        let sections: Vec<SectionResult> = requests
            .iter()
            .zip(outcomes)
            .map(|(request, outcome)| match outcome {
                Ok(text) => SectionResult::fulfilled(request.topic, text),
                Err(failure) => {
                    warn!(topic = %request.topic, reason = %failure, "Section fell back to templated content");
                    SectionResult::fallback(request.topic, self.fallback.content_for(request.topic, ctx), failure.to_string())
                }
            })
            .collect();

        let fallback = sections.iter().filter(|s| s.is_fallback()).count();
        let report = BatchReport {
            fulfilled: sections.len() - fallback,
            fallback,
            sections,
            processing_time: start.elapsed(),
        };

        info!(
            tier = %ctx.tier.tier,
            fulfilled = report.fulfilled,
            fallback = report.fallback,
            elapsed_ms = report.processing_time.as_millis() as u64,
            "Report sections resolved"
        );

        report
    }

    fn generation_request(&self, request: &SectionRequest, ctx: &PromptContext<'_>) -> GenerationRequest {
        let mut generation = GenerationRequest::new(request.build_prompt(ctx))
            .with_max_tokens(request.params.max_tokens)
            .with_temperature(request.params.temperature)
            .with_topic(request.topic);
        if let Some(prompt) = &self.config.system_prompt {
            generation = generation.with_system_prompt(prompt.clone());
        }
        if let Some(model) = &self.config.model {
            generation = generation.with_model(model.clone());
        }
        generation
    }

    async fn run_unit(
        &self,
        request: &SectionRequest,
        ctx: &PromptContext<'_>,
        deadline: Instant,
        budget: Duration,
    ) -> Result<String, SectionFailure> {
        let generation = self.generation_request(request, ctx);
        debug!(topic = %request.topic, max_tokens = generation.max_tokens, "Dispatching section");

        match timeout_at(deadline, self.service.generate(generation)).await {
            Err(_) => Err(SectionFailure::DeadlineElapsed(budget)),
            Ok(Err(err)) => Err(err.into()),
            Ok(Ok(response)) if response.content.trim().is_empty() => Err(SectionFailure::EmptyResponse),
            Ok(Ok(response)) => Ok(response.content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockGenerationService, MockResponse};
    use crate::ports::{GenerationResponse, ServiceInfo};
    use crate::domain::assessment::{ScoringEngine, ScoringResult};
    use crate::domain::report::{PlanOptions, ReportTier, SectionStatus, SectionTopic, TierConfig, TierContentPlanner};
    use crate::domain::scoring::Response;

    fn scoring() -> ScoringResult {
        let responses = vec![
            Response::for_question("strategy_1", 4).unwrap(),
            Response::for_question("governance_1", 2).unwrap(),
            Response::for_question("culture_1", 3).unwrap(),
        ];
        ScoringEngine::default().assess(&responses, &[]).unwrap()
    }

    fn ctx<'a>(tier: &'a TierConfig, scoring: &'a ScoringResult) -> PromptContext<'a> {
        PromptContext {
            institution_name: "Hillview College",
            tier,
            scoring,
        }
    }

    fn assert_elapsed(start: Instant, expected: Duration) {
        let elapsed = start.elapsed();
        assert!(
            elapsed >= expected && elapsed < expected + Duration::from_millis(10),
            "elapsed {:?}, expected {:?}",
            elapsed,
            expected
        );
    }

    fn orchestrator(service: MockGenerationService, deadline: Duration) -> ContentOrchestrator {
        ContentOrchestrator::new(
            Arc::new(service),
            OrchestratorConfig::default().with_global_deadline(deadline),
        )
    }

    // ───────────────────────────────────────────────────────────────
    // Success paths
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn all_sections_fulfilled_in_request_order() {
        let scoring = scoring();
        let tier = TierConfig::for_tier(ReportTier::Standard);
        let requests = TierContentPlanner::plan(&tier, &PlanOptions::default());
        let service = MockGenerationService::new()
            .with_topic_response(SectionTopic::ExecutiveSummary, "Summary prose")
            .with_topic_response(SectionTopic::Benchmarking, "Benchmark prose");

        let report = orchestrator(service, Duration::from_secs(45))
            .generate(&requests, &ctx(&tier, &scoring))
            .await;

        assert_eq!(report.sections.len(), requests.len());
        assert_eq!(report.fulfilled, requests.len());
        assert_eq!(report.sections[0].text, "Summary prose");
        assert_eq!(report.sections[3].text, "Benchmark prose");
        for (request, section) in requests.iter().zip(&report.sections) {
            assert_eq!(request.topic, section.topic);
        }
    }

    #[tokio::test]
    async fn requests_carry_prompt_params_and_system_prompt() {
        let scoring = scoring();
        let tier = TierConfig::for_tier(ReportTier::Basic);
        let requests = TierContentPlanner::plan(&tier, &PlanOptions::default());
        let service = MockGenerationService::new();
        let orchestrator = ContentOrchestrator::new(
            Arc::new(service.clone()),
            OrchestratorConfig::default().with_model("gpt-4o-mini"),
        );

        orchestrator.generate(&requests, &ctx(&tier, &scoring)).await;

        let calls = service.calls();
        assert_eq!(calls.len(), 3);
        let risk = calls
            .iter()
            .find(|c| c.topic == Some(SectionTopic::RiskAssessment))
            .unwrap();
        assert_eq!(risk.max_tokens, 1200);
        assert_eq!(risk.temperature, 0.5);
        assert_eq!(risk.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(risk.system_prompt.as_deref(), Some(DEFAULT_SYSTEM_PROMPT));
        assert!(risk.prompt.contains("Hillview College"));
    }

    // ───────────────────────────────────────────────────────────────
    // Failure isolation
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn failed_section_falls_back_without_affecting_siblings() {
        let scoring = scoring();
        let tier = TierConfig::for_tier(ReportTier::Basic);
        let requests = TierContentPlanner::plan(&tier, &PlanOptions::default());
        let service =
            MockGenerationService::new().with_topic_error(SectionTopic::StrategicRecommendations, GenerationError::Auth);

        let report = orchestrator(service, Duration::from_secs(45))
            .generate(&requests, &ctx(&tier, &scoring))
            .await;

        assert_eq!(report.fulfilled, 2);
        assert_eq!(report.fallback, 1);
        let failed = &report.sections[1];
        assert_eq!(failed.status, SectionStatus::Fallback);
        assert!(failed.text.starts_with("STRATEGIC RECOMMENDATIONS"));
        assert_eq!(failed.failure.as_deref(), Some("generation failed: authentication failed"));
        assert_eq!(report.sections[0].status, SectionStatus::Fulfilled);
        assert_eq!(report.sections[2].status, SectionStatus::Fulfilled);
    }

    #[tokio::test]
    async fn blank_response_is_treated_as_failure() {
        let scoring = scoring();
        let tier = TierConfig::for_tier(ReportTier::Basic);
        let requests = TierContentPlanner::plan(&tier, &PlanOptions::default());
        let service = MockGenerationService::new().with_topic(
            SectionTopic::ExecutiveSummary,
            MockResponse::Success {
                content: "   ".to_string(),
                usage: Default::default(),
            },
        );

        let report = orchestrator(service, Duration::from_secs(45))
            .generate(&requests, &ctx(&tier, &scoring))
            .await;

        assert!(report.sections[0].is_fallback());
        assert_eq!(report.sections[0].failure.as_deref(), Some("empty response"));
        assert!(report.sections[0].text.contains("EXECUTIVE SUMMARY - Hillview College"));
    }

    /// Delegates to a mock but panics mid-call for one topic.
    struct PanicsOnTopic {
        topic: SectionTopic,
        inner: MockGenerationService,
    }

    #[async_trait::async_trait]
    impl GenerationService for PanicsOnTopic {
        async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, GenerationError> {
            if request.topic == Some(self.topic) {
                panic!("malformed usage block");
            }
            self.inner.generate(request).await
        }

        fn service_info(&self) -> ServiceInfo {
            ServiceInfo::new("panicky", "test")
        }
    }

    #[tokio::test]
    async fn panicking_unit_falls_back_without_losing_the_batch() {
        let scoring = scoring();
        let tier = TierConfig::for_tier(ReportTier::Basic);
        let requests = TierContentPlanner::plan(&tier, &PlanOptions::default());
        let service = PanicsOnTopic {
            topic: SectionTopic::RiskAssessment,
            inner: MockGenerationService::new(),
        };
        let orchestrator = ContentOrchestrator::new(Arc::new(service), OrchestratorConfig::default());

        let report = orchestrator.generate(&requests, &ctx(&tier, &scoring)).await;

        assert_eq!(report.sections.len(), 3);
        assert_eq!(report.fulfilled, 2);
        let risk = &report.sections[2];
        assert_eq!(risk.topic, SectionTopic::RiskAssessment);
        assert!(risk.is_fallback());
        assert_eq!(risk.failure.as_deref(), Some("section unit panicked"));
        assert!(risk.text.starts_with("RISK ASSESSMENT"));
    }

    // ───────────────────────────────────────────────────────────────
    // Deadlines
    // ───────────────────────────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn hanging_service_resolves_at_global_deadline() {
        let scoring = scoring();
        let tier = TierConfig::for_tier(ReportTier::Enterprise);
        let requests = TierContentPlanner::plan(&tier, &PlanOptions::default());
        let deadline = Duration::from_secs(45);
        let start = Instant::now();

        let report = orchestrator(MockGenerationService::hanging(), deadline)
            .generate(&requests, &ctx(&tier, &scoring))
            .await;

        assert_elapsed(start, deadline);
        assert_eq!(report.sections.len(), requests.len());
        assert!(report.all_fallback());
        assert!(report
            .sections
            .iter()
            .all(|s| s.failure.as_deref() == Some("deadline of 45s elapsed")));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_section_is_abandoned_while_fast_ones_succeed() {
        let scoring = scoring();
        let tier = TierConfig::for_tier(ReportTier::Basic);
        let requests = TierContentPlanner::plan(&tier, &PlanOptions::default());
        let service = MockGenerationService::new()
            .with_delay(Duration::from_secs(2))
            .with_topic_delay(SectionTopic::RiskAssessment, Duration::from_secs(90));
        let start = Instant::now();

        let report = orchestrator(service, Duration::from_secs(30))
            .generate(&requests, &ctx(&tier, &scoring))
            .await;

        assert_elapsed(start, Duration::from_secs(30));
        assert_eq!(report.fulfilled, 2);
        assert!(report.sections[2].is_fallback());
        assert!(report.sections[2].text.starts_with("RISK ASSESSMENT"));
    }

    #[tokio::test(start_paused = true)]
    async fn auxiliary_deadline_is_capped_by_global_deadline() {
        let scoring = scoring();
        let tier = TierConfig::for_tier(ReportTier::Basic);
        let options = PlanOptions {
            include_org_structure: true,
            auxiliary_deadline: Duration::from_secs(60),
        };
        let requests = TierContentPlanner::plan(&tier, &options);
        let start = Instant::now();

        let report = orchestrator(MockGenerationService::hanging(), Duration::from_secs(20))
            .generate(&requests, &ctx(&tier, &scoring))
            .await;

        assert_elapsed(start, Duration::from_secs(20));
        let visualization = report.sections.last().unwrap();
        assert_eq!(visualization.topic, SectionTopic::StructureVisualization);
        assert_eq!(visualization.failure.as_deref(), Some("deadline of 20s elapsed"));
    }

    #[test]
    fn batch_report_serializes_processing_time_in_millis() {
        let report = BatchReport {
            sections: vec![],
            processing_time: Duration::from_millis(1250),
            fulfilled: 0,
            fallback: 0,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["processingTimeMs"], 1250);
        assert_eq!(json["fulfilled"], 0);
    }
}
