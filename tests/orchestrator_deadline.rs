//! Integration tests for concurrent section generation under deadlines.
//!
//! All tests run on a paused Tokio clock, so simulated latencies and
//! deadlines resolve instantly and deterministically.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use readiness_assessor::adapters::ai::MockGenerationService;
use readiness_assessor::application::{ContentOrchestrator, OrchestratorConfig};
use readiness_assessor::domain::assessment::{ScoringEngine, ScoringResult};
use readiness_assessor::domain::report::{
    PlanOptions, PromptContext, ReportTier, SectionStatus, SectionTopic, TierConfig, TierContentPlanner,
};
use readiness_assessor::domain::scoring::Response;
use readiness_assessor::ports::GenerationError;

// =============================================================================
// Test Infrastructure
// =============================================================================

const DEADLINE: Duration = Duration::from_secs(45);

fn scoring() -> ScoringResult {
    let responses: Vec<Response> = [("strategy_1", 3), ("governance_1", 1), ("pedagogy_1", 4), ("culture_1", 2)]
        .iter()
        .map(|(id, score)| Response::for_question(id, *score).unwrap())
        .collect();
    ScoringEngine::default().assess(&responses, &[]).unwrap()
}

fn orchestrator(service: MockGenerationService) -> ContentOrchestrator {
    ContentOrchestrator::new(
        Arc::new(service),
        OrchestratorConfig::default().with_global_deadline(DEADLINE),
    )
}

fn ctx<'a>(tier: &'a TierConfig, scoring: &'a ScoringResult) -> PromptContext<'a> {
    PromptContext {
        institution_name: "Hillview College",
        tier,
        scoring,
    }
}

// =============================================================================
// Deadline behavior
// =============================================================================

#[tokio::test(start_paused = true)]
async fn always_timing_out_service_yields_complete_fallback_report_within_deadline() {
    let scoring = scoring();
    for tier in ReportTier::ALL {
        let config = TierConfig::for_tier(tier);
        let requests = TierContentPlanner::plan(&config, &PlanOptions::default());
        let start = Instant::now();

        let report = orchestrator(MockGenerationService::hanging())
            .generate(&requests, &ctx(&config, &scoring))
            .await;

        assert!(start.elapsed() <= DEADLINE + Duration::from_millis(10), "{}", tier);
        assert_eq!(report.sections.len(), requests.len());
        assert_eq!(report.fallback, requests.len());
        for (request, section) in requests.iter().zip(&report.sections) {
            assert_eq!(request.topic, section.topic);
            assert_eq!(section.status, SectionStatus::Fallback);
            assert!(!section.text.is_empty());
        }
    }
}

#[tokio::test(start_paused = true)]
async fn output_order_follows_requests_not_completion() {
    let scoring = scoring();
    let config = TierConfig::for_tier(ReportTier::Basic);
    let requests = TierContentPlanner::plan(&config, &PlanOptions::default());
    // Later requests finish first.
    let service = MockGenerationService::new()
        .with_topic_response(SectionTopic::ExecutiveSummary, "summary")
        .with_topic_delay(SectionTopic::ExecutiveSummary, Duration::from_secs(30))
        .with_topic_response(SectionTopic::StrategicRecommendations, "recommendations")
        .with_topic_delay(SectionTopic::StrategicRecommendations, Duration::from_secs(20))
        .with_topic_response(SectionTopic::RiskAssessment, "risk")
        .with_topic_delay(SectionTopic::RiskAssessment, Duration::from_secs(10));

    let report = orchestrator(service).generate(&requests, &ctx(&config, &scoring)).await;

    let texts: Vec<&str> = report.sections.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["summary", "recommendations", "risk"]);
    assert_eq!(report.fulfilled, 3);
}

#[tokio::test(start_paused = true)]
async fn units_run_concurrently_not_sequentially() {
    let scoring = scoring();
    let config = TierConfig::for_tier(ReportTier::Enterprise);
    let requests = TierContentPlanner::plan(&config, &PlanOptions::default());
    let service = MockGenerationService::new().with_delay(Duration::from_secs(20));
    let start = Instant::now();

    let report = orchestrator(service).generate(&requests, &ctx(&config, &scoring)).await;

    // Six 20s calls in sequence would blow the 45s deadline.
    assert!(start.elapsed() < Duration::from_secs(21));
    assert_eq!(report.fulfilled, 6);
}

#[tokio::test(start_paused = true)]
async fn fast_failures_resolve_without_waiting_for_deadline() {
    let scoring = scoring();
    let config = TierConfig::for_tier(ReportTier::Standard);
    let requests = TierContentPlanner::plan(&config, &PlanOptions::default());
    let start = Instant::now();

    let report = orchestrator(MockGenerationService::failing(GenerationError::Auth))
        .generate(&requests, &ctx(&config, &scoring))
        .await;

    assert!(start.elapsed() < Duration::from_secs(1));
    assert_eq!(report.fallback, 4);
    assert!(report
        .sections
        .iter()
        .all(|s| s.failure.as_deref() == Some("generation failed: authentication failed")));
}

#[tokio::test(start_paused = true)]
async fn auxiliary_unit_uses_its_own_shorter_deadline() {
    let scoring = scoring();
    let config = TierConfig::for_tier(ReportTier::Standard);
    let options = PlanOptions {
        include_org_structure: true,
        auxiliary_deadline: Duration::from_secs(15),
    };
    let requests = TierContentPlanner::plan(&config, &options);
    let service = MockGenerationService::new().with_delay(Duration::from_secs(20));

    let report = orchestrator(service).generate(&requests, &ctx(&config, &scoring)).await;

    let (visualization, narrative) = report.sections.split_last().unwrap();
    assert_eq!(visualization.topic, SectionTopic::StructureVisualization);
    assert_eq!(visualization.status, SectionStatus::Fallback);
    assert_eq!(visualization.failure.as_deref(), Some("deadline of 15s elapsed"));
    assert!(visualization.text.starts_with("Hillview College > "));
    assert!(narrative.iter().all(|s| s.status == SectionStatus::Fulfilled));
    assert!(narrative
        .iter()
        .any(|s| s.topic == SectionTopic::OrganizationalStructure));
}

#[tokio::test(start_paused = true)]
async fn mixed_outcomes_fall_back_independently() {
    let scoring = scoring();
    let config = TierConfig::for_tier(ReportTier::Comprehensive);
    let requests = TierContentPlanner::plan(&config, &PlanOptions::default());
    let service = MockGenerationService::new()
        .with_topic_hang(SectionTopic::Benchmarking)
        .with_topic_error(SectionTopic::FinancialProjections, GenerationError::RateLimited)
        .with_topic_response(SectionTopic::ChangeManagement, "Change plan");

    let report = orchestrator(service).generate(&requests, &ctx(&config, &scoring)).await;

    let status = |topic: SectionTopic| {
        report
            .sections
            .iter()
            .find(|s| s.topic == topic)
            .map(|s| s.status)
            .unwrap()
    };
    assert_eq!(status(SectionTopic::Benchmarking), SectionStatus::Fallback);
    assert_eq!(status(SectionTopic::FinancialProjections), SectionStatus::Fallback);
    assert_eq!(status(SectionTopic::ChangeManagement), SectionStatus::Fulfilled);
    assert_eq!(status(SectionTopic::ExecutiveSummary), SectionStatus::Fulfilled);
    assert_eq!(report.fulfilled, 4);
    assert_eq!(report.fallback, 2);
}

// =============================================================================
// Tier scaling
// =============================================================================

#[tokio::test]
async fn enterprise_requests_more_sections_and_tokens_than_basic() {
    let scoring = scoring();
    let basic = TierConfig::for_tier(ReportTier::Basic);
    let enterprise = TierConfig::for_tier(ReportTier::Enterprise);

    let basic_service = MockGenerationService::new();
    let enterprise_service = MockGenerationService::new();
    orchestrator(basic_service.clone())
        .generate(&TierContentPlanner::plan(&basic, &PlanOptions::default()), &ctx(&basic, &scoring))
        .await;
    orchestrator(enterprise_service.clone())
        .generate(
            &TierContentPlanner::plan(&enterprise, &PlanOptions::default()),
            &ctx(&enterprise, &scoring),
        )
        .await;

    assert!(enterprise_service.call_count() > basic_service.call_count());
    let tokens = |service: &MockGenerationService| service.calls().iter().map(|c| c.max_tokens).sum::<u32>();
    assert!(tokens(&enterprise_service) > tokens(&basic_service));
}
