//! readiness-assessor - Command-line entry point
//!
//! Scores an assessment file, generates the tier's narrative sections and
//! prints the full report as JSON on stdout. Logs go to stderr.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use readiness_assessor::adapters::ai::{OfflineGenerationService, OpenAiConfig, OpenAiGenerationService};
use readiness_assessor::application::{
    AssessReadinessHandler, AssessmentInput, ContentOrchestrator, OrchestratorConfig,
};
use readiness_assessor::config::AppConfig;
use readiness_assessor::ports::GenerationService;

/// Command-line arguments for readiness-assessor
#[derive(Parser, Debug)]
#[command(name = "readiness-assessor")]
#[command(about = "Scores an AI readiness assessment and generates its report")]
#[command(version)]
struct Args {
    /// Assessment JSON file
    input: PathBuf,

    /// Report tier (basic, standard, comprehensive, enterprise)
    #[arg(short, long, env = "READINESS_TIER")]
    tier: Option<String>,

    /// Overrides the institution name from the input file
    #[arg(long)]
    institution: Option<String>,

    /// Adds the organizational structure section and diagram
    #[arg(long)]
    org_structure: bool,

    /// Skip the generation service; every section uses fallback content
    #[arg(long)]
    offline: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.json_logs);

    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let input = AssessmentInput::from_path(&args.input)
        .with_context(|| format!("Failed to load assessment from {}", args.input.display()))?;
    info!(
        institution = %input.institution_name,
        responses = input.responses.len(),
        team_members = input.team_members.len(),
        "Assessment loaded"
    );

    let service: Arc<dyn GenerationService> = match config.ai.openai_api_key.as_deref() {
        Some(key) if config.ai.has_openai() && !args.offline => {
            let openai = OpenAiConfig::new(key)
                .with_model(config.ai.model.clone())
                .with_base_url(config.ai.base_url.clone())
                .with_timeout(config.ai.request_timeout());
            Arc::new(OpenAiGenerationService::new(openai).context("Failed to create generation client")?)
        }
        _ => {
            if !args.offline {
                warn!("No OpenAI API key configured; all sections will use fallback content");
            }
            Arc::new(OfflineGenerationService::new())
        }
    };

    let orchestrator = ContentOrchestrator::new(
        service,
        OrchestratorConfig::default()
            .with_global_deadline(config.report.global_deadline())
            .with_system_prompt(config.ai.system_prompt.clone()),
    );

    let mut plan_options = config.report.plan_options();
    plan_options.include_org_structure |= args.org_structure;

    let handler = AssessReadinessHandler::new(config.scoring.engine()?, orchestrator, plan_options);

    let mut cmd = input.into_command(&config.report.default_tier);
    if let Some(tier) = args.tier {
        cmd.tier = tier;
    }
    if let Some(institution) = args.institution {
        cmd.institution_name = institution;
    }

    let report = handler.handle(cmd).await.context("Failed to produce report")?;
    info!(
        assessment_id = %report.assessment_id.as_uuid(),
        fulfilled = report.batch.fulfilled,
        fallback = report.batch.fallback,
        "Report ready"
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
