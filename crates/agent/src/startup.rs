use std::path::Path;
use std::sync::Arc;

use adapters::inference::OllamaClient;
use adapters::report::{ConsoleReporter, LogReporter};
use adapters::stream::{KafkaAlertSource, KafkaRetentionAdmin};
use application::retention_setup;
use application::triage_pipeline::TriagePipeline;
use domain::triage::prompt::{PROMPT_VERSION, PromptBuilder};
use infrastructure::config::{AgentConfig, ReportDestination};
use infrastructure::logging::init_logging;
use ports::secondary::alert_source::AlertSource;
use ports::secondary::inference_client::InferenceClient;
use ports::secondary::outcome_reporter::OutcomeReporter;
use ports::secondary::retention_admin::RetentionAdmin;
use tracing::info;

use crate::cli::Cli;
use crate::shutdown;

/// Load config and initialize logging, honoring CLI overrides.
fn init(cli: &Cli) -> anyhow::Result<AgentConfig> {
    let config = AgentConfig::load(Path::new(&cli.config))?;

    let log_level = cli.log_level.unwrap_or(config.agent.log_level);
    let log_format = cli.log_format.unwrap_or(config.agent.log_format);
    init_logging(log_level, log_format)?;

    Ok(config)
}

/// Run the consumer daemon and block until shutdown.
pub async fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = init(cli)?;

    info!(
        config_path = %cli.config,
        brokers = %config.stream.brokers.join(","),
        topic = %config.stream.topic,
        endpoint = %config.inference.endpoint,
        model = %config.inference.model,
        prompt_version = PROMPT_VERSION,
        "alerttriage agent starting"
    );

    let source: Arc<dyn AlertSource> = Arc::new(KafkaAlertSource::new(
        &config.stream.brokers,
        &config.stream.topic,
        &config.stream.group_id,
        config.stream.start_position()?,
    )?);

    let inference: Arc<dyn InferenceClient> =
        Arc::new(OllamaClient::new(&config.inference.endpoint)?);

    let reporter: Arc<dyn OutcomeReporter> = match config.report.destination {
        ReportDestination::Console => Arc::new(ConsoleReporter::new()),
        ReportDestination::Log => Arc::new(LogReporter),
    };

    let pipeline = TriagePipeline::new(
        PromptBuilder::new(&config.inference.model),
        inference,
        reporter,
        config.inference_timeout(),
    );

    let cancel_token = shutdown::create_shutdown_token();

    info!(topic = %config.stream.topic, "listening for alerts");
    pipeline.run(source, cancel_token).await;

    info!("alerttriage agent stopped");
    Ok(())
}

/// Run the one-shot retention configuration against the broker.
pub async fn run_retention(cli: &Cli, topic_override: Option<&str>) -> anyhow::Result<()> {
    let config = init(cli)?;

    let topic = topic_override.unwrap_or(&config.stream.topic);
    let policy = config.retention_policy();

    let admin: Arc<dyn RetentionAdmin> =
        Arc::new(KafkaRetentionAdmin::new(&config.stream.brokers)?);

    retention_setup::apply_retention(admin, topic, policy).await?;

    println!(
        "retention policy updated for topic '{topic}': {} ms, {} bytes",
        policy.retention_ms(),
        policy.retention_bytes()
    );
    Ok(())
}
