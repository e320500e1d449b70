use anyhow::Context;
use gh_client::{OctocrabClient, TokenResolver};
use pr_reminder_config::ReminderConfig;
use slack_notifier::{DryRunSink, MessageSink, SlackWebhookClient};
use std::process::ExitCode;
use std::time::Duration;

mod classifier;
mod clock;
mod composer;
mod domain_models;
mod error;
mod fetch;
mod logger;
mod orchestrator;
mod pipeline;
mod reminder;
#[cfg(test)]
mod testing;

use clock::SystemClock;
use domain_models::RepositoryConfig;
use orchestrator::{run_all, RunReport};
use pipeline::Pipeline;

#[tokio::main]
async fn main() -> ExitCode {
    logger::init();

    log::info!("Starting pr-reminder");

    let outcome = run().await;
    match &outcome {
        Ok(report) => report.log_summary(),
        Err(err) => log::error!("{:#}", err),
    }

    ExitCode::from(exit_status(&outcome))
}

/// Process status for a finished run
///
/// A run whose pipelines all settled exits 0, even when some repositories
/// failed; those failures are in the report. Only bootstrap errors exit 1.
fn exit_status(outcome: &anyhow::Result<RunReport>) -> u8 {
    match outcome {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

async fn run() -> anyhow::Result<RunReport> {
    // Existing environment variables take precedence over .env
    match dotenvy::dotenv() {
        Ok(path) => log::debug!("Loaded .env file from: {:?}", path),
        Err(_) => log::debug!(".env file not found, relying on environment variables"),
    }

    let config = ReminderConfig::load()?;
    let repositories = RepositoryConfig::from_config(&config);

    let github = OctocrabClient::connect(config.github_host.as_deref(), &TokenResolver::new())
        .await
        .context("Failed to initialize GitHub client")?;

    let sink: Box<dyn MessageSink> = if config.dry_run {
        log::info!("Dry run: reports are logged, not posted");
        Box::new(DryRunSink)
    } else {
        let webhook_url = config
            .slack
            .webhook_url
            .clone()
            .context("No Slack webhook configured")?;
        Box::new(SlackWebhookClient::with_timeout(
            webhook_url,
            Duration::from_secs(config.slack.timeout_secs),
        )?)
    };

    let pipeline = Pipeline {
        github: &github,
        sink: sink.as_ref(),
        clock: &SystemClock,
        label_concurrency: config.label_fetch_concurrency,
    };

    Ok(run_all(&pipeline, &repositories, config.max_concurrent_repositories).await)
}
