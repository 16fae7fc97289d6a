use std::time::Duration;

use clap::Parser;
use eyre::Result;
use marquee_core::ForbiddenWords;
use marquee_feeds::AdafruitIo;
use marquee_relay::config::RelayConfig;
use marquee_relay::logging::{self, LogFormat};
use marquee_sync::{HttpExport, RunOptions, RunReport, SyncError, format_err_chain, run_once};

/// Relay public form submissions into a pair of Adafruit IO feeds.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Re-run the relay every SECS seconds instead of exiting after one pass.
    #[arg(long, value_name = "SECS", env = "MARQUEE_INTERVAL_SECS")]
    interval: Option<u64>,

    /// Fetch and validate, log what would be published, change nothing.
    #[arg(long)]
    dry_run: bool,

    #[arg(long, value_enum, default_value_t, env = "MARQUEE_LOG_FORMAT")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    // A missing .env is fine; the real environment may carry everything.
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::init(cli.log_format);
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let config = RelayConfig::from_env()?;
    let info = config.info();
    tracing::info!(
        csv_url = %info.csv_url,
        text_feed = %info.text_feed,
        color_feed = %info.color_feed,
        max_quotes = info.max_quotes,
        state_dir = %info.state_dir,
        account = %info.account,
        key = %info.key_hint,
        "relay configured"
    );

    let source = HttpExport::new(config.sync.csv_url.clone());
    let service = AdafruitIo::new(config.credentials.clone());
    let options = RunOptions {
        dry_run: cli.dry_run,
    };

    let Some(secs) = cli.interval.filter(|s| *s > 0) else {
        pass(&config, &source, &service, options).await?;
        return Ok(());
    };

    loop {
        if let Err(e) = pass(&config, &source, &service, options).await {
            tracing::error!(error = %format_err_chain(&e), "relay pass failed");
        }
        tracing::info!(seconds = secs, minutes = secs / 60, "sleeping until next pass");
        tokio::time::sleep(Duration::from_secs(secs)).await;
    }
}

/// One pass. The word list is re-read every pass so edits apply without a restart.
async fn pass(
    config: &RelayConfig,
    source: &HttpExport,
    service: &AdafruitIo,
    options: RunOptions,
) -> Result<RunReport, SyncError> {
    let forbidden = ForbiddenWords::load(&config.sync.wordlist)?;
    tracing::debug!(words = forbidden.len(), "word list loaded");

    let report = run_once(&config.sync, source, service, &forbidden, options).await?;
    tracing::info!(
        new_data = report.new_data,
        dry_run = report.dry_run,
        published = report.published,
        already_published = report.already_published,
        rejected_color = report.rejected_color,
        rejected_profanity = report.rejected_profanity,
        malformed = report.malformed,
        pruned_text = report.pruned_text,
        pruned_color = report.pruned_color,
        committed = report.committed,
        "done"
    );
    Ok(report)
}
