use anyhow::Context;
use clap::Parser;
use market_feeds::snapshot::{self, DEFAULT_OUTPUT_PATH};
use market_feeds::{FeedsConfig, RssFeedSource, SnapshotPipeline};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Build a JSON snapshot from the configured market-news RSS feeds.
#[derive(Debug, Parser)]
#[command(name = "market-feeds", version)]
struct Args {
    /// YAML file listing the feed sources
    #[arg(long, default_value = "feeds.yml")]
    config: PathBuf,

    /// Where to write the snapshot
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Override the delay between sources, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let config = FeedsConfig::from_file(&args.config)
        .with_context(|| format!("loading feed config from {}", args.config.display()))?;
    let mut pipeline_config = config
        .pipeline_config()
        .context("building pipeline config")?;
    if let Some(delay_ms) = args.delay_ms {
        pipeline_config = pipeline_config.with_request_delay(Duration::from_millis(delay_ms));
    }

    let feed_source = RssFeedSource::new(&pipeline_config.fetch).context("creating HTTP client")?;
    let pipeline = SnapshotPipeline::new(feed_source, pipeline_config);
    let report = pipeline.run(&config.sources).await;

    snapshot::write_snapshot(&args.output, &report.snapshot)
        .with_context(|| format!("writing snapshot to {}", args.output.display()))?;

    info!(
        "Done: {} items from {} sources ({} failed or empty)",
        report.snapshot.count,
        config.sources.len(),
        report.failed_sources()
    );
    Ok(())
}
