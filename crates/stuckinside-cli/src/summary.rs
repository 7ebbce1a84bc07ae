//! The `summary` subcommand: one-shot fetch and aggregate, JSON to stdout.

use std::io::Write;

use clap::Args;

use stuckinside_core::{aggregate, normalize, LatestMode};
use stuckinside_feed::{FeedClient, FeedConfig, DEFAULT_FEED_URL};

/// Arguments for `stuckinside summary`.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Policy feed endpoint.
    #[arg(long, env = "STUCKINSIDE_FEED_URL", default_value = DEFAULT_FEED_URL)]
    pub feed_url: String,

    /// Per-request feed timeout in seconds.
    #[arg(long, env = "STUCKINSIDE_FEED_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Reproduce the original site's feed-wide `latest` selection instead
    /// of the per-country default.
    #[arg(long)]
    pub compat_latest: bool,
}

/// Fetch the feed once and print the country summaries as pretty JSON.
pub async fn run_summary(args: &SummaryArgs) -> anyhow::Result<()> {
    let mut config = FeedConfig::new(&args.feed_url);
    config.timeout_secs = args.timeout_secs;
    let client = FeedClient::new(config)?;

    let raw = client.fetch_records().await?;
    tracing::debug!(rows = raw.len(), "fetched feed");

    let mode = if args.compat_latest {
        LatestMode::GlobalFirstOpen
    } else {
        LatestMode::PerCountry
    };
    let summaries = aggregate(&normalize(raw), mode);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &summaries)?;
    writeln!(out)?;
    Ok(())
}
