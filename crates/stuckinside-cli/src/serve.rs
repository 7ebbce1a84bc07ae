//! The `serve` subcommand: run the tracker site.

use std::net::SocketAddr;

use clap::Args;

use stuckinside_api::{AppConfig, AppState};
use stuckinside_feed::{FeedClient, FeedConfig, DEFAULT_FEED_URL};

/// Arguments for `stuckinside serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Socket address to bind.
    #[arg(long, env = "STUCKINSIDE_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Policy feed endpoint.
    #[arg(long, env = "STUCKINSIDE_FEED_URL", default_value = DEFAULT_FEED_URL)]
    pub feed_url: String,

    /// Per-request feed timeout in seconds.
    #[arg(long, env = "STUCKINSIDE_FEED_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Domain used for per-country card links.
    #[arg(long, default_value = "stuckinsi.de")]
    pub site_domain: String,
}

/// Run the server until the process is stopped.
pub async fn run_serve(args: &ServeArgs) -> anyhow::Result<()> {
    let mut config = FeedConfig::new(&args.feed_url);
    config.timeout_secs = args.timeout_secs;
    let feed = FeedClient::new(config)?;

    let state = AppState::new(
        feed,
        AppConfig {
            site_domain: args.site_domain.clone(),
        },
    );

    tracing::info!(bind = %args.bind, feed_url = %args.feed_url, "starting tracker site");
    stuckinside_api::serve(args.bind, state).await
}
