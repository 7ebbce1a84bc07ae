//! # stuckinside CLI entry point
//!
//! Parses command-line arguments, initializes tracing from the `-v`
//! verbosity count, and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use stuckinside_cli::serve::{run_serve, ServeArgs};
use stuckinside_cli::summary::{run_summary, SummaryArgs};

/// How long has your country been stuck inside?
///
/// Serves the lockdown tracker site, or dumps the per-country lockdown
/// summaries the site is built from.
#[derive(Parser, Debug)]
#[command(name = "stuckinside", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the tracker site.
    Serve(ServeArgs),

    /// Fetch the feed once and print country summaries as JSON.
    Summary(SummaryArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Tracing filter from verbosity level; RUST_LOG still wins when set.
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => run_serve(&args).await,
        Commands::Summary(args) => run_summary(&args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
