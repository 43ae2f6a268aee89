//! Sentiment Analyzer CLI
//!
//! Runs the web front-end or classifies a single text from the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::{Cli, Commands};

/// Initialize tracing with optional file logging.
fn init_tracing(log_file: Option<&std::path::Path>, verbose: bool) -> Result<()> {
    let default_filter = if verbose {
        "sentiment=debug,sentiment_web=debug,sentiment_core=debug,tower_http=debug"
    } else {
        "sentiment=info,sentiment_web=debug,sentiment_core=debug"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;

        // Log to both stdout and file when --log is used
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = match &cli.command {
        Commands::Serve(args) if args.log => Some(args.log_path()),
        _ => None,
    };
    init_tracing(log_file.as_deref(), cli.verbose)?;

    cli.execute().await
}
