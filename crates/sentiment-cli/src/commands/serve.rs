//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

use sentiment_core::SentimentClient;
use sentiment_web::{AppState, DEFAULT_HOST, DEFAULT_PORT};

use super::ClientArgs;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to ./logs/serve.log)
    #[arg(long, requires = "log")]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub client: ClientArgs,
}

impl ServeArgs {
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from("logs/serve.log"))
    }
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = args.client.config();
    let client = SentimentClient::new(config.clone())?;
    let state = AppState::new(Arc::new(client));

    println!();
    println!("  {} {}", "Sentiment Analyzer".cyan().bold(), "Web Server".bold());
    println!();
    println!("  {}  http://{}:{}", "Page".green(), args.host, args.port);
    println!(
        "  {}   http://{}:{}/sentimentAnalyzer?textToAnalyze=...",
        "API".green(),
        args.host,
        args.port
    );
    println!("  {}  {}", "Model".green(), config.model_id.dimmed());
    if !config.fallback {
        println!("  {}", "Keyword fallback disabled".yellow());
    }
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    sentiment_web::run_server(state, &args.host, args.port).await?;

    Ok(())
}
