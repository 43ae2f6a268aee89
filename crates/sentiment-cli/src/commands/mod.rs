//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::time::Duration;

use sentiment_core::config::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL_ID};

pub mod analyze;
pub mod serve;

/// Sentiment Analyzer - web front-end for a remote sentiment service
#[derive(Parser)]
#[command(name = "sentiment")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),

    /// Analyze a single text and print the result
    Analyze(analyze::AnalyzeArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Analyze(args) => analyze::execute(args).await,
        }
    }
}

/// Options for the remote sentiment service.
#[derive(Args, Debug, Clone)]
pub struct ClientArgs {
    /// Sentiment service endpoint
    #[arg(long, env = "SENTIMENT_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Model id sent with every request
    #[arg(long, env = "SENTIMENT_MODEL_ID", default_value = DEFAULT_MODEL_ID)]
    pub model_id: String,

    /// Request timeout in seconds
    #[arg(long, env = "SENTIMENT_TIMEOUT_SECS", default_value = "5")]
    pub timeout_secs: u64,

    /// Report no result instead of using the keyword fallback when the service is unreachable
    #[arg(long)]
    pub no_fallback: bool,
}

impl ClientArgs {
    pub fn config(&self) -> ClientConfig {
        ClientConfig {
            endpoint: self.endpoint.clone(),
            model_id: self.model_id.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            fallback: !self.no_fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["sentiment", "serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.host, "0.0.0.0");
                assert_eq!(args.port, 5000);
                assert!(!args.log);
                assert_eq!(args.client.config(), ClientConfig::default());
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_analyze_options() {
        let cli = Cli::try_parse_from([
            "sentiment",
            "analyze",
            "I love this",
            "--offline",
            "--timeout-secs",
            "2",
            "--no-fallback",
            "--endpoint",
            "http://127.0.0.1:9000/predict",
        ])
        .unwrap();
        match cli.command {
            Commands::Analyze(args) => {
                assert_eq!(args.text, "I love this");
                assert!(args.offline);
                let config = args.client.config();
                assert_eq!(config.timeout, Duration::from_secs(2));
                assert!(!config.fallback);
                assert_eq!(config.endpoint, "http://127.0.0.1:9000/predict");
                assert_eq!(config.model_id, DEFAULT_MODEL_ID);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_analyze_requires_text() {
        assert!(Cli::try_parse_from(["sentiment", "analyze"]).is_err());
    }
}
