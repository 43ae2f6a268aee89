//! One-shot analysis command.

use anyhow::Result;
use clap::Args;
use tracing::debug;

use sentiment_core::{Analyzer, KeywordAnalyzer, SentimentClient};
use sentiment_web::routes::analyzer::handle_sentiment_request;

use super::ClientArgs;
use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Text to analyze
    pub text: String,

    /// Skip the remote service and use the keyword heuristic only
    #[arg(long)]
    pub offline: bool,

    #[command(flatten)]
    pub client: ClientArgs,
}

pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    debug!(offline = args.offline, chars = args.text.len(), "Analyzing text");

    let message = if args.offline {
        run(&KeywordAnalyzer, &args.text).await
    } else {
        let client = SentimentClient::new(args.client.config())?;
        run(&client, &args.text).await
    };

    output::print_message(&message);
    Ok(())
}

async fn run(analyzer: &dyn Analyzer, text: &str) -> String {
    handle_sentiment_request(analyzer, Some(text)).await
}
