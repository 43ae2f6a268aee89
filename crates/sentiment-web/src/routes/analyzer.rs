//! Sentiment analysis route handler.
//!
//! Every outcome is reported as a plain-text sentence with status 200.

use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::{debug, info};

use crate::state::AppState;
use sentiment_core::{AnalysisResult, Analyzer};

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text to analyze.";
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input! Try again.";

#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    #[serde(rename = "textToAnalyze")]
    pub text_to_analyze: Option<String>,
}

/// GET /sentimentAnalyzer?textToAnalyze=...
pub async fn sentiment_analyzer(
    State(state): State<AppState>,
    Query(query): Query<AnalyzeQuery>,
) -> String {
    handle_sentiment_request(state.analyzer.as_ref(), query.text_to_analyze.as_deref()).await
}

/// Validate `text`, analyze it and render the reply shown to the user.
pub async fn handle_sentiment_request(analyzer: &dyn Analyzer, text: Option<&str>) -> String {
    let text = match text {
        Some(t) if !t.trim().is_empty() => t,
        _ => {
            debug!("Empty text submitted");
            return EMPTY_INPUT_MESSAGE.to_string();
        }
    };

    let result = analyzer.analyze(text).await;
    info!(?result, "Analyzed text");
    render_result(&result)
}

/// Sentence describing `result`.
pub fn render_result(result: &AnalysisResult) -> String {
    match result.classification() {
        Some((label, score)) => format!(
            "The given text has been identified as {} with a score of {}.",
            label.as_word(),
            score
        ),
        None => INVALID_INPUT_MESSAGE.to_string(),
    }
}
