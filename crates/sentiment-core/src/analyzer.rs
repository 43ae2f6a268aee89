//! Analyzer abstraction shared by the web layer and the CLI.

use async_trait::async_trait;

use crate::fallback;
use crate::model::AnalysisResult;

/// Anything that can turn a text into an [`AnalysisResult`].
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> AnalysisResult;
}

/// Offline analyzer backed only by the keyword heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordAnalyzer;

#[async_trait]
impl Analyzer for KeywordAnalyzer {
    async fn analyze(&self, text: &str) -> AnalysisResult {
        fallback::classify(text)
    }
}
