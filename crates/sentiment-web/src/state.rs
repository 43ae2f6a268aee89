//! Application state.

use sentiment_core::Analyzer;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn Analyzer>,
}

impl AppState {
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self { analyzer }
    }
}
