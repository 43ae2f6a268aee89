//! # Sentiment Core
//!
//! Client for the remote sentiment service, with a keyword heuristic used
//! when the service is unreachable.

pub mod analyzer;
pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod model;

pub use analyzer::{Analyzer, KeywordAnalyzer};
pub use client::{RemoteOutcome, SentimentClient};
pub use config::ClientConfig;
pub use error::{SentimentError, SentimentResult};
pub use model::{AnalysisResult, SentimentLabel};
