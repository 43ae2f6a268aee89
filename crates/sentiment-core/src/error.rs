//! Error types for the sentiment client.

use thiserror::Error;

/// Main error type for sentiment operations.
#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Unknown sentiment label: {0}")]
    UnknownLabel(String),
}

/// Result type for sentiment operations.
pub type SentimentResult<T> = Result<T, SentimentError>;

impl SentimentError {
    /// Create an invalid configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a malformed response error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }
}
