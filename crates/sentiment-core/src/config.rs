//! Client configuration.

use std::time::Duration;

use crate::error::{SentimentError, SentimentResult};

/// Default sentiment service endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://sn-watson-sentiment-bert.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/SentimentPredict";

/// Default model served behind the endpoint.
pub const DEFAULT_MODEL_ID: &str = "sentiment_aggregated-bert-workflow_lang_multi_stock";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Header carrying the model id.
pub const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";

/// Immutable settings for [`crate::SentimentClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub model_id: String,
    pub timeout: Duration,
    /// Use the keyword heuristic when the service cannot be reached.
    pub fallback: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            fallback: true,
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at another endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn fallback(mut self, enabled: bool) -> Self {
        self.fallback = enabled;
        self
    }

    /// Check the settings before a client is built from them.
    pub fn validate(&self) -> SentimentResult<()> {
        if self.endpoint.trim().is_empty() {
            return Err(SentimentError::invalid_config("endpoint must not be empty"));
        }
        reqwest::Url::parse(&self.endpoint).map_err(|e| {
            SentimentError::invalid_config(format!("endpoint '{}': {}", self.endpoint, e))
        })?;
        if self.model_id.trim().is_empty() {
            return Err(SentimentError::invalid_config("model id must not be empty"));
        }
        if self.timeout.is_zero() {
            return Err(SentimentError::invalid_config("timeout must be greater than zero"));
        }
        Ok(())
    }
}
