//! HTTP client for the remote sentiment service.
//!
//! [`SentimentClient::predict`] reports exactly what happened on the wire as a
//! [`RemoteOutcome`]. [`SentimentClient::analyze`] turns that into an
//! [`AnalysisResult`], falling back to the keyword heuristic when the service
//! cannot be reached.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::io::ErrorKind;
use tracing::{debug, error, warn};

use crate::analyzer::Analyzer;
use crate::config::{ClientConfig, MODEL_ID_HEADER};
use crate::error::{SentimentError, SentimentResult};
use crate::fallback;
use crate::model::{AnalysisResult, RawDocument, RemoteSentimentResponse, SentimentRequest};

/// Result of one call to the remote service.
#[derive(Debug)]
pub enum RemoteOutcome {
    /// HTTP 200 with a well-formed payload.
    Success(AnalysisResult),
    /// Connection refused, reset or dropped, or the request or body timed out.
    RemoteUnavailable,
    /// The service answered with a status other than 200.
    RemoteRejected(StatusCode),
    /// Anything else, including a malformed 200 payload.
    Failed(SentimentError),
}

/// Client for the remote sentiment service.
#[derive(Clone)]
pub struct SentimentClient {
    config: ClientConfig,
    client: reqwest::Client,
}

impl SentimentClient {
    /// Build a client from a validated configuration.
    pub fn new(config: ClientConfig) -> SentimentResult<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        debug!(endpoint = %config.endpoint, model = %config.model_id, "SentimentClient initialized");
        Ok(Self { config, client })
    }

    /// Client with the default endpoint, model and timeout.
    pub fn default_client() -> SentimentResult<Self> {
        Self::new(ClientConfig::default())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send `text` to the remote service and classify the reply.
    pub async fn predict(&self, text: &str) -> RemoteOutcome {
        let request = SentimentRequest {
            raw_document: RawDocument { text },
        };

        debug!(endpoint = %self.config.endpoint, chars = text.len(), "Requesting sentiment");

        let response = match self
            .client
            .post(&self.config.endpoint)
            .header(MODEL_ID_HEADER, &self.config.model_id)
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return transport_outcome(e),
        };

        let status = response.status();
        if status != StatusCode::OK {
            return RemoteOutcome::RemoteRejected(status);
        }

        read_result(response).await
    }

    /// Analyze `text`, applying the configured fallback policy.
    pub async fn analyze(&self, text: &str) -> AnalysisResult {
        match self.predict(text).await {
            RemoteOutcome::Success(result) => {
                debug!(?result, "Sentiment service classified text");
                result
            }
            RemoteOutcome::RemoteUnavailable if self.config.fallback => {
                warn!("Using keyword fallback");
                fallback::classify(text)
            }
            RemoteOutcome::RemoteUnavailable => AnalysisResult::none(),
            RemoteOutcome::RemoteRejected(status) => {
                warn!(status_code = %status, "Sentiment service rejected request");
                AnalysisResult::none()
            }
            RemoteOutcome::Failed(e) => {
                error!(error = %e, "Sentiment request failed");
                AnalysisResult::none()
            }
        }
    }
}

async fn read_result(response: reqwest::Response) -> RemoteOutcome {
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => return transport_outcome(e),
    };
    match parse_body(&body) {
        Ok(result) => RemoteOutcome::Success(result),
        Err(e) => RemoteOutcome::Failed(e),
    }
}

fn parse_body(body: &str) -> SentimentResult<AnalysisResult> {
    let parsed: RemoteSentimentResponse = serde_json::from_str(body)
        .map_err(|e| SentimentError::malformed(format!("{}: {}", e, body)))?;
    parsed.into_result()
}

/// Map a reqwest failure, during send or while reading the body, to an outcome.
fn transport_outcome(e: reqwest::Error) -> RemoteOutcome {
    if is_unavailable(&e) {
        warn!(error = %e, "Sentiment service unreachable");
        RemoteOutcome::RemoteUnavailable
    } else {
        RemoteOutcome::Failed(e.into())
    }
}

/// Timeouts, refused or dropped connections and truncated bodies.
fn is_unavailable(e: &reqwest::Error) -> bool {
    if e.is_timeout() || e.is_connect() || e.is_request() || e.is_body() {
        return true;
    }

    let mut source = std::error::Error::source(e);
    while let Some(err) = source {
        if let Some(inner) = err.downcast_ref::<reqwest::Error>() {
            if inner.is_timeout() || inner.is_connect() || inner.is_request() || inner.is_body() {
                return true;
            }
        }
        if let Some(io) = err.downcast_ref::<std::io::Error>() {
            if matches!(
                io.kind(),
                ErrorKind::TimedOut
                    | ErrorKind::ConnectionReset
                    | ErrorKind::ConnectionAborted
                    | ErrorKind::UnexpectedEof
            ) {
                return true;
            }
        }
        // hyper's IncompleteMessage, reported without a typed source
        if err.to_string().contains("connection closed before message completed") {
            return true;
        }
        source = err.source();
    }
    false
}

#[async_trait]
impl Analyzer for SentimentClient {
    async fn analyze(&self, text: &str) -> AnalysisResult {
        SentimentClient::analyze(self, text).await
    }
}
