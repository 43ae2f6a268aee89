//! Sentiment domain models.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{SentimentError, SentimentResult};

/// Sentiment classification tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Parse the remote service's label (`SENT_POSITIVE`, ...).
    ///
    /// Everything up to and including the first underscore is dropped before
    /// matching, so a bare `POSITIVE` is accepted too.
    pub fn from_remote(raw: &str) -> SentimentResult<Self> {
        let word = raw.split_once('_').map_or(raw, |(_, rest)| rest);
        match word.to_uppercase().as_str() {
            "POSITIVE" => Ok(Self::Positive),
            "NEGATIVE" => Ok(Self::Negative),
            "NEUTRAL" => Ok(Self::Neutral),
            _ => Err(SentimentError::UnknownLabel(raw.to_string())),
        }
    }

    /// Label as the remote service spells it.
    pub fn as_remote(&self) -> &'static str {
        match self {
            Self::Positive => "SENT_POSITIVE",
            Self::Negative => "SENT_NEGATIVE",
            Self::Neutral => "SENT_NEUTRAL",
        }
    }

    /// Human-readable sentiment word shown to users.
    pub fn as_word(&self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_word())
    }
}

/// Outcome of analyzing one text.
///
/// Label and score are either both present or both absent. Absent means the
/// input was rejected or the analysis could not be completed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AnalysisResult {
    label: Option<SentimentLabel>,
    score: Option<f64>,
}

impl AnalysisResult {
    /// A successful classification.
    pub fn classified(label: SentimentLabel, score: f64) -> Self {
        Self {
            label: Some(label),
            score: Some(score),
        }
    }

    /// No result.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn label(&self) -> Option<SentimentLabel> {
        self.label
    }

    pub fn score(&self) -> Option<f64> {
        self.score
    }

    /// Label and score together, if classified.
    pub fn classification(&self) -> Option<(SentimentLabel, f64)> {
        self.label.zip(self.score)
    }

    pub fn is_none(&self) -> bool {
        self.label.is_none()
    }
}

/// Raw payload returned by the remote sentiment service.
#[derive(Debug, Deserialize)]
pub(crate) struct RemoteSentimentResponse {
    #[serde(rename = "documentSentiment")]
    pub document_sentiment: DocumentSentiment,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DocumentSentiment {
    pub label: String,
    pub score: f64,
}

impl RemoteSentimentResponse {
    pub(crate) fn into_result(self) -> SentimentResult<AnalysisResult> {
        let label = SentimentLabel::from_remote(&self.document_sentiment.label)?;
        Ok(AnalysisResult::classified(label, self.document_sentiment.score))
    }
}

/// Request body sent to the remote sentiment service.
#[derive(Debug, Serialize)]
pub(crate) struct SentimentRequest<'a> {
    pub raw_document: RawDocument<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RawDocument<'a> {
    pub text: &'a str,
}
