//! Keyword heuristic used when the sentiment service is unreachable.
//!
//! This is a degraded mode that keeps the front-end usable offline. It is not
//! a real classifier.

use tracing::info;

use crate::model::{AnalysisResult, SentimentLabel};

/// Function words that mark a text as plausible English.
const COMMON_WORDS: &[&str] = &[
    "i", "you", "the", "a", "to", "is", "it", "that", "this", "and", "or", "but", "in", "on",
    "at", "for", "with",
];

const POSITIVE_WORDS: &[&str] = &[
    "love", "great", "excellent", "amazing", "good", "wonderful", "fantastic", "best", "perfect",
    "happy", "enjoy",
];

const NEGATIVE_WORDS: &[&str] = &[
    "hate", "terrible", "awful", "bad", "worst", "horrible", "poor", "disappointing", "angry",
    "sad",
];

const BASE_SCORE: f64 = 0.85;
const SCORE_STEP: f64 = 0.05;
const MAX_BONUS: f64 = 0.14;
const NEUTRAL_SCORE: f64 = 0.75;

/// Classify `text` by keyword counts.
///
/// Returns no result when the text has neither a common English word nor any
/// sentiment keyword.
pub fn classify(text: &str) -> AnalysisResult {
    let lower = text.to_lowercase();

    let has_common_words = lower
        .split_whitespace()
        .any(|token| COMMON_WORDS.contains(&token));
    let positive = keyword_hits(&lower, POSITIVE_WORDS);
    let negative = keyword_hits(&lower, NEGATIVE_WORDS);

    if !has_common_words && positive == 0 && negative == 0 {
        info!("Fallback rejected text without recognizable words");
        return AnalysisResult::none();
    }

    let (label, score) = if positive > negative {
        (SentimentLabel::Positive, keyword_score(positive))
    } else if negative > positive {
        (SentimentLabel::Negative, keyword_score(negative))
    } else {
        (SentimentLabel::Neutral, NEUTRAL_SCORE)
    };

    info!(%label, score, positive, negative, "Fallback keyword classification");
    AnalysisResult::classified(label, score)
}

/// Number of distinct keywords appearing anywhere in `text`, substrings included.
fn keyword_hits(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|word| text.contains(*word)).count()
}

fn keyword_score(hits: usize) -> f64 {
    let bonus = (hits as f64 * SCORE_STEP).min(MAX_BONUS);
    round2(BASE_SCORE + bonus)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gibberish_is_rejected() {
        assert!(classify("asdkjh qweiop").is_none());
        assert!(classify("").is_none());
    }

    #[test]
    fn test_positive() {
        let result = classify("I love this, it is great and amazing");
        assert_eq!(result.classification(), Some((SentimentLabel::Positive, 0.99)));
    }

    #[test]
    fn test_negative() {
        let result = classify("this is terrible and awful");
        assert_eq!(result.classification(), Some((SentimentLabel::Negative, 0.95)));
    }

    #[test]
    fn test_neutral() {
        let result = classify("this is a table");
        assert_eq!(result.classification(), Some((SentimentLabel::Neutral, 0.75)));
    }

    #[test]
    fn test_single_keyword_score() {
        let result = classify("good");
        assert_eq!(result.classification(), Some((SentimentLabel::Positive, 0.9)));
    }

    #[test]
    fn test_score_is_capped() {
        let result = classify("love great excellent amazing good wonderful");
        assert_eq!(result.score(), Some(0.99));
    }

    #[test]
    fn test_tie_without_common_words_is_neutral() {
        let result = classify("good bad");
        assert_eq!(result.classification(), Some((SentimentLabel::Neutral, 0.75)));
    }

    #[test]
    fn test_keywords_match_inside_words() {
        // "badly" contains "bad"
        let result = classify("Badly done");
        assert_eq!(result.label(), Some(SentimentLabel::Negative));
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        let result = classify("love love love");
        assert_eq!(result.score(), Some(0.9));
    }

    #[test]
    fn test_common_words_need_whole_tokens() {
        // "this," keeps its comma and is not a common word on its own
        assert!(classify("this, xyz").is_none());
        assert!(!classify("THIS xyz").is_none());
    }

    #[test]
    fn test_deterministic() {
        let text = "I enjoy it but the ending was sad";
        assert_eq!(classify(text), classify(text));
    }
}
