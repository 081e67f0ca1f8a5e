//! Net-polarity sentiment scoring.
//!
//! `sentiment = (pos - neg) / (pos + neg)`, in [-1, 1]. A document with no
//! sentiment-lexicon hits of either polarity has no defined sentiment; the
//! zero denominator is surfaced as an explicit `None`, never as NaN, a
//! silent 0.0, or a panic.

use serde::Serialize;

/// Sentiment polarity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negative,
    /// Net-zero or undefined sentiment.
    Neutral,
}

/// Per-document sentiment output: the externally visible artifact of the
/// pipeline, mapped to quarters and written out by downstream glue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentSentiment {
    /// Ordinal document identifier.
    pub doc_id: usize,
    /// Positive-lexicon hit count.
    pub positive: usize,
    /// Negative-lexicon hit count.
    pub negative: usize,
    /// Net polarity, `None` when the document has no sentiment words.
    pub sentiment: Option<f64>,
}

impl DocumentSentiment {
    /// Classify the document's polarity. Undefined sentiment is neutral.
    pub fn polarity(&self) -> Polarity {
        match self.sentiment {
            Some(s) if s > 0.0 => Polarity::Positive,
            Some(s) if s < 0.0 => Polarity::Negative,
            _ => Polarity::Neutral,
        }
    }
}

/// Net polarity of a document given its positive and negative hit counts.
pub fn sentiment(positive: usize, negative: usize) -> Option<f64> {
    let total = positive + negative;
    if total == 0 {
        return None;
    }
    Some((positive as f64 - negative as f64) / total as f64)
}
