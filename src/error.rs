//! Error types for corpus operations.
//!
//! Only caller contract violations are errors. Degenerate-but-valid states —
//! an empty document, a document with zero sentiment-lexicon hits — are
//! expressed as values (empty sequences, zero counts, `None` sentiment).

use thiserror::Error;

/// Errors raised by [`Corpus`](crate::corpus::Corpus) operations and
/// configuration parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorpusError {
    /// A document index was outside the corpus bounds.
    #[error("document index {index} out of range for corpus of {len} documents")]
    DocumentOutOfRange { index: usize, len: usize },

    /// A string did not name a known sequence field.
    #[error("unknown sequence field `{0}` (expected `tokens` or `stems`)")]
    UnknownSequenceField(String),

    /// A string did not name a known stopword preset.
    #[error("unknown stopword preset `{0}` (expected `short` or `long`)")]
    UnknownStopwordPreset(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CorpusError::DocumentOutOfRange { index: 5, len: 3 };
        assert_eq!(
            err.to_string(),
            "document index 5 out of range for corpus of 3 documents"
        );

        let err = CorpusError::UnknownSequenceField("lemmas".into());
        assert!(err.to_string().contains("`lemmas`"));
    }
}
