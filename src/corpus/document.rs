//! Per-document pipeline state.

use crate::nlp::tokenizer::tokenize;
use crate::types::SequenceField;

/// One unit of text (here: one meeting's concatenated paragraphs) together
/// with the pipeline's per-stage outputs.
///
/// The token sequence is populated at construction and mutated in place by
/// the cleaning and stopword stages; the stem sequence is populated by the
/// stemming stage. Token order always corresponds to original text order —
/// stages drop tokens but never reorder them.
#[derive(Debug, Clone)]
pub struct Document {
    id: usize,
    raw: String,
    pub(crate) tokens: Vec<String>,
    pub(crate) stems: Vec<String>,
}

impl Document {
    pub(crate) fn new(id: usize, raw: String) -> Self {
        let tokens = tokenize(&raw);
        Self {
            id,
            raw,
            tokens,
            stems: Vec::new(),
        }
    }

    /// Ordinal identifier matching the document's position in the corpus.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The original, untouched text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Current token sequence.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Current stem sequence (empty until the stemming stage runs).
    pub fn stems(&self) -> &[String] {
        &self.stems
    }

    /// The sequence selected by `field`.
    pub fn sequence(&self, field: SequenceField) -> &[String] {
        match field {
            SequenceField::Tokens => &self.tokens,
            SequenceField::Stems => &self.stems,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_tokenizes_on_construction() {
        let doc = Document::new(0, "Growth increased.".to_string());
        assert_eq!(doc.id(), 0);
        assert_eq!(doc.raw(), "Growth increased.");
        assert_eq!(doc.tokens(), &["Growth", "increased", "."]);
        assert!(doc.stems().is_empty());
    }

    #[test]
    fn test_sequence_selects_field() {
        let mut doc = Document::new(1, "growth".to_string());
        doc.stems = vec!["growth".to_string()];
        assert_eq!(doc.sequence(SequenceField::Tokens), doc.tokens());
        assert_eq!(doc.sequence(SequenceField::Stems), doc.stems());
    }

    #[test]
    fn test_empty_document_is_valid() {
        let doc = Document::new(2, String::new());
        assert!(doc.tokens().is_empty());
        assert!(doc.stems().is_empty());
    }
}
