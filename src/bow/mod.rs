//! Bag-of-words lexicon counting.
//!
//! A [`LexiconCounter`] takes a read-only snapshot of a corpus's token and
//! stem sequences at construction time and counts lexicon membership per
//! document. Mutating the corpus after construction does not affect an
//! existing counter. The counter borrows nothing from the corpus; callers
//! own the count arrays it produces.

use crate::corpus::Corpus;
use crate::types::{Lexicon, SequenceField};

pub mod sentiment;

pub use sentiment::{sentiment, DocumentSentiment, Polarity};

/// Snapshot of per-document sequences with lexicon-membership counting.
#[derive(Debug, Clone)]
pub struct LexiconCounter {
    doc_ids: Vec<usize>,
    tokens: Vec<Vec<String>>,
    stems: Vec<Vec<String>>,
}

impl LexiconCounter {
    /// Snapshot the corpus's current token and stem sequences.
    pub fn from_corpus(corpus: &Corpus) -> Self {
        let doc_ids = corpus.documents().iter().map(|d| d.id()).collect();
        let tokens = corpus.documents().iter().map(|d| d.tokens().to_vec()).collect();
        let stems = corpus.documents().iter().map(|d| d.stems().to_vec()).collect();
        Self {
            doc_ids,
            tokens,
            stems,
        }
    }

    /// Number of documents in the snapshot.
    pub fn num_documents(&self) -> usize {
        self.doc_ids.len()
    }

    fn sequences(&self, field: SequenceField) -> &[Vec<String>] {
        match field {
            SequenceField::Tokens => &self.tokens,
            SequenceField::Stems => &self.stems,
        }
    }

    /// Count lexicon members per document, with multiplicity.
    ///
    /// Returns one count per document, in corpus order. Counting against the
    /// union of two disjoint lexicons equals the sum of the separate counts.
    pub fn count(&self, lexicon: &Lexicon, field: SequenceField) -> Vec<usize> {
        self.sequences(field)
            .iter()
            .map(|seq| seq.iter().filter(|entry| lexicon.contains(entry)).count())
            .collect()
    }

    /// Score every document against a positive and a negative lexicon.
    ///
    /// The sentiment of a document with zero hits of either polarity is
    /// `None` — an explicit undefined marker, never NaN.
    pub fn score(
        &self,
        positive: &Lexicon,
        negative: &Lexicon,
        field: SequenceField,
    ) -> Vec<DocumentSentiment> {
        let pos_counts = self.count(positive, field);
        let neg_counts = self.count(negative, field);

        self.doc_ids
            .iter()
            .zip(pos_counts)
            .zip(neg_counts)
            .map(|((&doc_id, positive), negative)| DocumentSentiment {
                doc_id,
                positive,
                negative,
                sentiment: sentiment(positive, negative),
            })
            .collect()
    }
}
