//! Corpus container — owns documents and orchestrates the staged pipeline.
//!
//! A [`Corpus`] is constructed from raw document strings and a stopword
//! configuration; construction tokenizes every document. The normalization
//! stages ([`clean`](Corpus::clean), [`remove_stopwords`](Corpus::remove_stopwords),
//! [`stem`](Corpus::stem)) then mutate document state in place, so callers
//! can inspect intermediate sequences between stages. Mutations are not
//! reversible; no stage retains the pre-mutation sequence.
//!
//! Documents are independent units of work, so the corpus-wide operations
//! run as a data-parallel map over documents. Aggregate statistics are
//! computed on demand by flattening current sequences, never cached.

use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::CorpusError;
use crate::nlp::cleaner::TokenCleaner;
use crate::nlp::stemmer::PorterStemmer;
use crate::nlp::stopwords::StopwordFilter;
use crate::types::{DocSelector, SequenceField, StopwordPreset};

pub mod document;

pub use document::Document;

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("corpus_stage", stage = $name).entered();
    };
}

/// Ordered, fixed-size collection of [`Document`]s plus the stage
/// configuration applied to them.
#[derive(Debug, Clone)]
pub struct Corpus {
    documents: Vec<Document>,
    stopwords: StopwordFilter,
    cleaner: TokenCleaner,
    stemmer: PorterStemmer,
}

impl Corpus {
    /// Build a corpus from raw document strings and a stopword preset.
    ///
    /// Every document is tokenized immediately; the stopword set is loaded
    /// but not applied until [`remove_stopwords`](Self::remove_stopwords).
    pub fn new(raw_docs: Vec<String>, preset: StopwordPreset) -> Self {
        Self::with_stopwords(raw_docs, StopwordFilter::from_preset(preset))
    }

    /// Build a corpus with an explicit stopword filter (custom lists).
    pub fn with_stopwords(raw_docs: Vec<String>, stopwords: StopwordFilter) -> Self {
        trace_stage!("tokenize");
        let documents: Vec<Document> = raw_docs
            .into_par_iter()
            .enumerate()
            .map(|(id, raw)| Document::new(id, raw))
            .collect();

        Self {
            documents,
            stopwords,
            cleaner: TokenCleaner::new(),
            stemmer: PorterStemmer::new(),
        }
    }

    /// Number of documents. Fixed once constructed.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// All documents, in source order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// The document at `index`.
    pub fn document(&self, index: usize) -> Result<&Document, CorpusError> {
        self.documents.get(index).ok_or(CorpusError::DocumentOutOfRange {
            index,
            len: self.documents.len(),
        })
    }

    /// Apply the token cleaner to the selected documents, in place.
    pub fn clean(&mut self, selector: DocSelector) -> Result<(), CorpusError> {
        trace_stage!("clean");
        let cleaner = &self.cleaner;
        match selector {
            DocSelector::All => {
                self.documents.par_iter_mut().for_each(|doc| {
                    doc.tokens = cleaner.clean(&doc.tokens);
                });
            }
            DocSelector::One(index) => {
                let len = self.documents.len();
                let doc = self
                    .documents
                    .get_mut(index)
                    .ok_or(CorpusError::DocumentOutOfRange { index, len })?;
                doc.tokens = cleaner.clean(&doc.tokens);
            }
        }
        Ok(())
    }

    /// Remove stopwords from every document's selected sequence, in place.
    ///
    /// Expected usage applies this twice per run: once to tokens before
    /// stemming and once to stems after, since stemming can surface forms
    /// that coincide with stopwords.
    pub fn remove_stopwords(&mut self, field: SequenceField) {
        trace_stage!("remove_stopwords");
        let stopwords = &self.stopwords;
        self.documents.par_iter_mut().for_each(|doc| match field {
            SequenceField::Tokens => doc.tokens = stopwords.filter(&doc.tokens),
            SequenceField::Stems => doc.stems = stopwords.filter(&doc.stems),
        });
    }

    /// Stem the selected documents' token sequences into their stem
    /// sequences, in place. One stem per surviving token — stemming never
    /// drops entries.
    ///
    /// Calling this before [`clean`](Self::clean) is permitted but produces
    /// degraded results (punctuation and numeric tokens pass through the
    /// stemmer unchanged); sequencing is the caller's responsibility.
    pub fn stem(&mut self, selector: DocSelector) -> Result<(), CorpusError> {
        trace_stage!("stem");
        let stemmer = &self.stemmer;
        match selector {
            DocSelector::All => {
                self.documents.par_iter_mut().for_each(|doc| {
                    doc.stems = doc.tokens.iter().map(|t| stemmer.stem(t)).collect();
                });
            }
            DocSelector::One(index) => {
                let len = self.documents.len();
                let doc = self
                    .documents
                    .get_mut(index)
                    .ok_or(CorpusError::DocumentOutOfRange { index, len })?;
                doc.stems = doc.tokens.iter().map(|t| stemmer.stem(t)).collect();
            }
        }
        Ok(())
    }

    /// Number of distinct entries across all documents' selected sequences,
    /// reflecting the latest mutation.
    pub fn vocab_size(&self, field: SequenceField) -> usize {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for doc in &self.documents {
            for entry in doc.sequence(field) {
                seen.insert(entry.as_str());
            }
        }
        seen.len()
    }

    /// Total entry count across all documents' selected sequences.
    pub fn total_count(&self, field: SequenceField) -> usize {
        self.documents.iter().map(|d| d.sequence(field).len()).sum()
    }

    /// Corpus-wide term → occurrence-count map over the selected sequences.
    pub fn term_frequencies(&self, field: SequenceField) -> FxHashMap<String, usize> {
        let mut freq: FxHashMap<String, usize> = FxHashMap::default();
        for doc in &self.documents {
            for entry in doc.sequence(field) {
                *freq.entry(entry.clone()).or_insert(0) += 1;
            }
        }
        freq
    }
}
