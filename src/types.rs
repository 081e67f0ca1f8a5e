//! Shared configuration and value types.
//!
//! The pipeline is configured through closed enums rather than free-form
//! strings: [`SequenceField`] selects which per-document sequence an
//! operation targets, [`StopwordPreset`] names a built-in stopword list, and
//! [`DocSelector`] addresses one document or the whole corpus. All of these
//! are explicit values passed into construction — there is no ambient global
//! state, so independent pipelines with different configurations can coexist.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::CorpusError;

/// Which per-document sequence an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceField {
    /// The surface token sequence (tokenizer output, possibly cleaned).
    Tokens,
    /// The stem sequence (stemmer output).
    Stems,
}

impl SequenceField {
    /// Returns the user-facing name used in configuration and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tokens => "tokens",
            Self::Stems => "stems",
        }
    }
}

impl std::str::FromStr for SequenceField {
    type Err = CorpusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "tokens" => Ok(Self::Tokens),
            "stems" => Ok(Self::Stems),
            other => Err(CorpusError::UnknownSequenceField(other.to_string())),
        }
    }
}

/// Named built-in stopword list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopwordPreset {
    /// Compact list of the highest-frequency English function words.
    Short,
    /// Full English list from the `stop-words` crate.
    Long,
}

impl StopwordPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Long => "long",
        }
    }
}

impl std::str::FromStr for StopwordPreset {
    type Err = CorpusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "short" => Ok(Self::Short),
            "long" => Ok(Self::Long),
            other => Err(CorpusError::UnknownStopwordPreset(other.to_string())),
        }
    }
}

/// Addresses one document or every document in a corpus operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocSelector {
    /// Apply to every document.
    All,
    /// Apply to the document at this ordinal index.
    One(usize),
}

impl From<usize> for DocSelector {
    fn from(index: usize) -> Self {
        Self::One(index)
    }
}

/// A named, immutable set of word stems associated with a semantic category
/// (e.g., positive or negative sentiment).
///
/// Entries are stored lowercase; membership checks are exact matches, so
/// lexicon entries are expected to already be in stemmed form when matched
/// against stem sequences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    name: String,
    entries: FxHashSet<String>,
}

impl Lexicon {
    /// Create a lexicon from a word list. Words are lowercased on entry.
    pub fn new(name: impl Into<String>, words: &[&str]) -> Self {
        Self {
            name: name.into(),
            entries: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exact membership check against an already-lowercased word or stem.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
