//! Stopword filtering
//!
//! This module provides stopword filtering backed by the `stop-words` crate,
//! with a compact built-in alternative and support for custom lists.
//!
//! Matching is an exact set-membership check: tokens are expected to already
//! be lowercase when they reach this stage (the cleaner runs first), and the
//! stored sets are lowercase. The filter is applied both to surface tokens
//! and, after stemming, to stem sequences — stemming can produce forms that
//! coincide with stopwords absent from the surface sequence, so the two
//! passes are independent.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::types::StopwordPreset;

/// A filter for removing stopwords from a token or stem sequence.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase).
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::from_preset(StopwordPreset::Long)
    }
}

impl StopwordFilter {
    /// Create a stopword filter from a named preset.
    pub fn from_preset(preset: StopwordPreset) -> Self {
        let stopwords = match preset {
            StopwordPreset::Short => Self::short_stopwords(),
            StopwordPreset::Long => get(LANGUAGE::English)
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
        };
        Self { stopwords }
    }

    /// Create an empty stopword filter (no filtering).
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list.
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add additional stopwords to the filter.
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Check if a word is a stopword. Exact match against the lowercase set.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Produce a new sequence retaining only non-stopword entries.
    ///
    /// Idempotent: filtering an already-filtered sequence is a no-op.
    pub fn filter(&self, sequence: &[String]) -> Vec<String> {
        sequence
            .iter()
            .filter(|t| !self.stopwords.contains(t.as_str()))
            .cloned()
            .collect()
    }

    /// Get the number of stopwords in the filter.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// Compact list of the highest-frequency English function words.
    fn short_stopwords() -> FxHashSet<String> {
        [
            // Articles and determiners
            "a", "an", "the", "this", "that", "these", "those", "each", "few", "more", "most",
            "other", "some", "such", "no", "any", "own", "same", "all", "both", "either",
            "neither",
            // Pronouns
            "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
            "yourself", "he", "him", "his", "himself", "she", "her", "hers", "herself", "it",
            "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
            "who", "whom",
            // Auxiliary and modal verbs
            "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
            "having", "do", "does", "did", "doing", "would", "should", "could", "ought", "might",
            "must", "shall", "will", "can", "may",
            // Prepositions
            "at", "by", "for", "from", "in", "into", "of", "on", "to", "with", "about",
            "against", "between", "during", "before", "after", "above", "below", "up", "down",
            "out", "off", "over", "under", "again", "further", "then", "once",
            // Conjunctions
            "and", "but", "or", "nor", "so", "yet", "not", "only", "than", "when", "where",
            "while", "if", "because", "as", "until", "although",
            // Other high-frequency words
            "here", "there", "too", "very", "just", "also", "now", "how", "why", "well",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}
