//! Text normalization components
//!
//! This module provides the per-document normalization stages: tokenization,
//! token cleaning, stopword filtering, and stemming. Each stage is a pure
//! transformation over a token sequence; the
//! [`Corpus`](crate::corpus::Corpus) container composes them and owns the
//! in-place update of document state.

pub mod cleaner;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;
