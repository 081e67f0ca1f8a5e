//! Lexicon-based sentiment scoring for committee meeting transcripts.
//!
//! The crate implements a staged text-normalization pipeline and a
//! bag-of-words sentiment layer on top of it:
//!
//! 1. **Tokenize** — raw text into words, numbers, and punctuation tokens.
//! 2. **Clean** — lowercase, alphabetic-only, minimum-length filtering.
//! 3. **Stopword-filter** — drop high-frequency function words.
//! 4. **Stem** — Porter (1980) suffix stripping.
//! 5. **Stopword-filter again** — on stems, which can surface new stopwords.
//! 6. **Count** — per-document lexicon-membership counts and a net-polarity
//!    sentiment score.
//!
//! The [`Corpus`] container owns documents and applies stages in place, so
//! intermediate sequences stay inspectable between stages; the
//! [`LexiconCounter`] snapshots the corpus and produces counts the caller
//! owns.
//!
//! # Example
//!
//! ```
//! use transcript_sentiment::{
//!     Corpus, DocSelector, Lexicon, LexiconCounter, SequenceField, StopwordPreset,
//! };
//!
//! let mut corpus = Corpus::new(
//!     vec!["Growth increased sharply. It increased again.".to_string()],
//!     StopwordPreset::Short,
//! );
//! corpus.clean(DocSelector::All)?;
//! corpus.remove_stopwords(SequenceField::Tokens);
//! corpus.stem(DocSelector::All)?;
//! corpus.remove_stopwords(SequenceField::Stems);
//!
//! let counter = LexiconCounter::from_corpus(&corpus);
//! let positive = Lexicon::new("positive", &["increas"]);
//! let negative = Lexicon::new("negative", &["declin"]);
//! let scores = counter.score(&positive, &negative, SequenceField::Stems);
//!
//! assert_eq!(scores[0].sentiment, Some(1.0));
//! # Ok::<(), transcript_sentiment::CorpusError>(())
//! ```

pub mod bow;
pub mod corpus;
pub mod error;
pub mod nlp;
pub mod types;

pub use bow::{sentiment, DocumentSentiment, LexiconCounter, Polarity};
pub use corpus::{Corpus, Document};
pub use error::CorpusError;
pub use nlp::cleaner::TokenCleaner;
pub use nlp::stemmer::PorterStemmer;
pub use nlp::stopwords::StopwordFilter;
pub use nlp::tokenizer::tokenize;
pub use types::{DocSelector, Lexicon, SequenceField, StopwordPreset};
