//! Token cleaning
//!
//! Normalizes a token sequence after tokenization: lower-cases every token,
//! drops any token containing a non-alphabetic character (numbers,
//! punctuation tokens, and mixed alphanumerics are removed entirely), and
//! drops tokens below a minimum length. Single-letter words such as "a" and
//! "i" are deliberately dropped here even though stopword removal would also
//! catch them; the redundancy is part of the documented pipeline behavior.

/// Filters and normalizes a token sequence.
#[derive(Debug, Clone)]
pub struct TokenCleaner {
    /// Minimum retained token length, in characters.
    min_len: usize,
}

impl Default for TokenCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenCleaner {
    /// Create a cleaner with the standard minimum token length of 2.
    pub fn new() -> Self {
        Self { min_len: 2 }
    }

    /// Set the minimum retained token length.
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Clean a token sequence, producing a new sequence.
    ///
    /// Every retained token is lowercase, purely ASCII-alphabetic, and at
    /// least `min_len` characters long. Cleaning never adds tokens and
    /// preserves the relative order of survivors.
    pub fn clean(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| t.to_lowercase())
            .filter(|t| !t.is_empty() && t.chars().all(|c| c.is_ascii_alphabetic()))
            .filter(|t| t.chars().count() >= self.min_len)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_clean_lowercases_and_filters() {
        let cleaner = TokenCleaner::new();
        let tokens = owned(&[
            "Growth",
            "increased",
            "sharply",
            ".",
            "It",
            "increased",
            "again",
            ".",
        ]);
        assert_eq!(
            cleaner.clean(&tokens),
            owned(&["growth", "increased", "sharply", "it", "increased", "again"])
        );
    }

    #[test]
    fn test_clean_drops_numbers_and_mixed_tokens() {
        let cleaner = TokenCleaner::new();
        let tokens = owned(&["rates", "25", "4Q", "basis", "q1"]);
        assert_eq!(cleaner.clean(&tokens), owned(&["rates", "basis"]));
    }

    #[test]
    fn test_clean_drops_single_letters_even_real_words() {
        let cleaner = TokenCleaner::new();
        let tokens = owned(&["I", "a", "am", "here"]);
        assert_eq!(cleaner.clean(&tokens), owned(&["am", "here"]));
    }

    #[test]
    fn test_clean_never_adds_tokens() {
        let cleaner = TokenCleaner::new();
        let tokens = owned(&["one", "2", "three", ",", "four"]);
        assert!(cleaner.clean(&tokens).len() <= tokens.len());
    }

    #[test]
    fn test_cleaned_tokens_match_contract() {
        let cleaner = TokenCleaner::new();
        let tokens = owned(&["Mixed", "CASE", "word's", "hyphen-ated", "ok"]);
        for token in cleaner.clean(&tokens) {
            assert!(token.len() >= 2);
            assert!(token.chars().all(|c| c.is_ascii_lowercase()), "{token}");
        }
    }

    #[test]
    fn test_clean_empty_input() {
        let cleaner = TokenCleaner::new();
        assert!(cleaner.clean(&[]).is_empty());
    }

    #[test]
    fn test_custom_min_len() {
        let cleaner = TokenCleaner::new().with_min_len(5);
        let tokens = owned(&["rate", "rates", "growth"]);
        assert_eq!(cleaner.clean(&tokens), owned(&["rates", "growth"]));
    }
}
