//! Tokenization
//!
//! Splits raw text on whitespace and punctuation boundaries. Word and number
//! tokens (alphanumeric runs) are kept intact; every other printable
//! character becomes its own single-character token, so standalone commas and
//! periods survive as inspectable tokens. Case is preserved — lower-casing
//! belongs to the cleaning stage.

/// Tokenize raw text.
///
/// # Contract
///
/// - Empty input yields an empty sequence.
/// - Token order corresponds to original text order.
/// - Any printable string is tokenizable; this function never fails.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word = String::new();

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            word.push(ch);
        } else {
            if !word.is_empty() {
                tokens.push(std::mem::take(&mut word));
            }
            if !ch.is_whitespace() {
                tokens.push(ch.to_string());
            }
        }
    }
    if !word.is_empty() {
        tokens.push(word);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_words_and_punctuation() {
        let tokens = tokenize("Growth increased sharply. It increased again.");
        assert_eq!(
            tokens,
            vec![
                "Growth",
                "increased",
                "sharply",
                ".",
                "It",
                "increased",
                "again",
                "."
            ]
        );
    }

    #[test]
    fn test_tokenize_preserves_case() {
        let tokens = tokenize("The Committee MET");
        assert_eq!(tokens, vec!["The", "Committee", "MET"]);
    }

    #[test]
    fn test_tokenize_keeps_numbers_intact() {
        let tokens = tokenize("rates rose 25 basis points");
        assert_eq!(tokens, vec!["rates", "rose", "25", "basis", "points"]);
    }

    #[test]
    fn test_tokenize_splits_embedded_punctuation() {
        let tokens = tokenize("growth, however, slowed");
        assert_eq!(tokens, vec!["growth", ",", "however", ",", "slowed"]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
    }

    #[test]
    fn test_tokenize_never_adds_empty_tokens() {
        let tokens = tokenize("a -- b");
        assert_eq!(tokens, vec!["a", "-", "-", "b"]);
        assert!(tokens.iter().all(|t| !t.is_empty()));
    }
}
