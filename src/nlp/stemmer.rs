//! Suffix-stripping stemmer
//!
//! Implements the Porter stemming algorithm as published in Porter (1980),
//! "An algorithm for suffix stripping": five passes of suffix rules gated on
//! the consonant-vowel measure of the remaining stem. Within each pass the
//! first matching suffix decides the rule — if its condition fails, no other
//! suffix in that pass is tried.
//!
//! The stemmer is deterministic and context-free: the same token always
//! yields the same stem, independent of the surrounding document. Stems need
//! not be dictionary words ("sharply" becomes "sharpli"); downstream lexicon
//! matching relies on lexicon entries being in the same stemmed form.
//!
//! Words of length ≤ 2 and words containing anything other than lowercase
//! ASCII letters pass through unchanged. Tokens are expected to be cleaned
//! (lowercased, alphabetic) before stemming; feeding raw tokens is permitted
//! but produces degraded results.

/// Porter (1980) suffix-stripping stemmer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    pub fn new() -> Self {
        Self
    }

    /// Stem a single token.
    pub fn stem(&self, word: &str) -> String {
        if word.len() <= 2 || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return word.to_string();
        }

        let mut w = word.as_bytes().to_vec();
        step1a(&mut w);
        step1b(&mut w);
        step1c(&mut w);
        step2(&mut w);
        step3(&mut w);
        step4(&mut w);
        step5a(&mut w);
        step5b(&mut w);

        // Input was lowercase ASCII and rules only remove or append ASCII
        // letters, so the bytes are always valid UTF-8.
        String::from_utf8(w).unwrap_or_else(|_| word.to_string())
    }
}

// ─── Letter classification ──────────────────────────────────────────────────

/// A consonant is a letter other than a, e, i, o, u and other than y
/// preceded by a consonant (so "y" in "sky" is a vowel, in "yes" a
/// consonant).
fn is_consonant(w: &[u8], i: usize) -> bool {
    match w[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => i == 0 || !is_consonant(w, i - 1),
        _ => true,
    }
}

/// The measure m of a stem: the number of vowel-consonant sequences in its
/// [C](VC)^m[V] form.
fn measure(w: &[u8]) -> usize {
    let n = w.len();
    let mut m = 0;
    let mut i = 0;

    while i < n && is_consonant(w, i) {
        i += 1;
    }
    loop {
        while i < n && !is_consonant(w, i) {
            i += 1;
        }
        if i == n {
            return m;
        }
        while i < n && is_consonant(w, i) {
            i += 1;
        }
        m += 1;
        if i == n {
            return m;
        }
    }
}

fn contains_vowel(w: &[u8]) -> bool {
    (0..w.len()).any(|i| !is_consonant(w, i))
}

fn ends_double_consonant(w: &[u8]) -> bool {
    let n = w.len();
    n >= 2 && w[n - 1] == w[n - 2] && is_consonant(w, n - 1)
}

/// Stem ends consonant-vowel-consonant where the final consonant is not
/// w, x, or y (so "hop" qualifies but "snow", "box", "tray" do not).
fn ends_cvc(w: &[u8]) -> bool {
    let n = w.len();
    n >= 3
        && is_consonant(w, n - 3)
        && !is_consonant(w, n - 2)
        && is_consonant(w, n - 1)
        && !matches!(w[n - 1], b'w' | b'x' | b'y')
}

fn ends_with(w: &[u8], suffix: &[u8]) -> bool {
    w.len() >= suffix.len() && &w[w.len() - suffix.len()..] == suffix
}

// ─── Steps ──────────────────────────────────────────────────────────────────

/// Plural removal: sses → ss, ies → i, ss → ss, s → "".
fn step1a(w: &mut Vec<u8>) {
    if ends_with(w, b"sses") || ends_with(w, b"ies") {
        w.truncate(w.len() - 2);
    } else if !ends_with(w, b"ss") && ends_with(w, b"s") {
        w.pop();
    }
}

/// Past tense / progressive removal with restoration of e where needed.
fn step1b(w: &mut Vec<u8>) {
    if ends_with(w, b"eed") {
        if measure(&w[..w.len() - 3]) > 0 {
            w.pop();
        }
        return;
    }

    let stripped = if ends_with(w, b"ed") && contains_vowel(&w[..w.len() - 2]) {
        let n = w.len();
        w.truncate(n - 2);
        true
    } else if ends_with(w, b"ing") && contains_vowel(&w[..w.len() - 3]) {
        let n = w.len();
        w.truncate(n - 3);
        true
    } else {
        false
    };

    if !stripped {
        return;
    }
    if ends_with(w, b"at") || ends_with(w, b"bl") || ends_with(w, b"iz") {
        w.push(b'e');
    } else if ends_double_consonant(w) && !matches!(w.last(), Some(b'l' | b's' | b'z')) {
        w.pop();
    } else if measure(w) == 1 && ends_cvc(w) {
        w.push(b'e');
    }
}

/// y → i when the stem contains a vowel ("happy" → "happi", "sky" → "sky").
fn step1c(w: &mut Vec<u8>) {
    if w.last() == Some(&b'y') && contains_vowel(&w[..w.len() - 1]) {
        let n = w.len();
        w[n - 1] = b'i';
    }
}

/// Double-suffix reduction, condition m(stem) > 0. Rule table from the
/// paper, including its abli → able form.
const STEP2_RULES: &[(&[u8], &[u8])] = &[
    (b"ational", b"ate"),
    (b"tional", b"tion"),
    (b"enci", b"ence"),
    (b"anci", b"ance"),
    (b"izer", b"ize"),
    (b"abli", b"able"),
    (b"alli", b"al"),
    (b"entli", b"ent"),
    (b"eli", b"e"),
    (b"ousli", b"ous"),
    (b"ization", b"ize"),
    (b"ation", b"ate"),
    (b"ator", b"ate"),
    (b"alism", b"al"),
    (b"iveness", b"ive"),
    (b"fulness", b"ful"),
    (b"ousness", b"ous"),
    (b"aliti", b"al"),
    (b"iviti", b"ive"),
    (b"biliti", b"ble"),
];

/// -ic-, -full, -ness reduction, condition m(stem) > 0.
const STEP3_RULES: &[(&[u8], &[u8])] = &[
    (b"icate", b"ic"),
    (b"ative", b""),
    (b"alize", b"al"),
    (b"iciti", b"ic"),
    (b"ical", b"ic"),
    (b"ful", b""),
    (b"ness", b""),
];

fn apply_rules(w: &mut Vec<u8>, rules: &[(&[u8], &[u8])]) {
    for &(suffix, replacement) in rules {
        if !ends_with(w, suffix) {
            continue;
        }
        let stem_len = w.len() - suffix.len();
        if measure(&w[..stem_len]) > 0 {
            w.truncate(stem_len);
            w.extend_from_slice(replacement);
        }
        return;
    }
}

fn step2(w: &mut Vec<u8>) {
    apply_rules(w, STEP2_RULES);
}

fn step3(w: &mut Vec<u8>) {
    apply_rules(w, STEP3_RULES);
}

/// Suffix deletion in long stems, condition m(stem) > 1. "ion" additionally
/// requires the stem to end in s or t ("adoption" → "adopt", "opinion"
/// unchanged). Ordering keeps ement before ment before ent.
const STEP4_SUFFIXES: &[&[u8]] = &[
    b"al", b"ance", b"ence", b"er", b"ic", b"able", b"ible", b"ant", b"ement", b"ment", b"ent",
    b"ion", b"ou", b"ism", b"ate", b"iti", b"ous", b"ive", b"ize",
];

fn step4(w: &mut Vec<u8>) {
    for &suffix in STEP4_SUFFIXES {
        if !ends_with(w, suffix) {
            continue;
        }
        let stem_len = w.len() - suffix.len();
        let stem = &w[..stem_len];
        let mut applies = measure(stem) > 1;
        if *suffix == *b"ion" {
            applies = applies && matches!(stem.last(), Some(b's' | b't'));
        }
        if applies {
            w.truncate(stem_len);
        }
        return;
    }
}

/// Final e removal: always when m > 1, and when m == 1 unless the stem ends
/// cvc ("rate" keeps its e, "cease" loses it).
fn step5a(w: &mut Vec<u8>) {
    if w.last() != Some(&b'e') {
        return;
    }
    let stem = &w[..w.len() - 1];
    let m = measure(stem);
    if m > 1 || (m == 1 && !ends_cvc(stem)) {
        w.pop();
    }
}

/// ll → l in long stems ("controll" → "control", "roll" unchanged).
fn step5b(w: &mut Vec<u8>) {
    if w.last() == Some(&b'l') && ends_double_consonant(w) && measure(w) > 1 {
        w.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_stems(cases: &[(&str, &str)]) {
        let stemmer = PorterStemmer::new();
        for (word, expected) in cases {
            assert_eq!(&stemmer.stem(word), expected, "stem({word})");
        }
    }

    #[test]
    fn test_plural_removal() {
        assert_stems(&[
            ("caresses", "caress"),
            ("ponies", "poni"),
            ("ties", "ti"),
            ("caress", "caress"),
            ("cats", "cat"),
        ]);
    }

    #[test]
    fn test_past_tense_and_progressive() {
        assert_stems(&[
            ("feed", "feed"),
            ("agreed", "agre"),
            ("plastered", "plaster"),
            ("bled", "bled"),
            ("motoring", "motor"),
            ("sing", "sing"),
            ("sized", "size"),
            ("hopping", "hop"),
            ("tanned", "tan"),
            ("falling", "fall"),
            ("hissing", "hiss"),
            ("failing", "fail"),
            ("filing", "file"),
            ("running", "run"),
            ("studies", "studi"),
        ]);
    }

    #[test]
    fn test_y_to_i() {
        assert_stems(&[("happy", "happi"), ("sky", "sky"), ("sharply", "sharpli")]);
    }

    #[test]
    fn test_multi_suffix_reduction() {
        assert_stems(&[
            ("traditional", "tradit"),
            ("conditional", "condit"),
            ("rational", "ration"),
            ("relational", "relat"),
            ("reference", "refer"),
            ("colonizer", "colon"),
            ("generalization", "gener"),
            ("itemization", "item"),
            ("oscillators", "oscil"),
            ("electricity", "electr"),
            ("electrical", "electr"),
            ("hopeful", "hope"),
            ("goodness", "good"),
        ]);
    }

    #[test]
    fn test_long_stem_suffix_deletion() {
        assert_stems(&[
            ("allowance", "allow"),
            ("inference", "infer"),
            ("dependent", "depend"),
            ("adjustment", "adjust"),
            ("adoption", "adopt"),
            ("communism", "commun"),
            ("activate", "activ"),
            ("effective", "effect"),
            ("plotted", "plot"),
        ]);
    }

    #[test]
    fn test_transcript_vocabulary() {
        assert_stems(&[
            ("growth", "growth"),
            ("increased", "increas"),
            ("sharply", "sharpli"),
        ]);
    }

    #[test]
    fn test_short_and_nonalpha_tokens_unchanged() {
        assert_stems(&[
            ("it", "it"),
            ("a", "a"),
            ("25", "25"),
            (",", ","),
            ("4q", "4q"),
            ("", ""),
        ]);
    }

    #[test]
    fn test_deterministic_and_context_free() {
        let stemmer = PorterStemmer::new();
        for word in ["increased", "policies", "tightening", "accommodation"] {
            assert_eq!(stemmer.stem(word), stemmer.stem(word));
        }
    }

    #[test]
    fn test_idempotent_on_common_stems() {
        let stemmer = PorterStemmer::new();
        for word in ["running", "motoring", "caresses", "sharply"] {
            let once = stemmer.stem(word);
            let twice = stemmer.stem(&once);
            assert_eq!(once, twice, "stem not stable for {word}");
        }
    }

    #[test]
    fn test_output_never_longer_than_input() {
        let stemmer = PorterStemmer::new();
        for word in ["running", "studies", "flies", "processing", "generalization"] {
            let stemmed = stemmer.stem(word);
            assert!(stemmed.len() <= word.len(), "{word} -> {stemmed}");
        }
    }
}
