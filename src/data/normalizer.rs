// ============================================================
// Layer 4 — Text Normalizer
// ============================================================
// Cleans raw corpus text before featurisation.
//
// Why do we need to clean text?
//   Raw corpus text contains:
//   - Punctuation and digits that fragment the token stream
//   - Mixed casing ("Great" vs "great" vs "GREAT")
//   - Stopwords ("the", "is", "and") that appear in every
//     class equally and carry no discriminative signal
//
// Cleaning steps (applied in order):
//   1. Drop every character outside ASCII letters / whitespace
//   2. Lowercase all remaining letters
//   3. Split into word tokens on whitespace
//   4. Discard tokens found in the stopword set
//   5. Rejoin the surviving tokens with single spaces
//
// normalize() is a pure function: same input + same lexicon
// always produce the same output, and empty input (or input
// that is all stopwords/punctuation) yields an empty string —
// never an error.
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

use crate::infra::lexicon::Lexicon;

/// Clean a raw text string: keep letters only, lowercase,
/// remove stopwords, rejoin with single spaces.
pub fn normalize(text: &str, lexicon: &Lexicon) -> String {
    // ── Step 1 + 2: character-level filter and lowercasing ───────────────────
    // Characters outside [A-Za-z] and whitespace are dropped
    // entirely (not replaced with a space) so "don't" becomes
    // "dont" rather than two fragments.
    let letters_only: String = text
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphabetic() {
                Some(c.to_ascii_lowercase())
            } else if c.is_whitespace() {
                Some(' ')
            } else {
                None
            }
        })
        .collect();

    // ── Step 3 + 4 + 5: tokenise, drop stopwords, rejoin ─────────────────────
    // split_whitespace() already collapses runs of spaces, so
    // the output is guaranteed single-space separated.
    letters_only
        .split_whitespace()
        .filter(|tok| !lexicon.is_stopword(tok))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split text into word tokens WITHOUT stopword removal.
/// Used wherever raw tokenisation (not cleaning) is required —
/// the feature transformer consumes this form.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn lex() -> Lexicon {
        Lexicon::builtin()
    }

    #[test]
    fn test_strips_punctuation_and_digits() {
        let out = normalize("Hello, World! 42 times.", &lex());
        assert_eq!(out, "hello world times");
    }

    #[test]
    fn test_removes_stopwords() {
        let out = normalize("this is an example sentence", &lex());
        assert_eq!(out, "example sentence");
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        assert_eq!(normalize("", &lex()), "");
    }

    #[test]
    fn test_all_stopwords_gives_empty_output() {
        // Entirely stopwords/punctuation → empty string, not an error
        assert_eq!(normalize("the is a, of!", &lex()), "");
    }

    #[test]
    fn test_output_alphabet_is_lowercase_letters_and_spaces() {
        let out = normalize("Mixed CASE with 123 sym&bols", &lex());
        assert!(out
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == ' '));
        assert!(!out.contains("  "), "no double spaces in output");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("Cats are RUNNING through the garden!", &lex());
        let twice = normalize(&once, &lex());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_tokenize_keeps_stopwords() {
        let toks = tokenize("this is fine");
        assert_eq!(toks, vec!["this", "is", "fine"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }
}
