// ============================================================
// Layer 6 — Lexicon (Linguistic Resources)
// ============================================================
// Holds the two language resources the data pipeline needs:
//
//   1. A stopword set — common words ("the", "is", "and") that
//      carry almost no discriminative signal and are dropped
//      during normalisation.
//
//   2. A stemmer — reduces a word to an approximate root form
//      by stripping inflectional suffixes, so that "running",
//      "runs" and "run" all map to the same feature.
//
// Lifecycle: a Lexicon is built ONCE at process start by the
// application layer and passed down by shared reference. It is
// never mutated after construction. This keeps the resource
// explicit — there is no hidden global singleton that arbitrary
// call sites can reach into.
//
// The built-in stopword list is the standard English set; a
// different language (or a domain-specific list) can be loaded
// from a plain one-word-per-line file instead.
//
// Reference: Porter (1980) An Algorithm for Suffix Stripping
//            Rust Book §8 (HashSet), §9 (Error Handling)

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// The built-in English stopword list (subset of the standard
/// NLTK set — enough coverage for a baseline classifier).
const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "did", "do", "does", "doing",
    "down", "during", "each", "few", "for", "from", "further", "had", "has",
    "have", "having", "he", "her", "here", "hers", "him", "his", "how", "i",
    "if", "in", "into", "is", "it", "its", "just", "me", "more", "most",
    "my", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
    "or", "other", "our", "ours", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their",
    "theirs", "them", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "we",
    "were", "what", "when", "where", "which", "while", "who", "whom",
    "why", "will", "with", "you", "your", "yours",
];

/// Read-only linguistic resources: stopword set + stemmer.
pub struct Lexicon {
    stopwords: HashSet<String>,
}

impl Lexicon {
    /// Build a Lexicon with the built-in English stopword set.
    pub fn builtin() -> Self {
        let stopwords = ENGLISH_STOPWORDS
            .iter()
            .map(|w| w.to_string())
            .collect();
        Self { stopwords }
    }

    /// Build a Lexicon from a stopword file: one lowercase word
    /// per line, blank lines ignored. Used to swap in another
    /// language or a domain-specific list.
    pub fn from_stopword_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Cannot read stopword file '{}'", path.display()))?;

        let stopwords: HashSet<String> = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| l.to_lowercase())
            .collect();

        tracing::info!(
            "Loaded {} stopwords from '{}'",
            stopwords.len(),
            path.display()
        );
        Ok(Self { stopwords })
    }

    /// Is this (already lowercased) word a stopword?
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    /// Reduce a word to an approximate root by stripping common
    /// English inflectional suffixes.
    ///
    /// This is a compact Porter-style stemmer covering the
    /// high-frequency suffix classes:
    ///
    ///   plurals:       cats → cat, classes → class, studies → studi
    ///   -ing / -ed:    running → run, jumped → jump, hopped → hop
    ///   adverbs:       quickly → quick
    ///
    /// Words of three characters or fewer pass through unchanged —
    /// stripping them produces more noise than signal.
    pub fn stem(&self, word: &str) -> String {
        let mut w = word.to_lowercase();
        if w.chars().count() <= 3 {
            return w;
        }

        // ── Step 1: plural suffixes ───────────────────────────────────────────
        // Order matters: longest suffix first, and "-ss" must be
        // protected before the bare "-s" rule fires.
        if w.ends_with("sses") || w.ends_with("ies") {
            w.truncate(w.len() - 2);
        } else if !w.ends_with("ss") && w.ends_with('s') {
            w.truncate(w.len() - 1);
        }

        // ── Step 2: -ing / -ed (only if a vowel remains in the stem) ─────────
        let stripped = if w.ends_with("ing") && has_vowel(&w[..w.len() - 3]) {
            w.truncate(w.len() - 3);
            true
        } else if w.ends_with("ed") && has_vowel(&w[..w.len() - 2]) {
            w.truncate(w.len() - 2);
            true
        } else {
            false
        };

        // ── Step 3: repair the stem after stripping ───────────────────────────
        if stripped {
            if w.ends_with("at") || w.ends_with("bl") || w.ends_with("iz") {
                // operat(e), troubl(e), organiz(e) — restore the final e
                w.push('e');
            } else if ends_with_double_consonant(&w) {
                // hopp → hop, runn → run (but fall, pass, buzz stay)
                w.truncate(w.len() - 1);
            }
        }

        // ── Step 4: adverb suffix ─────────────────────────────────────────────
        if w.ends_with("ly") && w.chars().count() > 4 {
            w.truncate(w.len() - 2);
        }

        w
    }
}

/// Does the string contain at least one of a, e, i, o, u?
fn has_vowel(s: &str) -> bool {
    s.chars().any(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
}

/// True when the word ends in a doubled consonant other than
/// l, s or z (those doubles are kept, per Porter).
fn ends_with_double_consonant(w: &str) -> bool {
    let mut rev = w.chars().rev();
    match (rev.next(), rev.next()) {
        (Some(a), Some(b)) => {
            a == b
                && a.is_ascii_alphabetic()
                && !matches!(a, 'a' | 'e' | 'i' | 'o' | 'u' | 'l' | 's' | 'z')
        }
        _ => false,
    }
}
