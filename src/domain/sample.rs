// ============================================================
// Layer 3 — Sample Domain Type
// ============================================================
// Represents a single labelled example in domain terms:
//   - We have a raw text string
//   - We have an integer class label
//
// The label is a class INDEX, not a class name. The mapping
// from index to human-readable name lives with the corpus,
// not with the sample — the pipeline only ever needs the index.
//
// Example:
//   text:  "great product would buy again"
//   label: 1   (→ "positive" in a sentiment corpus)
//
// A Sample is immutable once constructed — cleaning and
// featurisation produce NEW values downstream, they never
// rewrite the original text.
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

/// A raw (text, label) pair straight from the corpus.
/// The text is uncleaned and untokenised — by the time it
/// reaches the model it has passed through the normalizer
/// and feature transformer in Layer 4.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    /// The raw input text before any cleaning
    pub text: String,

    /// The class index this text belongs to.
    /// Must lie in [0, output_dimension) — validated at
    /// pipeline assembly time, not here.
    pub label: usize,
}

impl Sample {
    /// Create a new Sample.
    /// Uses impl Into<String> so callers can pass &str or String —
    /// this is idiomatic Rust for flexible string arguments.
    pub fn new(text: impl Into<String>, label: usize) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}
