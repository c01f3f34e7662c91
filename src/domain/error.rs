// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Every failure the pipeline can hit is one of the variants
// below. All of them are structural problems — a bad config,
// a malformed corpus, a dataset too small to split — so all
// of them are fatal at the point of detection. Nothing is
// retried and nothing is silently skipped; the caller sees
// exactly which condition fired.
//
// thiserror generates the Display impls from the #[error]
// attributes, and anyhow picks these up unchanged at the
// application boundary via `?`.
//
// Reference: Rust Book §9 (Error Handling)

use thiserror::Error;

/// All fatal pipeline error conditions.
#[derive(Debug, Error, PartialEq)]
pub enum PipelineError {
    /// A required training configuration field is missing or
    /// invalid. Surfaced before any training step runs.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Dataset inputs and labels have different lengths.
    #[error("length mismatch: {inputs} inputs vs {labels} labels")]
    LengthMismatch { inputs: usize, labels: usize },

    /// Out-of-bounds dataset access — indicates a caller bug.
    #[error("index {index} out of range for dataset of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// Non-positive model dimension at trainer initialisation.
    #[error("invalid dimension: input={input}, output={output} (both must be >= 1)")]
    InvalidDimension { input: usize, output: usize },

    /// Dataset too small to carve out a non-empty validation
    /// partition while keeping a non-empty training partition.
    #[error("insufficient data: {total} samples cannot form a train/validation split")]
    InsufficientData { total: usize },

    /// Evaluation requested on zero samples — metrics undefined.
    #[error("cannot evaluate an empty dataset")]
    EmptyDataset,
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_are_distinct_and_readable() {
        let e = PipelineError::LengthMismatch { inputs: 3, labels: 2 };
        assert_eq!(e.to_string(), "length mismatch: 3 inputs vs 2 labels");

        let e = PipelineError::InsufficientData { total: 1 };
        assert!(e.to_string().contains("1 samples"));

        // Two different conditions never compare equal
        assert_ne!(
            PipelineError::EmptyDataset,
            PipelineError::InsufficientData { total: 0 }
        );
    }
}
