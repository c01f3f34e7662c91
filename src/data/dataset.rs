// ============================================================
// Layer 4 — Pair Dataset
// ============================================================
// An ordered, fixed-length pairing of inputs to integer class
// labels with stable positional access. Generic over the input
// type so the same container carries raw texts early in the
// pipeline and extracted feature vectors later.
//
// Construction takes TWO parallel sequences and refuses to
// build if their lengths differ — the one structural mistake
// that would silently corrupt every downstream computation.
//
// Reference: Rust Book §8 (Vectors), §10 (Generics)

use crate::domain::error::PipelineError;

/// Indexable (input, label) pairs of equal length.
#[derive(Debug, Clone)]
pub struct PairDataset<T> {
    inputs: Vec<T>,
    labels: Vec<usize>,
}

/// The container the trainer and evaluator consume:
/// fixed-width feature vectors paired with class indices.
pub type FeatureDataset = PairDataset<Vec<f64>>;

impl<T> PairDataset<T> {
    /// Build from parallel inputs and labels.
    /// Fails with LengthMismatch if the sequences differ in length.
    pub fn new(inputs: Vec<T>, labels: Vec<usize>) -> Result<Self, PipelineError> {
        if inputs.len() != labels.len() {
            return Err(PipelineError::LengthMismatch {
                inputs: inputs.len(),
                labels: labels.len(),
            });
        }
        Ok(Self { inputs, labels })
    }

    /// Number of (input, label) pairs in the dataset.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Positional access to the index-th pair.
    /// Fails with IndexOutOfRange outside [0, len) — an
    /// out-of-bounds index is a caller bug, not a soft miss.
    pub fn get(&self, index: usize) -> Result<(&T, usize), PipelineError> {
        if index >= self.len() {
            return Err(PipelineError::IndexOutOfRange {
                index,
                size: self.len(),
            });
        }
        Ok((&self.inputs[index], self.labels[index]))
    }

    /// Highest label present, or None when empty.
    pub fn max_label(&self) -> Option<usize> {
        self.labels.iter().copied().max()
    }

    /// Iterate (input, label) pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.inputs.iter().zip(self.labels.iter().copied())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_constructed_pairs_unchanged() {
        let ds = PairDataset::new(vec!["a", "b", "c"], vec![0, 1, 0]).unwrap();
        assert_eq!(ds.len(), 3);
        for (i, expected) in [("a", 0), ("b", 1), ("c", 0)].iter().enumerate() {
            let (input, label) = ds.get(i).unwrap();
            assert_eq!((*input, label), *expected);
        }
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let err = PairDataset::new(vec!["a", "b"], vec![0]).unwrap_err();
        assert_eq!(err, PipelineError::LengthMismatch { inputs: 2, labels: 1 });
    }

    #[test]
    fn test_out_of_range_access_rejected() {
        let ds = PairDataset::new(vec!["a"], vec![0]).unwrap();
        let err = ds.get(1).unwrap_err();
        assert_eq!(err, PipelineError::IndexOutOfRange { index: 1, size: 1 });
    }

    #[test]
    fn test_empty_dataset_is_valid_to_construct() {
        let ds: PairDataset<String> = PairDataset::new(vec![], vec![]).unwrap();
        assert!(ds.is_empty());
        assert!(ds.get(0).is_err());
    }

    #[test]
    fn test_max_label() {
        let ds = PairDataset::new(vec![1, 2, 3], vec![2, 0, 1]).unwrap();
        assert_eq!(ds.max_label(), Some(2));
    }
}
