// ============================================================
// Layer 5 — Evaluator
// ============================================================
// Runs a frozen model over a held-out dataset and computes the
// standard classification metrics:
//
//   accuracy          correct / total
//   precision (class) tp / (tp + fp)   — column-wise on the matrix
//   recall    (class) tp / (tp + fn)   — row-wise on the matrix
//   F1        (class) harmonic mean of the two
//   confusion matrix  rows = true class, columns = predicted
//
// Per-class scores are aggregated by WEIGHTED average, where
// each class's weight is its support (number of true instances
// in the dataset). A class with zero support contributes zero
// weight — it can neither inflate nor deflate the aggregate,
// and it never causes a division by zero.
//
// Evaluation is pure computation: parameters are read-only, the
// dataset is read-only, and the only output is the returned
// MetricsReport. Printing and plotting are the caller's job.
//
// Reference: Sokolova & Lapalme (2009) — classification metrics
//            Rust Book §8 (Vectors)

use serde::{Deserialize, Serialize};

use crate::data::dataset::FeatureDataset;
use crate::domain::error::PipelineError;
use crate::ml::model::ModelParameters;

/// Aggregate metrics over one evaluation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Fraction of samples predicted correctly, in [0, 1]
    pub accuracy: f64,

    /// Support-weighted precision, in [0, 1]
    pub precision: f64,

    /// Support-weighted recall, in [0, 1]
    pub recall: f64,

    /// Support-weighted F1 score, in [0, 1]
    pub f1: f64,

    /// confusion[true_class][predicted_class] = count.
    /// Entries sum to the evaluation set size.
    pub confusion: Vec<Vec<usize>>,
}

/// Evaluate frozen parameters over every sample in `dataset`.
/// Fails with EmptyDataset on zero samples — metrics over
/// nothing are undefined, not zero — and with Configuration
/// when any label falls outside the model's class range.
pub fn evaluate(
    params: &ModelParameters,
    dataset: &FeatureDataset,
) -> Result<MetricsReport, PipelineError> {
    if dataset.is_empty() {
        return Err(PipelineError::EmptyDataset);
    }

    let classes = params.output_dim();
    let total = dataset.len();

    // Every label must address a row of the confusion matrix;
    // a corpus labelled outside the model's classes is a
    // corpus/model mismatch.
    if let Some(max) = dataset.max_label() {
        if max >= classes {
            return Err(PipelineError::Configuration(format!(
                "dataset contains label {max} but the model predicts over {classes} classes"
            )));
        }
    }

    // ── Inference pass: fill the confusion matrix ─────────────────────────────
    let mut confusion = vec![vec![0usize; classes]; classes];
    for (x, label) in dataset.iter() {
        let predicted = params.predict(x);
        confusion[label][predicted] += 1;
    }

    // ── Accuracy: diagonal over total ─────────────────────────────────────────
    let correct: usize = (0..classes).map(|c| confusion[c][c]).sum();
    let accuracy = correct as f64 / total as f64;

    // ── Per-class precision/recall/F1, weighted by support ────────────────────
    let mut precision = 0.0;
    let mut recall = 0.0;
    let mut f1 = 0.0;

    for class in 0..classes {
        let tp = confusion[class][class];
        let support: usize = confusion[class].iter().sum();
        let predicted: usize = (0..classes).map(|r| confusion[r][class]).sum();

        if support == 0 {
            // Zero true instances → zero weight, nothing to add
            continue;
        }

        let class_precision = if predicted > 0 {
            tp as f64 / predicted as f64
        } else {
            0.0
        };
        let class_recall = tp as f64 / support as f64;
        let class_f1 = if class_precision + class_recall > 0.0 {
            2.0 * class_precision * class_recall / (class_precision + class_recall)
        } else {
            0.0
        };

        let weight = support as f64 / total as f64;
        precision += weight * class_precision;
        recall += weight * class_recall;
        f1 += weight * class_f1;
    }

    Ok(MetricsReport {
        accuracy,
        precision,
        recall,
        f1,
        confusion,
    })
}
