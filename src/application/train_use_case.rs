// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates the full training pipeline in order:
//
//   Step 1: Build the lexicon          (Layer 6 - infra)
//   Step 2: Load the labelled corpus   (Layer 4 - data)
//   Step 3: Normalise + featurise      (Layer 4 - data)
//   Step 4: Build the dataset          (Layer 4 - data)
//   Step 5: Check the label range      (here)
//   Step 6: Save config for evaluation (Layer 6 - infra)
//   Step 7: Run the training loop      (Layer 5 - ml)
//   Step 8: Log metrics + save model   (Layer 6 - infra)
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::{
    dataset::{FeatureDataset, PairDataset},
    features::{to_feature_vector, transform},
    loader::TsvCorpusLoader,
    normalizer::{normalize, tokenize},
};
use crate::domain::error::PipelineError;
use crate::domain::sample::Sample;
use crate::domain::traits::CorpusSource;
use crate::infra::{checkpoint::CheckpointManager, lexicon::Lexicon, metrics::MetricsLogger};
use crate::ml::trainer::{EpochReport, Trainer};

fn default_seed() -> u64 {
    42
}

fn default_val_fraction() -> f64 {
    0.2
}

// ─── Training Configuration ──────────────────────────────────────────────────
// All hyperparameters for a training run, loaded once before
// training starts and never mutated afterwards. Serialisable so
// it can be saved next to the checkpoint and reloaded for
// evaluation. The five numeric fields are REQUIRED in a config
// file; seed and val_fraction default when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrainConfig {
    pub batch_size: usize,
    pub input_dimension: usize,
    pub output_dimension: usize,
    pub learning_rate: f64,
    pub epochs: usize,

    /// Seed for the split, shuffling and weight init — fixing it
    /// makes two runs bit-for-bit identical.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Fraction of the dataset held out for validation.
    #[serde(default = "default_val_fraction")]
    pub val_fraction: f64,
}

impl TrainConfig {
    /// Parse a JSON config string. A missing or non-numeric
    /// required field is a fatal Configuration error, surfaced
    /// here — before anything else has run.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: TrainConfig = serde_json::from_str(json)
            .map_err(|e| PipelineError::Configuration(e.to_string()))?;
        Ok(config)
    }

    /// Load a JSON config file from disk.
    pub fn from_file(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read config file '{path}'"))?;
        Self::from_json(&json)
    }
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
// Owns the config and runs the full training pipeline.
pub struct TrainUseCase {
    config: TrainConfig,
    corpus_path: String,
    checkpoint_dir: String,
    stopword_file: Option<String>,
}

impl TrainUseCase {
    pub fn new(
        config: TrainConfig,
        corpus_path: impl Into<String>,
        checkpoint_dir: impl Into<String>,
        stopword_file: Option<String>,
    ) -> Self {
        Self {
            config,
            corpus_path: corpus_path.into(),
            checkpoint_dir: checkpoint_dir.into(),
            stopword_file,
        }
    }

    /// Execute the full training pipeline end to end.
    /// Returns the per-epoch reports so Layer 1 decides how to
    /// present them — the pipeline itself never prints.
    pub fn execute(&self) -> Result<Vec<EpochReport>> {
        let cfg = &self.config;

        // ── Step 1: Build linguistic resources once ──────────────────────────
        let lexicon = build_lexicon(self.stopword_file.as_deref())?;

        // ── Step 2: Load the labelled corpus ─────────────────────────────────
        tracing::info!("Loading corpus from '{}'", self.corpus_path);
        let loader = TsvCorpusLoader::new(self.corpus_path.as_str());
        let samples = loader.load_all()?;
        tracing::info!("Loaded {} samples", samples.len());

        // ── Step 3 + 4: Normalise, featurise, build the dataset ──────────────
        let dataset = build_feature_dataset(&samples, &lexicon, cfg.input_dimension)?;

        // ── Step 5: Every label must fit the output dimension ────────────────
        if let Some(max) = dataset.max_label() {
            if max >= cfg.output_dimension {
                return Err(PipelineError::Configuration(format!(
                    "corpus contains label {} but output_dimension is {}",
                    max, cfg.output_dimension
                ))
                .into());
            }
        }

        // ── Step 6: Save config so `evaluate` can rebuild the pipeline ───────
        let ckpt_manager = CheckpointManager::new(self.checkpoint_dir.clone());
        ckpt_manager.save_config(cfg)?;

        // ── Step 7: Run the training loop (Layer 5) ──────────────────────────
        let trainer = Trainer::new(cfg)?;
        let (params, reports) = trainer.fit(&dataset)?;

        // ── Step 8: Persist metrics and fitted parameters ────────────────────
        let metrics_logger = MetricsLogger::new(self.checkpoint_dir.clone())?;
        let mut best_val_loss = f64::INFINITY;
        for report in &reports {
            metrics_logger.log(report)?;
            if report.is_improvement(best_val_loss) {
                best_val_loss = report.val_loss;
                tracing::debug!("Epoch {} improved validation loss", report.epoch);
            }
            tracing::info!(
                "Epoch {:>3}/{} | train_loss={:.4} | val_loss={:.4}",
                report.epoch + 1,
                cfg.epochs,
                report.train_loss,
                report.val_loss,
            );
        }
        ckpt_manager.save_model(&params)?;

        Ok(reports)
    }
}

/// Build the lexicon from a stopword file when given one,
/// otherwise fall back to the built-in English set.
pub fn build_lexicon(stopword_file: Option<&str>) -> Result<Lexicon> {
    match stopword_file {
        Some(path) => Lexicon::from_stopword_file(path),
        None => Ok(Lexicon::builtin()),
    }
}

/// Run every sample through the normalise → tokenise → stem →
/// encode → pad pipeline and pair the vectors with their labels.
/// Shared with the evaluation use case so both invocations
/// featurise identically.
pub fn build_feature_dataset(
    samples: &[Sample],
    lexicon: &Lexicon,
    input_dimension: usize,
) -> Result<FeatureDataset> {
    let mut inputs = Vec::with_capacity(samples.len());
    let mut labels = Vec::with_capacity(samples.len());

    for sample in samples {
        let cleaned = normalize(&sample.text, lexicon);
        let tokens = tokenize(&cleaned);
        let encoded = transform(&tokens, lexicon);
        inputs.push(to_feature_vector(&encoded, input_dimension));
        labels.push(sample.label);
    }

    Ok(PairDataset::new(inputs, labels)?)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn test_config() -> TrainConfig {
        TrainConfig {
            batch_size: 2,
            input_dimension: 4,
            output_dimension: 2,
            learning_rate: 0.01,
            epochs: 3,
            seed: 42,
            val_fraction: 0.2,
        }
    }

    #[test]
    fn test_config_missing_field_is_a_configuration_error() {
        let err = TrainConfig::from_json(r#"{ "batch_size": 2 }"#).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::Configuration(_))
        ));
    }

    #[test]
    fn test_config_non_numeric_field_rejected() {
        let json = r#"{
            "batch_size": "two",
            "input_dimension": 4,
            "output_dimension": 2,
            "learning_rate": 0.01,
            "epochs": 3
        }"#;
        assert!(TrainConfig::from_json(json).is_err());
    }

    #[test]
    fn test_config_defaults_for_optional_fields() {
        let json = r#"{
            "batch_size": 2,
            "input_dimension": 4,
            "output_dimension": 2,
            "learning_rate": 0.01,
            "epochs": 3
        }"#;
        let cfg = TrainConfig::from_json(json).unwrap();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.val_fraction, 0.2);
    }

    #[test]
    fn test_feature_dataset_has_configured_width() {
        let lexicon = Lexicon::builtin();
        let samples = vec![
            Sample::new("The cats are running fast today!", 0),
            Sample::new("bad", 1),
        ];
        let ds = build_feature_dataset(&samples, &lexicon, 4).unwrap();
        assert_eq!(ds.len(), 2);
        for i in 0..ds.len() {
            let (vector, _) = ds.get(i).unwrap();
            assert_eq!(vector.len(), 4);
        }
    }

    /// End-to-end: train on a balanced 10-sample corpus, then
    /// evaluate the checkpoint on the same corpus.
    #[test]
    fn test_train_then_evaluate_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let ckpt_dir = dir.path().join("ckpt").to_string_lossy().to_string();

        // 5 samples per class; class 1 texts are wordier so the
        // length encoding actually separates them.
        let mut corpus = String::new();
        for i in 0..5 {
            corpus.push_str(&format!("0\tok fine item {i}\n"));
            corpus.push_str(&format!(
                "1\tabsolutely wonderful marvellous experience number {i}\n"
            ));
        }
        let corpus_path = dir.path().join("corpus.tsv");
        let mut f = std::fs::File::create(&corpus_path).unwrap();
        write!(f, "{corpus}").unwrap();

        let use_case = TrainUseCase::new(
            test_config(),
            corpus_path.to_string_lossy().to_string(),
            ckpt_dir.clone(),
            None,
        );
        let reports = use_case.execute().unwrap();

        assert_eq!(reports.len(), 3);
        assert_eq!(
            reports.iter().map(|r| r.epoch).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );

        // Evaluate the saved checkpoint on the same 10 samples
        let eval = crate::application::evaluate_use_case::EvaluateUseCase::new(
            corpus_path.to_string_lossy().to_string(),
            ckpt_dir,
            None,
        );
        let report = eval.execute().unwrap();

        let matrix_sum: usize = report.confusion.iter().flatten().sum();
        assert_eq!(matrix_sum, 10);
        assert!((0.0..=1.0).contains(&report.accuracy));
    }

    #[test]
    fn test_out_of_range_label_is_rejected_before_training() {
        let dir = tempfile::tempdir().unwrap();
        let corpus_path = dir.path().join("corpus.tsv");
        // Label 5 does not fit output_dimension = 2
        std::fs::write(&corpus_path, "0\tgood\n5\tbad\n").unwrap();

        let use_case = TrainUseCase::new(
            test_config(),
            corpus_path.to_string_lossy().to_string(),
            dir.path().join("ckpt").to_string_lossy().to_string(),
            None,
        );
        let err = use_case.execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::Configuration(_))
        ));
    }
}
