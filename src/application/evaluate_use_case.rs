// ============================================================
// Layer 2 — EvaluateUseCase
// ============================================================
// Orchestrates the evaluation workflow:
//
//   Step 1: Load the saved config       (Layer 6 - infra)
//   Step 2: Load the fitted parameters  (Layer 6 - infra)
//   Step 3: Build the lexicon           (Layer 6 - infra)
//   Step 4: Load the held-out corpus    (Layer 4 - data)
//   Step 5: Featurise it IDENTICALLY    (Layer 4 - data)
//   Step 6: Compute metrics             (Layer 5 - ml)
//
// Step 5 is the one that matters: the evaluation corpus must
// pass through exactly the same normalise/stem/pad pipeline at
// exactly the same input_dimension as training did, which is
// why the config is read back from the checkpoint rather than
// taken from the command line again.
//
// The use case returns the MetricsReport as a value; rendering
// it is Layer 1's job.

use anyhow::Result;

use crate::application::train_use_case::{build_feature_dataset, build_lexicon};
use crate::domain::traits::CorpusSource;
use crate::data::loader::TsvCorpusLoader;
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::evaluator::{evaluate, MetricsReport};

pub struct EvaluateUseCase {
    corpus_path: String,
    checkpoint_dir: String,
    stopword_file: Option<String>,
}

impl EvaluateUseCase {
    pub fn new(
        corpus_path: impl Into<String>,
        checkpoint_dir: impl Into<String>,
        stopword_file: Option<String>,
    ) -> Self {
        Self {
            corpus_path: corpus_path.into(),
            checkpoint_dir: checkpoint_dir.into(),
            stopword_file,
        }
    }

    /// Run inference over the corpus and compute metrics.
    pub fn execute(&self) -> Result<MetricsReport> {
        // ── Step 1 + 2: Restore what training produced ───────────────────────
        let ckpt_manager = CheckpointManager::new(self.checkpoint_dir.clone());
        let config = ckpt_manager.load_config()?;
        let params = ckpt_manager.load_model()?;
        tracing::info!(
            "Loaded model ({}x{}) from '{}'",
            config.output_dimension,
            config.input_dimension,
            self.checkpoint_dir,
        );

        // ── Step 3 + 4: Lexicon and evaluation corpus ────────────────────────
        let lexicon = build_lexicon(self.stopword_file.as_deref())?;
        let samples = TsvCorpusLoader::new(self.corpus_path.as_str()).load_all()?;
        tracing::info!("Evaluating on {} samples", samples.len());

        // ── Step 5: Same featurisation as training ───────────────────────────
        let dataset = build_feature_dataset(&samples, &lexicon, config.input_dimension)?;

        // ── Step 6: Pure metrics computation ─────────────────────────────────
        Ok(evaluate(&params, &dataset)?)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::PipelineError;

    #[test]
    fn test_empty_corpus_surfaces_empty_dataset_error() {
        let dir = tempfile::tempdir().unwrap();
        let ckpt_dir = dir.path().to_string_lossy().to_string();

        // A checkpoint exists, but the corpus has no samples
        let mgr = CheckpointManager::new(ckpt_dir.clone());
        mgr.save_config(&crate::application::train_use_case::TrainConfig {
            batch_size: 2,
            input_dimension: 4,
            output_dimension: 2,
            learning_rate: 0.01,
            epochs: 1,
            seed: 42,
            val_fraction: 0.2,
        })
        .unwrap();
        mgr.save_model(&crate::ml::model::ModelParameters {
            weights: vec![vec![0.0; 4]; 2],
            bias: vec![0.0; 2],
        })
        .unwrap();

        let corpus_path = dir.path().join("empty.tsv");
        std::fs::write(&corpus_path, "# nothing here\n").unwrap();

        let err = EvaluateUseCase::new(
            corpus_path.to_string_lossy().to_string(),
            ckpt_dir,
            None,
        )
        .execute()
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::EmptyDataset)
        ));
    }

    #[test]
    fn test_corpus_label_outside_model_classes_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let ckpt_dir = dir.path().to_string_lossy().to_string();

        let mgr = CheckpointManager::new(ckpt_dir.clone());
        mgr.save_config(&crate::application::train_use_case::TrainConfig {
            batch_size: 2,
            input_dimension: 4,
            output_dimension: 2,
            learning_rate: 0.01,
            epochs: 1,
            seed: 42,
            val_fraction: 0.2,
        })
        .unwrap();
        mgr.save_model(&crate::ml::model::ModelParameters {
            weights: vec![vec![0.0; 4]; 2],
            bias: vec![0.0; 2],
        })
        .unwrap();

        // Well-formed TSV, but label 2 has no row in a 2-class model
        let corpus_path = dir.path().join("corpus.tsv");
        std::fs::write(&corpus_path, "0\tgood item\n2\tsurprise class\n").unwrap();

        let err = EvaluateUseCase::new(
            corpus_path.to_string_lossy().to_string(),
            ckpt_dir,
            None,
        )
        .execute()
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::Configuration(_))
        ));
    }

    #[test]
    fn test_missing_checkpoint_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = EvaluateUseCase::new(
            "unused.tsv",
            dir.path().to_string_lossy().to_string(),
            None,
        )
        .execute()
        .unwrap_err();
        assert!(format!("{err:#}").contains("train"));
    }
}
