// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Full train + validation loop over the linear model:
//
//   1. Seeded train/validation split (default 20% held out)
//   2. For each epoch:
//      a. Reshuffle the training partition (fresh order every
//         epoch — a globally fixed order would bias updates
//         towards whatever batch happens to come last)
//      b. Walk it in mini-batches of batch_size (the final
//         batch may be smaller)
//      c. Per batch: forward pass, cross-entropy loss,
//         batch-averaged gradient, SGD update
//      d. Validation pass over the held-out partition with
//         NO parameter updates, accumulating mean loss
//   3. Return the fitted parameters + one EpochReport per epoch
//
// The trainer performs no I/O. Everything a caller might want
// to print, log to CSV or persist comes back as return values.
//
// The trainer's lifecycle is encoded in ownership:
//   Trainer::new  → parameters initialised   (Initialized)
//   fit(self)     → consumes the trainer     (Training/Validating)
//   return value  → frozen ModelParameters   (Done)
// A finished trainer cannot be refit because it no longer exists,
// and the returned parameters can only be mutated by whoever
// owns them next.
//
// Reference: Bottou (2010) SGD tricks
//            Rust Book §4 (Ownership)

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::application::train_use_case::TrainConfig;
use crate::data::dataset::FeatureDataset;
use crate::data::splitter::split_train_val;
use crate::domain::error::PipelineError;
use crate::ml::model::{softmax, ModelParameters};

/// What one epoch looked like: the loss of the final training
/// batch and the mean loss over the validation partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochReport {
    /// 0-based epoch index
    pub epoch: usize,

    /// Cross-entropy loss of the LAST training batch of the epoch
    pub train_loss: f64,

    /// Mean cross-entropy loss over the validation partition
    pub val_loss: f64,
}

impl EpochReport {
    /// Did this epoch improve on the previous best validation loss?
    pub fn is_improvement(&self, best_val_loss: f64) -> bool {
        self.val_loss < best_val_loss
    }
}

/// Owns the model parameters and optimizer settings for one
/// training run.
#[derive(Debug)]
pub struct Trainer {
    params: ModelParameters,
    batch_size: usize,
    epochs: usize,
    learning_rate: f64,
    val_fraction: f64,
    rng: ChaCha8Rng,
}

impl Trainer {
    /// Validate the configuration and initialise parameters.
    /// Fails with InvalidDimension for zero-sized dimensions and
    /// Configuration for a degenerate batch size / epoch count /
    /// learning rate — all before any training step runs.
    pub fn new(config: &TrainConfig) -> Result<Self, PipelineError> {
        if config.batch_size == 0 {
            return Err(PipelineError::Configuration(
                "batch_size must be >= 1".into(),
            ));
        }
        if config.epochs == 0 {
            return Err(PipelineError::Configuration("epochs must be >= 1".into()));
        }
        if !(config.learning_rate.is_finite() && config.learning_rate > 0.0) {
            return Err(PipelineError::Configuration(format!(
                "learning_rate must be a positive finite number, got {}",
                config.learning_rate
            )));
        }
        if !(0.0..1.0).contains(&config.val_fraction) {
            return Err(PipelineError::Configuration(format!(
                "val_fraction must lie in [0, 1), got {}",
                config.val_fraction
            )));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let params =
            ModelParameters::init(config.input_dimension, config.output_dimension, &mut rng)?;

        Ok(Self {
            params,
            batch_size: config.batch_size,
            epochs: config.epochs,
            learning_rate: config.learning_rate,
            val_fraction: config.val_fraction,
            rng,
        })
    }

    /// Run the full training loop. Consumes the trainer and
    /// returns the frozen parameters plus one report per epoch,
    /// in epoch order.
    ///
    /// Every label in `dataset` must lie in [0, output_dimension).
    /// Pipeline assembly enforces this before the trainer is ever
    /// constructed; a caller wiring the trainer up directly must
    /// uphold it, or the loss indexing will panic.
    pub fn fit(
        mut self,
        dataset: &FeatureDataset,
    ) -> Result<(ModelParameters, Vec<EpochReport>), PipelineError> {
        // ── Train/validation split ────────────────────────────────────────────
        // Split INDICES rather than cloning feature vectors —
        // the dataset guarantees stable positional access.
        let indices: Vec<usize> = (0..dataset.len()).collect();
        let (mut train_idx, val_idx) =
            split_train_val(indices, self.val_fraction, &mut self.rng)?;

        tracing::info!(
            "Training on {} samples, validating on {} ({} epochs, batch_size={})",
            train_idx.len(),
            val_idx.len(),
            self.epochs,
            self.batch_size,
        );

        let mut reports = Vec::with_capacity(self.epochs);

        // ── Epoch loop ────────────────────────────────────────────────────────
        for epoch in 0..self.epochs {
            // Fresh order every epoch; the shared RNG keeps the
            // whole sequence of orders deterministic per seed.
            train_idx.shuffle(&mut self.rng);

            // ── Training phase ────────────────────────────────────────────────
            let mut last_batch_loss = 0.0;
            for batch in train_idx.chunks(self.batch_size) {
                last_batch_loss = self.step(dataset, batch)?;
            }

            // ── Validation phase — parameters frozen ──────────────────────────
            let mut val_loss_sum = 0.0;
            for &i in &val_idx {
                let (x, label) = dataset.get(i)?;
                val_loss_sum += self.params.loss(x, label);
            }
            let val_loss = val_loss_sum / val_idx.len() as f64;

            tracing::debug!(
                "Epoch {:>3}/{} | train_loss={:.4} | val_loss={:.4}",
                epoch + 1,
                self.epochs,
                last_batch_loss,
                val_loss,
            );

            reports.push(EpochReport {
                epoch,
                train_loss: last_batch_loss,
                val_loss,
            });
        }

        Ok((self.params, reports))
    }

    /// One gradient-descent step over a single mini-batch.
    /// Returns the mean cross-entropy loss of the batch.
    ///
    /// Per sample: p = softmax(Wx + b), dL/dlogits = p - onehot,
    /// accumulated over the batch and averaged before the update
    /// so the step size is independent of batch size.
    fn step(&mut self, dataset: &FeatureDataset, batch: &[usize]) -> Result<f64, PipelineError> {
        let output_dim = self.params.output_dim();
        let input_dim = self.params.input_dim();

        let mut grad_w = vec![vec![0.0; input_dim]; output_dim];
        let mut grad_b = vec![0.0; output_dim];
        let mut loss_sum = 0.0;

        for &i in batch {
            let (x, label) = dataset.get(i)?;
            let probs = softmax(&self.params.forward(x));
            loss_sum += -probs[label].max(1e-12).ln();

            for class in 0..output_dim {
                let delta = probs[class] - if class == label { 1.0 } else { 0.0 };
                for (g, xi) in grad_w[class].iter_mut().zip(x) {
                    *g += delta * xi;
                }
                grad_b[class] += delta;
            }
        }

        let scale = self.learning_rate / batch.len() as f64;
        for class in 0..output_dim {
            for (w, g) in self.params.weights[class].iter_mut().zip(&grad_w[class]) {
                *w -= scale * g;
            }
            self.params.bias[class] -= scale * grad_b[class];
        }

        Ok(loss_sum / batch.len() as f64)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::PairDataset;

    fn config() -> TrainConfig {
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

    /// 10 linearly separable samples, 5 per class: class 1 has
    /// uniformly larger feature values than class 0.
    fn balanced_dataset() -> FeatureDataset {
        let mut inputs = Vec::new();
        let mut labels = Vec::new();
        for i in 0..5 {
            let v = i as f64;
            inputs.push(vec![v, v + 1.0, v, v + 1.0]);
            labels.push(0);
            inputs.push(vec![v + 6.0, v + 7.0, v + 6.0, v + 7.0]);
            labels.push(1);
        }
        PairDataset::new(inputs, labels).unwrap()
    }

    #[test]
    fn test_one_report_per_epoch_with_zero_based_indices() {
        let trainer = Trainer::new(&config()).unwrap();
        let (_, reports) = trainer.fit(&balanced_dataset()).unwrap();

        assert_eq!(reports.len(), 3);
        let indices: Vec<usize> = reports.iter().map(|r| r.epoch).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(reports.iter().all(|r| r.train_loss.is_finite() && r.val_loss.is_finite()));
    }

    #[test]
    fn test_training_is_deterministic_given_a_seed() {
        let (params_a, reports_a) = Trainer::new(&config()).unwrap().fit(&balanced_dataset()).unwrap();
        let (params_b, reports_b) = Trainer::new(&config()).unwrap().fit(&balanced_dataset()).unwrap();

        assert_eq!(reports_a, reports_b);
        assert_eq!(params_a.weights, params_b.weights);
        assert_eq!(params_a.bias, params_b.bias);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut other = config();
        other.seed = 7;

        let (_, reports_a) = Trainer::new(&config()).unwrap().fit(&balanced_dataset()).unwrap();
        let (_, reports_b) = Trainer::new(&other).unwrap().fit(&balanced_dataset()).unwrap();
        assert_ne!(reports_a, reports_b);
    }

    #[test]
    fn test_zero_input_dimension_rejected() {
        let mut cfg = config();
        cfg.input_dimension = 0;
        let err = Trainer::new(&cfg).unwrap_err();
        assert_eq!(err, PipelineError::InvalidDimension { input: 0, output: 2 });
    }

    #[test]
    fn test_degenerate_config_rejected() {
        let mut cfg = config();
        cfg.batch_size = 0;
        assert!(matches!(
            Trainer::new(&cfg).unwrap_err(),
            PipelineError::Configuration(_)
        ));

        let mut cfg = config();
        cfg.learning_rate = -0.5;
        assert!(matches!(
            Trainer::new(&cfg).unwrap_err(),
            PipelineError::Configuration(_)
        ));
    }

    #[test]
    fn test_tiny_dataset_is_insufficient() {
        let ds = PairDataset::new(vec![vec![1.0, 0.0, 0.0, 0.0]], vec![0]).unwrap();
        let err = Trainer::new(&config()).unwrap().fit(&ds).unwrap_err();
        assert_eq!(err, PipelineError::InsufficientData { total: 1 });
    }

    #[test]
    fn test_loss_decreases_on_separable_data() {
        let mut cfg = config();
        cfg.epochs = 50;
        let (_, reports) = Trainer::new(&cfg).unwrap().fit(&balanced_dataset()).unwrap();

        let first = reports.first().unwrap().val_loss;
        let last = reports.last().unwrap().val_loss;
        assert!(
            last < first,
            "validation loss should drop on separable data: {first} -> {last}"
        );
    }
}
