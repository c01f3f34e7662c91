// ============================================================
// Layer 4 — Train/Validation Splitter
// ============================================================
// Randomly shuffles samples and splits them into two sets:
//   - Training set:   used to update model weights
//   - Validation set: used to measure performance on unseen data
//
// Why do we need a validation set?
//   If we only train and test on the same data, the model
//   could memorise the answers without actually learning.
//   The validation set tells us if the model generalises
//   to data it has never seen before.
//
// Why shuffle before splitting?
//   Corpus files are often ordered (all class-0 samples before
//   all class-1 samples). Without shuffling, the validation set
//   would only contain one class. Shuffling ensures both sets
//   have a representative mix.
//
// Why a SEEDED RNG instead of thread_rng()?
//   Reproducibility. Given the same seed, two runs produce the
//   same partition and therefore the same training trajectory —
//   the property the determinism tests rely on.
//
// Split ratio: 20% held out for validation (configurable).
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom
// which is the standard unbiased shuffle algorithm.
//
// Reference: Rust Book §8 (Vectors)
//            rand / rand_chacha crate documentation

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::domain::error::PipelineError;

/// Shuffle `samples` with the caller's RNG and split into
/// (train, validation), holding out `val_fraction` of them.
///
/// The held-out count is rounded, then clamped so BOTH
/// partitions are non-empty. Fails with InsufficientData when
/// fewer than 2 samples are available — no clamping can give
/// two non-empty partitions from 0 or 1 samples.
pub fn split_train_val<T>(
    mut samples: Vec<T>,
    val_fraction: f64,
    rng: &mut ChaCha8Rng,
) -> Result<(Vec<T>, Vec<T>), PipelineError> {
    let total = samples.len();
    if total < 2 {
        return Err(PipelineError::InsufficientData { total });
    }

    // Fisher-Yates shuffle — every permutation is equally likely
    samples.shuffle(rng);

    // e.g. 10 samples * 0.2 held out = 2 → last 2 are validation.
    // Clamp to [1, total-1] so neither partition is empty.
    let val_len = ((total as f64) * val_fraction).round() as usize;
    let val_len = val_len.clamp(1, total - 1);

    // split_off(n) removes elements [n..] from the Vec and returns them
    let val = samples.split_off(total - val_len);

    tracing::debug!(
        "Dataset split: {} training, {} validation",
        samples.len(),
        val.len(),
    );

    Ok((samples, val))
}
