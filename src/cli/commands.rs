// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `train` and `evaluate`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, f64, etc.)
//
// Hyperparameters come from either place:
//   - a JSON config file via --config (takes precedence;
//     the file carries the five required numeric fields)
//   - individual --flags with defaults, for quick runs
//
// Reference: Rust Book §12 (Building a CLI Program)

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::application::train_use_case::TrainConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train the classifier on a labelled corpus
    Train(TrainArgs),

    /// Evaluate a trained checkpoint on a labelled corpus
    Evaluate(EvaluateArgs),
}

/// All arguments for the `train` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Path to the training corpus (one `<label><TAB><text>` per line)
    #[arg(long, default_value = "data/train.tsv")]
    pub corpus: String,

    /// Directory to save the model checkpoint and metrics CSV
    #[arg(long, default_value = "checkpoints")]
    pub checkpoint_dir: String,

    /// JSON config file with the training hyperparameters.
    /// When given, it takes precedence over the flags below.
    #[arg(long)]
    pub config: Option<String>,

    /// Optional stopword file (one word per line); defaults to
    /// the built-in English set
    #[arg(long)]
    pub stopwords: Option<String>,

    /// Number of samples processed together in one update step
    #[arg(long, default_value_t = 8)]
    pub batch_size: usize,

    /// Fixed width of every feature vector
    #[arg(long, default_value_t = 16)]
    pub input_dimension: usize,

    /// Number of classes the model predicts over
    #[arg(long, default_value_t = 2)]
    pub output_dimension: usize,

    /// How fast the model learns — too high causes instability,
    /// too low causes slow convergence
    #[arg(long, default_value_t = 0.01)]
    pub learning_rate: f64,

    /// Number of full passes through the training partition
    #[arg(long, default_value_t = 10)]
    pub epochs: usize,

    /// RNG seed for the split, shuffling and weight init
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Fraction of the dataset held out for validation
    #[arg(long, default_value_t = 0.2)]
    pub val_fraction: f64,
}

impl TrainArgs {
    /// Resolve the effective TrainConfig: the config file when
    /// one is given, otherwise the individual flags.
    /// This is the boundary between Layer 1 and Layer 2 —
    /// the application layer never sees clap types.
    pub fn resolve_config(&self) -> Result<TrainConfig> {
        match &self.config {
            Some(path) => TrainConfig::from_file(path),
            None => Ok(TrainConfig {
                batch_size: self.batch_size,
                input_dimension: self.input_dimension,
                output_dimension: self.output_dimension,
                learning_rate: self.learning_rate,
                epochs: self.epochs,
                seed: self.seed,
                val_fraction: self.val_fraction,
            }),
        }
    }
}

/// All arguments for the `evaluate` command
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Path to the evaluation corpus (same TSV format as training)
    #[arg(long, default_value = "data/test.tsv")]
    pub corpus: String,

    /// Directory where the checkpoint was saved during training
    #[arg(long, default_value = "checkpoints")]
    pub checkpoint_dir: String,

    /// Optional stopword file — must match what training used
    #[arg(long)]
    pub stopwords: Option<String>,
}
