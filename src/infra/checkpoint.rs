// ============================================================
// Layer 6 — Checkpoint Manager
// ============================================================
// Saves and restores the fitted model as plain JSON files.
//
// What gets saved per run:
//   1. model.json        — the fitted weight matrix and bias
//   2. train_config.json — the configuration used to train
//
// Why save the config alongside the weights?
//   When loading for evaluation, the feature pipeline must
//   rebuild vectors of exactly input_dimension width. Without
//   the config, a corpus featurised at the wrong width would
//   silently misalign with the weight matrix.
//
// JSON is deliberate here: the parameters of a linear baseline
// are a few dozen floats, and being able to open the file and
// read the weights beats any binary format at this scale.
//
// File naming convention:
//   checkpoints/
//     model.json         ← fitted parameters
//     train_config.json  ← training hyperparameters
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::application::train_use_case::TrainConfig;
use crate::domain::traits::Persistable;
use crate::ml::model::ModelParameters;

impl Persistable for ModelParameters {
    fn save(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Cannot write model parameters to '{path}'"))?;
        Ok(())
    }

    fn load(path: &str) -> Result<Self> {
        let json = fs::read_to_string(path).with_context(|| {
            format!("Cannot read model parameters from '{path}'. Have you trained first?")
        })?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// Manages saving and loading of one run's artifacts.
/// All files are stored in the configured directory.
pub struct CheckpointManager {
    /// Path to the directory where checkpoints are stored
    dir: PathBuf,
}

impl CheckpointManager {
    /// Create a new CheckpointManager.
    /// Creates the directory if it doesn't already exist.
    pub fn new(dir: impl Into<String>) -> Self {
        let dir = PathBuf::from(dir.into());
        fs::create_dir_all(&dir).ok();
        Self { dir }
    }

    /// Save the fitted parameters to {dir}/model.json.
    pub fn save_model(&self, params: &ModelParameters) -> Result<()> {
        let path = self.dir.join("model.json");
        params.save(&path.to_string_lossy())?;
        tracing::debug!("Saved model parameters to '{}'", path.display());
        Ok(())
    }

    /// Load the fitted parameters from {dir}/model.json.
    pub fn load_model(&self) -> Result<ModelParameters> {
        let path = self.dir.join("model.json");
        ModelParameters::load(&path.to_string_lossy())
    }

    /// Save the training configuration to JSON.
    /// Called before training so evaluation can rebuild the
    /// feature pipeline with the same dimensions.
    pub fn save_config(&self, cfg: &TrainConfig) -> Result<()> {
        let path = self.dir.join("train_config.json");
        let json = serde_json::to_string_pretty(cfg)?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;
        tracing::debug!("Saved training config to '{}'", path.display());
        Ok(())
    }

    /// Load the training configuration from JSON.
    pub fn load_config(&self) -> Result<TrainConfig> {
        let path = self.dir.join("train_config.json");
        let json = fs::read_to_string(&path).with_context(|| {
            format!(
                "Cannot read config from '{}'. Make sure you have run 'train' before 'evaluate'.",
                path.display()
            )
        })?;
        TrainConfig::from_json(&json)
    }
}
