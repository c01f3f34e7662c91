// ============================================================
// Layer 5 — Linear Model
// ============================================================
// The model is a single linear layer:
//
//   logits = W · x + b
//
//   W : [output_dim × input_dim]  weight matrix
//   b : [output_dim]              bias vector
//
// Parameters are plain data (Vecs of f64) and every operation
// over them is a free function or a &self method with no
// hidden state. This keeps parameter storage decoupled from
// computation: the trainer mutates a ModelParameters it owns,
// then hands a frozen copy to the evaluator, which only reads.
//
// Loss is categorical cross-entropy over softmax probabilities:
//
//   p = softmax(logits)
//   L = -ln(p[label])
//
// The softmax/cross-entropy pair has the famously clean
// gradient dL/dlogits = p - onehot(label), which is what the
// trainer exploits — no autodiff needed for one layer.
//
// Reference: Bishop (2006) §4.3.4 (Multiclass logistic regression)
//            Rust Book §5 (Structs and Methods)

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::domain::error::PipelineError;

/// Weight scale for random initialisation. Small symmetric
/// weights keep the initial softmax close to uniform.
const INIT_SCALE: f64 = 0.1;

/// Floor for probabilities inside ln() — avoids -inf loss when
/// a class probability underflows to zero.
const PROB_FLOOR: f64 = 1e-12;

/// The fitted (or in-training) parameters of the linear model.
/// Serialisable so checkpoints are a straight serde round-trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Weight matrix, row per output class: [output_dim][input_dim]
    pub weights: Vec<Vec<f64>>,

    /// Bias vector: [output_dim]
    pub bias: Vec<f64>,
}

impl ModelParameters {
    /// Initialise with small random weights and zero bias.
    /// Fails with InvalidDimension unless both dimensions are >= 1.
    pub fn init(
        input_dim: usize,
        output_dim: usize,
        rng: &mut ChaCha8Rng,
    ) -> Result<Self, PipelineError> {
        if input_dim == 0 || output_dim == 0 {
            return Err(PipelineError::InvalidDimension {
                input: input_dim,
                output: output_dim,
            });
        }

        let weights = (0..output_dim)
            .map(|_| {
                (0..input_dim)
                    .map(|_| rng.gen_range(-INIT_SCALE..INIT_SCALE))
                    .collect()
            })
            .collect();

        Ok(Self {
            weights,
            bias: vec![0.0; output_dim],
        })
    }

    pub fn input_dim(&self) -> usize {
        self.weights.first().map_or(0, Vec::len)
    }

    pub fn output_dim(&self) -> usize {
        self.bias.len()
    }

    /// Forward pass: logits = W · x + b
    pub fn forward(&self, x: &[f64]) -> Vec<f64> {
        self.weights
            .iter()
            .zip(&self.bias)
            .map(|(row, b)| row.iter().zip(x).map(|(w, xi)| w * xi).sum::<f64>() + b)
            .collect()
    }

    /// Predicted class: argmax over logits, ties broken by the
    /// LOWEST class index (strict > while scanning ascending).
    pub fn predict(&self, x: &[f64]) -> usize {
        let logits = self.forward(x);
        let mut best = 0;
        for (class, &logit) in logits.iter().enumerate() {
            if logit > logits[best] {
                best = class;
            }
        }
        best
    }

    /// Cross-entropy loss of one sample against its true label.
    pub fn loss(&self, x: &[f64], label: usize) -> f64 {
        let probs = softmax(&self.forward(x));
        -probs[label].max(PROB_FLOOR).ln()
    }
}

/// Numerically stable softmax: shift by the max logit before
/// exponentiating so large logits cannot overflow.
pub fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|&l| (l - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}
