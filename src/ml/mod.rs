// ============================================================
// Layer 5 — ML Layer
// ============================================================
// All the numeric machinery lives here, and nowhere else.
//
// What's in this layer:
//
//   model.rs     — ModelParameters (plain weight matrix + bias)
//                  and the pure functions over them:
//                  forward, softmax, cross-entropy, predict.
//                  Deliberately NOT an object with a virtual
//                  forward method — a single linear transform
//                  needs no module hierarchy, so parameter
//                  storage and computation stay decoupled.
//
//   trainer.rs   — The training loop
//                  Seeded train/validation split, per-epoch
//                  reshuffled mini-batches, batch-averaged
//                  gradient descent, per-epoch validation pass.
//
//   evaluator.rs — Read-only evaluation
//                  Runs inference over a held-out set and
//                  computes accuracy, weighted precision/
//                  recall/F1 and the confusion matrix.
//
// Neither the trainer nor the evaluator performs any I/O —
// both return structured values and leave printing, logging
// and persistence to the caller.
//
// Reference: Bishop (2006) §4.3 (Linear classification)

/// Linear model parameters and the pure math over them
pub mod model;

/// Mini-batch gradient descent training loop
pub mod trainer;

/// Metrics computation over a frozen model
pub mod evaluator;
