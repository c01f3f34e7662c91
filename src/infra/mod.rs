// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles all cross-cutting concerns that don't belong in
// any specific business layer:
//
//   lexicon.rs    — Linguistic resources
//                   The stopword set and the stemmer, built
//                   once at process start and handed to the
//                   data pipeline as read-only state.
//
//   checkpoint.rs — Saving and loading fitted parameters
//                   Serialises ModelParameters and TrainConfig
//                   to JSON so a later `evaluate` invocation
//                   can rebuild exactly what was trained.
//
//   metrics.rs    — Training metrics logging
//                   Writes epoch-level losses to a CSV file
//                   for later analysis and plotting.
//
// Why is this a separate layer?
//   These concerns are used by multiple other layers but
//   don't belong to any one of them. Keeping them here:
//   - Prevents duplication across layers
//   - Makes it easy to swap implementations
//     (e.g. swap file checkpoints for S3 cloud storage)
//   - Keeps other layers focused on their core logic
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Stopword set and stemmer, loaded once per process
pub mod lexicon;

/// Model parameter and config persistence
pub mod checkpoint;

/// Training metrics CSV logger
pub mod metrics;
