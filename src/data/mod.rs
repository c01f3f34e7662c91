// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from raw labelled text all
// the way to fixed-width numeric feature vectors.
//
// The pipeline flows in this order:
//
//   corpus file (label<TAB>text per line)
//       │
//       ▼
//   TsvCorpusLoader   → reads the file, parses Samples
//       │
//       ▼
//   Normalizer        → strips punctuation/digits, lowercases,
//       │               removes stopwords
//       ▼
//   Features          → stems tokens, encodes each as a number,
//       │               pads/truncates to the input dimension
//       ▼
//   PairDataset       → indexable (feature vector, label) pairs
//       │
//       ▼
//   Splitter          → seeded train/validation partition
//       │
//       ▼
//   Trainer           → mini-batch gradient descent (Layer 5)
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Loads labelled samples from a tab-separated corpus file
pub mod loader;

/// Cleans and tokenises raw text (stopword removal, lowercasing)
pub mod normalizer;

/// Stems tokens and encodes them as fixed-width numeric vectors
pub mod features;

/// Indexable container pairing inputs with integer labels
pub mod dataset;

/// Shuffles and splits data into train/validation sets
pub mod splitter;
