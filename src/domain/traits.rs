// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - TsvCorpusLoader implements CorpusSource
//   - A future SqliteLoader could also implement CorpusSource
//   - The application layer only sees CorpusSource
//     and works with both without any changes
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use anyhow::Result;
use crate::domain::sample::Sample;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Any component that can load labelled text samples from a source.
///
/// Implementations:
///   - TsvCorpusLoader → loads from a tab-separated text file
///   - (future) CsvLoader    → loads from CSV with a header row
///   - (future) SqliteLoader → loads from a local database
pub trait CorpusSource {
    /// Load every available sample from this source.
    /// The returned texts and labels are parallel by construction —
    /// one Sample carries both halves, so they can never drift
    /// out of sync the way two separate sequences could.
    fn load_all(&self) -> Result<Vec<Sample>>;
}

// ─── Persistable ──────────────────────────────────────────────────────────────
/// Any component whose state can be saved and restored from disk.
///
/// Implementations:
///   - ModelParameters → saves/loads the fitted weight matrix and bias
pub trait Persistable: Sized {
    /// Save this component's state to the given path
    fn save(&self, path: &str) -> Result<()>;

    /// Load a component's state from the given path.
    /// Returns Self so callers can use the loaded instance directly.
    fn load(path: &str) -> Result<Self>;
}
