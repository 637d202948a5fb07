// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The use case asks a RecordSource for the file set instead of
// reading the directory itself, so tests and future sources
// (e.g. a manifest file listing shards) plug in without touching
// the orchestration code.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use std::path::PathBuf;

use crate::domain::error::SplitError;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can list the record files to be split.
///
/// Implementations:
///   - RecordScanner → lists `*.<ext>` files in a directory
pub trait RecordSource {
    /// Return every record path, in a deterministic order.
    /// The same unchanged source must always yield the same order,
    /// otherwise a seeded split is not reproducible.
    fn list_records(&self) -> Result<Vec<PathBuf>, SplitError>;
}
