// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust types that describe a split run:
//
//   split.rs  — SplitRatios, Subset, Partition, SplitReport
//   error.rs  — SplitError, the typed failures of a run
//   traits.rs — RecordSource, the seam between the use case
//               and whatever enumerates record files
//
// Rules for this layer:
//   - NO file I/O
//   - NO random number generation
//   - Only plain structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// Ratios, subsets and the partition result
pub mod split;

// Typed errors shared by the data and infra layers
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
