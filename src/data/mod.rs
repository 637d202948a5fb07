// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything that happens to the file set before any
// destination directory is touched:
//
//   source directory
//       │
//       ▼
//   RecordScanner     → lists *.tfrecord files in lexical order
//       │
//       ▼
//   split_three_way   → seeded shuffle, cut into train/test/val
//
// Reference: Rust Book §8 (Vectors)
//            Rust Book §12 (I/O and File Handling)

/// Lists record files in a source directory
pub mod scanner;

/// Shuffles and splits records into train/test/validation sets
pub mod splitter;
