// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// Everything that writes to the destination filesystem:
//
//   layout.rs — DestinationLayout
//               Knows where train/ val/ test/ live under the
//               destination root and resets them to empty
//               directories before a run.
//
//   copier.rs — copy_records
//               Copies one subset's files, byte for byte, into
//               its directory under their original base names.
//
// Reference: Rust Book §9 (Error Handling)
//            std::fs documentation

/// Destination directory layout and reset
pub mod layout;

/// Record file copying
pub mod copier;
