// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers into one split run:
//
//   enumerate → partition → prepare destinations → copy
//
// Rules for this layer:
//   - No shuffling or slicing logic here (that's Layer 4)
//   - No direct fs calls here (Layer 4 reads, Layer 5 writes)
//   - No argument parsing here (that's Layer 1)
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The split workflow and its configuration
pub mod split_use_case;
