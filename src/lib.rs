// ============================================================
// tfrecord-splits
// ============================================================
// Splits a directory of .tfrecord files into train/ val/ test/
// folders with a seeded, reproducible 70/20/10 partition.
//
// Layers (each depends only on the ones below it):
//
//   cli          — Layer 1: argument parsing
//   application  — Layer 2: the split workflow
//   domain       — Layer 3: ratios, partition, errors, traits
//   data         — Layer 4: listing and splitting records
//   infra        — Layer 5: destination directories and copies

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;
