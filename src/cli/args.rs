// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// The whole user-facing surface: where the records are and
// where the train/ val/ test/ folders should go. Ratios and
// the seed are fixed in SplitConfig::default().
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::path::PathBuf;

use clap::Args;

use crate::application::split_use_case::{SplitConfig, SplitJob};

/// Arguments for a split run.
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Source data directory, contains the processed .tfrecord files
    #[arg(long)]
    pub source: PathBuf,

    /// Destination data directory, receives train/ val/ and test/
    #[arg(long)]
    pub destination: PathBuf,
}

/// The application layer never sees clap types.
impl From<SplitArgs> for SplitJob {
    fn from(a: SplitArgs) -> Self {
        SplitJob {
            source:      a.source,
            destination: a.destination,
            config:      SplitConfig::default(),
        }
    }
}
