// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses the two
// required options with clap and hands a SplitJob to Layer 2.
//
// Example:
//   tfrecord-splits --source data/waymo/training_and_validation/ \
//                   --destination data/output/
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod args;

use anyhow::Result;
use clap::Parser;

use crate::application::split_use_case::SplitUseCase;
use args::SplitArgs;

/// Split data into training / validation / testing
#[derive(Parser, Debug)]
#[command(
    name = "tfrecord-splits",
    version,
    about = "Split data into training / validation / testing"
)]
pub struct Cli {
    #[command(flatten)]
    pub args: SplitArgs,
}

impl Cli {
    /// Convert the arguments into a job and run it.
    pub fn run(self) -> Result<()> {
        tracing::info!("Creating splits...");

        let use_case = SplitUseCase::new(self.args.into());
        let report   = use_case.execute()?;

        println!(
            "Split complete: {} train, {} val, {} test ({} files).",
            report.train, report.validation, report.test, report.total
        );
        Ok(())
    }
}
