// ============================================================
// Layer 2 — SplitUseCase
// ============================================================
// Runs one split end to end:
//
//   Step 1: List record files          (Layer 4 - data)
//   Step 2: Seeded three-way split     (Layer 4 - data)
//   Step 3: Reset train/ val/ test/    (Layer 5 - infra)
//   Step 4: Copy each subset           (Layer 5 - infra)
//
// Nothing is written until steps 1 and 2 have succeeded, and
// no file is copied until all three directories are reset. A
// source directory inside train/ val/ or test/ is refused before
// the reset, since the reset would delete it.
//
// Reference: Rust Book §9 (Error Handling with anyhow)

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::data::{scanner::RecordScanner, splitter::split_three_way};
use crate::domain::{
    split::{SplitRatios, SplitReport, Subset},
    traits::RecordSource,
};
use crate::infra::{copier::copy_records, layout::DestinationLayout};

// ─── Split Configuration ──────────────────────────────────────────────────────
// Fixed settings of a run. Not exposed on the command line; the
// defaults reproduce the 70/20/10 split with seed 1.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitConfig {
    pub ratios:    SplitRatios,
    pub seed:      u64,
    /// Record file extension without the dot
    pub extension: String,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            ratios:    SplitRatios::DEFAULT,
            seed:      1,
            extension: "tfrecord".to_string(),
        }
    }
}

/// Where to read records from, where to write the splits, and how.
#[derive(Debug, Clone)]
pub struct SplitJob {
    pub source:      PathBuf,
    pub destination: PathBuf,
    pub config:      SplitConfig,
}

// ─── SplitUseCase ─────────────────────────────────────────────────────────────
pub struct SplitUseCase {
    job: SplitJob,
}

impl SplitUseCase {
    pub fn new(job: SplitJob) -> Self {
        Self { job }
    }

    /// Split the records found in the job's source directory.
    pub fn execute(&self) -> Result<SplitReport> {
        let scanner = RecordScanner::new(&self.job.source, &self.job.config.extension);
        self.execute_with(&scanner)
    }

    /// Split the records listed by `source`.
    pub fn execute_with(&self, source: &dyn RecordSource) -> Result<SplitReport> {
        let job    = &self.job;
        let cfg    = &job.config;
        let layout = DestinationLayout::new(&job.destination);

        tracing::info!(
            "source: '{}'  destination: '{}'",
            job.source.display(),
            job.destination.display()
        );
        tracing::info!(
            "train_path '{}', val_path '{}', test_path '{}'",
            layout.dir(Subset::Train).display(),
            layout.dir(Subset::Validation).display(),
            layout.dir(Subset::Test).display(),
        );

        // ── Step 1: List record files ─────────────────────────────────────────
        let files = source
            .list_records()
            .with_context(|| format!("Cannot list records in '{}'", job.source.display()))?;
        tracing::info!("total files {}", files.len());

        // ── Step 2: Seeded three-way split ────────────────────────────────────
        let partition = split_three_way(files, &cfg.ratios, cfg.seed);
        let report    = SplitReport::from(&partition);

        for subset in Subset::ALL {
            tracing::info!(
                "{}: {} files (expected {:.1})",
                subset,
                report.count(subset),
                report.total as f64 * cfg.ratios.of(subset),
            );
        }

        // ── Step 3: Reset destination directories ─────────────────────────────
        layout.guard_source(&job.source)?;
        layout
            .prepare()
            .with_context(|| format!("Cannot prepare destination '{}'", layout.root().display()))?;

        // ── Step 4: Copy each subset ──────────────────────────────────────────
        for subset in [Subset::Train, Subset::Test, Subset::Validation] {
            let dir = layout.dir(subset);
            let copied = copy_records(partition.get(subset), &dir)
                .with_context(|| format!("Cannot copy {subset} split into '{}'", dir.display()))?;
            tracing::debug!("Copied {} files into '{}'", copied, dir.display());
        }

        tracing::info!(
            "Split {} files: {} train, {} test, {} val",
            report.total,
            report.train,
            report.test,
            report.validation
        );
        Ok(report)
    }
}
