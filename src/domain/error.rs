// ============================================================
// Layer 3 — Split Errors
// ============================================================
// Every way a split run can fail, grouped the same way the
// pipeline runs:
//
//   input errors  → the source directory is missing or unreadable
//   config errors → the split ratios do not describe a partition
//   state errors  → a destination directory cannot be reset/created
//   copy errors   → a record could not be written to its subset
//
// Partition size mismatches are NOT listed here: they are
// programming defects and abort via assert_eq! in the splitter.
//
// thiserror generates the Display and Error impls from the
// #[error(...)] attributes.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while splitting a record directory.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The source directory does not exist.
    #[error("source directory '{}' does not exist", .0.display())]
    SourceMissing(PathBuf),

    /// The source path exists but is not a directory.
    #[error("source path '{}' is not a directory", .0.display())]
    SourceNotDirectory(PathBuf),

    /// The source directory could not be listed.
    #[error("cannot read source directory '{}'", path.display())]
    SourceUnreadable {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    /// One of the ratios is negative, NaN or infinite.
    #[error("split ratio '{name}' must be a finite non-negative number, got {value}")]
    InvalidRatio { name: &'static str, value: f64 },

    /// The three ratios do not add up to 1.0.
    #[error("split ratios must sum to 1.0, got {sum}")]
    RatioSum { sum: f64 },

    /// The source directory is, or lies inside, a subset directory that
    /// would be removed before copying.
    #[error(
        "source directory '{}' is inside destination '{}', which is reset before copying",
        source_dir.display(),
        subset_dir.display()
    )]
    SourceInsideDestination {
        source_dir: PathBuf,
        subset_dir: PathBuf,
    },

    /// A pre-existing subset directory could not be removed.
    #[error("cannot reset destination '{}'", path.display())]
    DestinationReset {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    /// A subset directory could not be created.
    #[error("cannot create destination '{}'", path.display())]
    DestinationCreate {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    /// A record file has no usable file name.
    #[error("record path '{}' has no file name", .0.display())]
    MissingFileName(PathBuf),

    /// Copying a record into its subset directory failed.
    #[error("cannot copy '{}' to '{}'", from.display(), to.display())]
    Copy {
        from:   PathBuf,
        to:     PathBuf,
        #[source]
        source: io::Error,
    },
}
