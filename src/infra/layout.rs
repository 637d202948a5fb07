// ============================================================
// Layer 5 — Destination Layout
// ============================================================
// Owns the three subset directories under the destination root:
//
//   destination/
//     train/   ← Subset::Train
//     val/     ← Subset::Validation
//     test/    ← Subset::Test
//
// Resetting a subset directory is all-or-nothing: it is removed
// recursively (stale files from an earlier run included) and then
// created again. Any failure is returned, never ignored, so a run
// can never mix files from two different partitions.
//
// Reference: std::fs::remove_dir_all / create_dir_all documentation

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use crate::domain::error::SplitError;
use crate::domain::split::Subset;

/// The destination root and the subset directories below it.
#[derive(Debug, Clone)]
pub struct DestinationLayout {
    root: PathBuf,
}

impl DestinationLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory that receives the files of `subset`.
    pub fn dir(&self, subset: Subset) -> PathBuf {
        self.root.join(subset.dir_name())
    }

    /// Reset every subset directory to an empty one.
    ///
    /// Stops at the first failure; later directories are left untouched.
    pub fn prepare(&self) -> Result<(), SplitError> {
        for subset in Subset::ALL {
            self.reset(subset)?;
        }
        Ok(())
    }

    /// Refuse to run when `source` is a subset directory, or lies inside
    /// one, since `prepare()` would delete the records before they are
    /// copied. Paths are compared after resolving symlinks and `..`.
    /// A source or subset directory that does not exist cannot overlap.
    pub fn guard_source(&self, source: &Path) -> Result<(), SplitError> {
        let Ok(source_dir) = fs::canonicalize(source) else {
            return Ok(());
        };

        for subset in Subset::ALL {
            let Ok(subset_dir) = fs::canonicalize(self.dir(subset)) else {
                continue;
            };
            if source_dir.starts_with(&subset_dir) {
                return Err(SplitError::SourceInsideDestination { source_dir, subset_dir });
            }
        }
        Ok(())
    }

    /// Remove `subset`'s directory if present, then create it (and any
    /// missing parents) empty.
    pub fn reset(&self, subset: Subset) -> Result<(), SplitError> {
        let path = self.dir(subset);

        // symlink_metadata so a dangling link is seen too; remove_dir_all unlinks it
        match fs::symlink_metadata(&path) {
            Ok(_) => {
                fs::remove_dir_all(&path).map_err(|source| SplitError::DestinationReset {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!("Removed previous '{}'", path.display());
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(source) => return Err(SplitError::DestinationReset { path, source }),
        }

        fs::create_dir_all(&path)
            .map_err(|source| SplitError::DestinationCreate { path: path.clone(), source })?;

        tracing::debug!("Prepared empty '{}'", path.display());
        Ok(())
    }
}
