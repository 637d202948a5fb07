// ============================================================
// Layer 5 — Record Copier
// ============================================================
// Copies record files into a subset directory.
//
//   source/seg_3.tfrecord  →  destination/train/seg_3.tfrecord
//
// Files are copied unchanged and keep their base name. An
// existing file at the target path is overwritten. The first
// failure stops the copy; files already copied stay in place,
// and re-running the whole split is the recovery path.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::error::SplitError;

/// Copy every file in `files` into `dest_dir`. Returns the number copied.
pub fn copy_records(files: &[PathBuf], dest_dir: &Path) -> Result<usize, SplitError> {
    for src in files {
        let name = src
            .file_name()
            .ok_or_else(|| SplitError::MissingFileName(src.clone()))?;
        let dst = dest_dir.join(name);

        let bytes = fs::copy(src, &dst).map_err(|source| SplitError::Copy {
            from: src.clone(),
            to:   dst.clone(),
            source,
        })?;

        tracing::debug!("Copied '{}' → '{}' ({} bytes)", src.display(), dst.display(), bytes);
    }

    Ok(files.len())
}
