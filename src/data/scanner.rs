// ============================================================
// Layer 4 — Record Scanner
// ============================================================
// Lists the record files that make up the file set.
//
// A file is a record when:
//   - it is a regular file (sub-directories are ignored)
//   - its extension equals the configured one (e.g. "tfrecord")
//   - its name does not start with '.', the same files a shell
//     glob like `*.tfrecord` would match
//
// The result is sorted so that the seeded shuffle downstream
// sees the same input order on every run. read_dir() order is
// filesystem dependent and must never leak into the split.
//
// A missing source is an error, not an empty file set.
//
// Reference: Rust Book §9 (Error Handling)
//            std::fs::read_dir documentation

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use crate::domain::error::SplitError;
use crate::domain::traits::RecordSource;

/// Lists `*.<extension>` files in a directory.
/// Implements the RecordSource trait from Layer 3.
pub struct RecordScanner {
    /// Directory to scan (not recursive)
    dir: PathBuf,

    /// Extension without the leading dot, e.g. "tfrecord"
    extension: String,
}

impl RecordScanner {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir:       dir.into(),
            extension: extension.into(),
        }
    }

    // Compared as OsStr so non-UTF-8 file names are still records
    fn is_record(&self, path: &Path) -> bool {
        let visible = path
            .file_name()
            .map_or(false, |n| !n.as_encoded_bytes().starts_with(b"."));

        visible
            && path.is_file()
            && path.extension() == Some(OsStr::new(&self.extension))
    }
}

impl RecordSource for RecordScanner {
    fn list_records(&self) -> Result<Vec<PathBuf>, SplitError> {
        if !self.dir.exists() {
            return Err(SplitError::SourceMissing(self.dir.clone()));
        }
        if !self.dir.is_dir() {
            return Err(SplitError::SourceNotDirectory(self.dir.clone()));
        }

        let unreadable = |source| SplitError::SourceUnreadable {
            path: self.dir.clone(),
            source,
        };

        let mut records = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(unreadable)? {
            let path = entry.map_err(unreadable)?.path();
            if self.is_record(&path) {
                records.push(path);
            }
        }

        records.sort();

        tracing::debug!(
            "Found {} '.{}' files in '{}'",
            records.len(),
            self.extension,
            self.dir.display()
        );
        Ok(records)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), name.as_bytes()).unwrap();
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_lists_only_matching_files_sorted() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "seg_2.tfrecord");
        touch(tmp.path(), "seg_0.tfrecord");
        touch(tmp.path(), "seg_1.tfrecord");
        touch(tmp.path(), "notes.txt");
        touch(tmp.path(), "seg_3.tfrecord.bak");

        let records = RecordScanner::new(tmp.path(), "tfrecord").list_records().unwrap();
        assert_eq!(names(&records), ["seg_0.tfrecord", "seg_1.tfrecord", "seg_2.tfrecord"]);
    }

    #[test]
    fn test_skips_hidden_files_and_directories() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), ".partial.tfrecord");
        touch(tmp.path(), "seg_0.tfrecord");
        fs::create_dir(tmp.path().join("nested.tfrecord")).unwrap();

        let records = RecordScanner::new(tmp.path(), "tfrecord").list_records().unwrap();
        assert_eq!(names(&records), ["seg_0.tfrecord"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_names_are_listed() {
        use std::os::unix::ffi::OsStrExt;

        let tmp = TempDir::new().unwrap();
        let odd = tmp.path().join(OsStr::from_bytes(b"seg_\xff.tfrecord"));
        fs::write(&odd, b"x").unwrap();
        touch(tmp.path(), "seg_0.tfrecord");

        let records = RecordScanner::new(tmp.path(), "tfrecord").list_records().unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.contains(&odd));
    }

    #[test]
    fn test_empty_directory_yields_empty_set() {
        let tmp = TempDir::new().unwrap();
        let records = RecordScanner::new(tmp.path(), "tfrecord").list_records().unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("does_not_exist");

        let err = RecordScanner::new(&missing, "tfrecord").list_records().unwrap_err();
        assert!(matches!(err, SplitError::SourceMissing(p) if p == missing));
    }

    #[test]
    fn test_file_as_source_is_an_error() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "seg_0.tfrecord");
        let file = tmp.path().join("seg_0.tfrecord");

        let err = RecordScanner::new(&file, "tfrecord").list_records().unwrap_err();
        assert!(matches!(err, SplitError::SourceNotDirectory(_)));
    }
}
