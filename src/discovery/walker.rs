use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::config::{EXCLUDED_DIRS, IGNORED_DIR_PREFIXES, TEST_FILE_SUFFIX};
use crate::error::IoError;

/// Collects every `_test.go` file under `root` in file-name order.
///
/// Skips the same directories `go test ./...` does: `testdata`, `vendor`,
/// and anything starting with `.` or `_`. The root itself is always walked.
pub fn walk_test_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !root.is_dir() {
        return Err(IoError::directory_not_found(root));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_ignored_dir(e))
    {
        let entry = entry.map_err(|e| IoError::walk_error(root, e))?;

        if entry.file_type().is_file() && is_test_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

pub fn is_test_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| {
            name.ends_with(TEST_FILE_SUFFIX) && !name.starts_with(IGNORED_DIR_PREFIXES)
        })
}

fn is_ignored_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    EXCLUDED_DIRS.contains(&name.as_ref()) || name.starts_with(IGNORED_DIR_PREFIXES)
}
