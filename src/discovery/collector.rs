use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::MAX_FILE_SIZE;
use crate::error::IoError;
use crate::scanner::TestScanner;

use super::walker::walk_test_files;

#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Selectors found under one root, in walk order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Discovery {
    pub files_scanned: usize,
    pub tests: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedFile>,
}

impl Discovery {
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    pub fn test_count(&self) -> usize {
        self.tests.len()
    }
}

pub struct TestCollector {
    scanner: TestScanner,
    strict: bool,
    max_file_size: u64,
}

impl TestCollector {
    pub fn new() -> Self {
        Self {
            scanner: TestScanner::new(),
            strict: false,
            max_file_size: MAX_FILE_SIZE,
        }
    }

    pub fn with_scanner(mut self, scanner: TestScanner) -> Self {
        self.scanner = scanner;
        self
    }

    /// In strict mode the first unreadable file aborts collection instead of
    /// being skipped.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    pub fn collect(&self, root: &Path) -> Result<Discovery, IoError> {
        let files = walk_test_files(root)?;
        debug!(root = %root.display(), files = files.len(), "walked test files");

        let mut discovery = Discovery::default();
        for path in files {
            match self.scan_one(&path) {
                Ok(tests) => {
                    discovery.files_scanned += 1;
                    discovery.tests.extend(tests);
                }
                Err(err) if self.strict => return Err(err),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping file");
                    discovery.skipped.push(SkippedFile {
                        path,
                        reason: err.to_string(),
                    });
                }
            }
        }

        info!(
            files = discovery.files_scanned,
            tests = discovery.test_count(),
            skipped = discovery.skipped.len(),
            "collected tests"
        );
        Ok(discovery)
    }

    fn scan_one(&self, path: &Path) -> Result<Vec<String>, IoError> {
        let metadata = fs::metadata(path).map_err(|e| IoError::read_error(path, e))?;
        if metadata.len() > self.max_file_size {
            return Err(IoError::file_too_large(
                path,
                metadata.len(),
                self.max_file_size,
            ));
        }
        self.scanner.scan_file(path)
    }
}

impl Default for TestCollector {
    fn default() -> Self {
        Self::new()
    }
}
