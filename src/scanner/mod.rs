mod indent;
mod path;
mod patterns;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

use crate::error::IoError;
pub use indent::count_indents;
pub use path::{
    normalize_subtest_name, TestId, TestPathCursor, SEGMENT_ANCHOR, SEGMENT_SEPARATOR,
};
pub use patterns::{LineMatch, TestPatterns};

/// Extracts `-run` selectors for tests and subtests from Go test sources.
///
/// Every file gets a fresh [`TestPathCursor`], so nothing leaks between
/// files and the same input always produces the same selectors in the same
/// order.
#[derive(Debug, Clone, Default)]
pub struct TestScanner {
    patterns: TestPatterns,
}

impl TestScanner {
    pub fn new() -> Self {
        Self {
            patterns: TestPatterns::new(),
        }
    }

    pub fn with_patterns(patterns: TestPatterns) -> Self {
        Self { patterns }
    }

    /// Scans one file. Output is all-or-nothing: a read failure part way
    /// through discards whatever was already collected.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<String>, IoError> {
        trace!(path = %path.display(), "scanning file");

        let file = File::open(path).map_err(|e| IoError::read_error(path, e))?;
        let tests = self
            .scan_reader(BufReader::new(file))
            .map_err(|e| IoError::read_error(path, e))?;

        debug!(path = %path.display(), count = tests.len(), "scanned file");
        Ok(tests)
    }

    /// Lines that are not valid UTF-8 are decoded lossily rather than
    /// failing the whole file.
    pub fn scan_reader<R: BufRead>(&self, mut reader: R) -> std::io::Result<Vec<String>> {
        let mut cursor = TestPathCursor::default();
        let mut tests = Vec::new();
        let mut buf = Vec::new();
        let mut line_number = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_number += 1;

            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            if let Some(selector) = self.scan_line(&mut cursor, line, line_number) {
                tests.push(selector);
            }
        }

        Ok(tests)
    }

    pub fn scan_source(&self, source: &str) -> Vec<String> {
        let mut cursor = TestPathCursor::default();
        source
            .lines()
            .enumerate()
            .filter_map(|(idx, line)| self.scan_line(&mut cursor, line, idx + 1))
            .collect()
    }

    fn scan_line(
        &self,
        cursor: &mut TestPathCursor,
        line: &str,
        line_number: usize,
    ) -> Option<String> {
        let selector = match self.patterns.match_line(line)? {
            LineMatch::Declaration(name) => Some(cursor.enter_test(name)),
            LineMatch::Subtest(name) => {
                let selector = cursor.enter_subtest(name, count_indents(line));
                if selector.is_none() {
                    debug!(line = line_number, name, "t.Run outside of a test function, ignoring");
                }
                selector
            }
        };

        if let Some(selector) = &selector {
            trace!(line = line_number, selector = %selector, "found test");
        }
        selector
    }
}
