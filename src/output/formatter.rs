use anyhow::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::discovery::{Discovery, SkippedFile};

#[derive(Debug, Serialize)]
pub struct ListOutput<'a> {
    pub files_scanned: usize,
    pub total_tests: usize,
    pub tests: &'a [String],
    #[serde(skip_serializing_if = "no_skipped_files")]
    pub skipped: &'a [SkippedFile],
}

fn no_skipped_files(skipped: &&[SkippedFile]) -> bool {
    skipped.is_empty()
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(discovery: &Discovery, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(discovery.tests.join("\n")),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&Self::build_output(
                discovery,
            ))?),
        }
    }

    pub fn build_output(discovery: &Discovery) -> ListOutput<'_> {
        ListOutput {
            files_scanned: discovery.files_scanned,
            total_tests: discovery.test_count(),
            tests: &discovery.tests,
            skipped: &discovery.skipped,
        }
    }
}
