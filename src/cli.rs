use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::config::{DEFAULT_FINDER, FINDER_ENV, GO_COMMAND, GO_ENV, TARGET_SUFFIX};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "gotest-picker")]
#[command(about = "Pick a Go test or subtest with a fuzzy finder and run it", long_about = None)]
pub struct Args {
    /// Package pattern to search, e.g. ./pkg/...
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Print discovered tests instead of launching the finder
    #[arg(short, long)]
    pub list: bool,

    /// Output format for --list (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Fuzzy finder command line
    #[arg(long, value_name = "CMD", env = FINDER_ENV, default_value = DEFAULT_FINDER)]
    pub finder: String,

    /// Go binary used to run the selected test
    #[arg(long, value_name = "BIN", env = GO_ENV, default_value = GO_COMMAND)]
    pub go: String,

    /// Print the go test command without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Fail if any test file cannot be read instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Extra arguments passed through to go test
    #[arg(last = true, value_name = "GO_TEST_ARGS")]
    pub go_args: Vec<String>,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        let root = target_root(&self.target)?;
        validate_dir(&root)
    }

    /// Directory to walk for the validated target.
    pub fn root(&self) -> Result<PathBuf> {
        target_root(&self.target)
    }
}

/// `./pkg/...` → `./pkg/`
pub fn target_root(target: &str) -> Result<PathBuf> {
    if !target.ends_with(TARGET_SUFFIX) {
        anyhow::bail!("Target must end in {TARGET_SUFFIX} (e.g. ./pkg/...): {target}");
    }
    let root = target.strip_suffix("...").unwrap_or(target);
    Ok(PathBuf::from(root))
}

pub fn validate_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }
    if !path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", path.display());
    }
    std::fs::read_dir(path)
        .with_context(|| format!("Cannot read directory: {}", path.display()))?;
    Ok(())
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}
