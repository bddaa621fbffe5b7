use std::fmt;
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

use crate::config::{GO_COMMAND, GO_RUN_FLAG, GO_TEST_ARGS};
use crate::error::RunError;

/// `go test -v <target> -run <selector> [extra args]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoTestCommand {
    go: String,
    target: String,
    selector: String,
    extra_args: Vec<String>,
}

impl GoTestCommand {
    pub fn new(target: impl Into<String>, selector: impl Into<String>) -> Self {
        Self {
            go: GO_COMMAND.to_string(),
            target: target.into(),
            selector: selector.into(),
            extra_args: Vec::new(),
        }
    }

    pub fn with_go(mut self, go: impl Into<String>) -> Self {
        self.go = go.into();
        self
    }

    pub fn with_extra_args(mut self, extra_args: Vec<String>) -> Self {
        self.extra_args = extra_args;
        self
    }

    pub fn program(&self) -> &str {
        &self.go
    }

    pub fn args(&self) -> Vec<String> {
        let mut args: Vec<String> = GO_TEST_ARGS.iter().map(|s| s.to_string()).collect();
        args.push(self.target.clone());
        args.push(GO_RUN_FLAG.to_string());
        args.push(self.selector.clone());
        args.extend(self.extra_args.iter().cloned());
        args
    }

    /// Runs with stdout and stderr attached to the terminal.
    pub fn run(&self) -> Result<ExitStatus, RunError> {
        debug!(command = %self, "running go test");
        let status = Command::new(&self.go)
            .args(self.args())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| RunError::launch(&self.go, e))?;
        debug!(%status, "go test finished");
        Ok(status)
    }
}

impl fmt::Display for GoTestCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.go, self.args().join(" "))
    }
}
