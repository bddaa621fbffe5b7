use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use std::thread;
use tracing::debug;

use crate::error::SelectionError;

/// An external fuzzy finder such as `fzf`.
///
/// Candidates are written to its stdin one per line and the chosen line is
/// read back from its stdout. Its stderr stays attached to the terminal so
/// the interactive UI can draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finder {
    program: String,
    args: Vec<String>,
}

impl Finder {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits on whitespace, e.g. `"fzf --height 40%"`. No shell quoting.
    pub fn from_command_line(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace();
        let program = parts.next()?;
        Some(Self::with_args(program, parts))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns `Ok(None)` when the user dismissed the finder without
    /// choosing anything.
    pub fn select(&self, candidates: &[String]) -> Result<Option<String>, SelectionError> {
        if candidates.is_empty() {
            return Err(SelectionError::Empty);
        }

        debug!(finder = %self.program, candidates = candidates.len(), "launching finder");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| SelectionError::finder_launch(&self.program, e))?;

        let input = candidates.join("\n");
        let writer = child.stdin.take().map(|mut stdin| {
            thread::spawn(move || stdin.write_all(input.as_bytes()))
        });

        let output = child
            .wait_with_output()
            .map_err(|e| SelectionError::finder_launch(&self.program, e))?;

        if let Some(writer) = writer {
            // A finder may exit before reading all of its input.
            if let Ok(Err(e)) = writer.join() {
                if e.kind() != ErrorKind::BrokenPipe {
                    debug!(error = %e, "failed to write finder input");
                }
            }
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let selected = stdout.lines().map(str::trim).find(|line| !line.is_empty());

        match selected {
            None => {
                debug!(status = %output.status, "finder returned no selection");
                Ok(None)
            }
            Some(_) if !output.status.success() => Err(SelectionError::finder_failed(
                &self.program,
                output.status,
            )),
            Some(selected) => Ok(Some(selected.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<String> {
        vec!["TestA$".to_string(), "TestA$/x$".to_string()]
    }

    #[test]
    fn test_from_command_line() {
        let finder = Finder::from_command_line("fzf --height 40%").unwrap();
        assert_eq!(finder, Finder::with_args("fzf", ["--height", "40%"]));
        assert_eq!(finder.program(), "fzf");
    }

    #[test]
    fn test_from_command_line_empty() {
        assert_eq!(Finder::from_command_line("   "), None);
    }

    #[test]
    fn test_empty_candidates_fail_before_launch() {
        let finder = Finder::new("/nonexistent/finder");
        let err = finder.select(&[]).unwrap_err();
        assert!(matches!(err, SelectionError::Empty));
    }

    #[test]
    fn test_missing_finder_binary() {
        let finder = Finder::new("/nonexistent/finder");
        let err = finder.select(&candidates()).unwrap_err();
        assert!(matches!(err, SelectionError::FinderLaunch { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_selects_line_from_finder_output() {
        let finder = Finder::with_args("tail", ["-n", "1"]);
        assert_eq!(
            finder.select(&candidates()).unwrap().as_deref(),
            Some("TestA$/x$")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_finder_closing_stdin_early() {
        let finder = Finder::with_args("head", ["-n", "1"]);
        let many: Vec<String> = (0..20_000).map(|i| format!("Test{i}$")).collect();
        assert_eq!(
            finder.select(&many).unwrap().as_deref(),
            Some("Test0$")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_dismissed_finder_is_not_an_error() {
        let finder = Finder::with_args("sh", ["-c", "cat >/dev/null; exit 130"]);
        assert_eq!(finder.select(&candidates()).unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_finder_with_output() {
        let finder = Finder::with_args("sh", ["-c", "cat >/dev/null; echo picked; exit 2"]);
        let err = finder.select(&candidates()).unwrap_err();
        assert!(matches!(err, SelectionError::FinderFailed { .. }));
    }
}
