use std::path::Path;
use std::process::ExitStatus;
use tracing::info;

use crate::discovery::{Discovery, TestCollector};
use crate::error::Result;
use crate::runner::GoTestCommand;
use crate::select::Finder;

/// What happened after the finder closed.
#[derive(Debug)]
pub enum Outcome {
    /// The user dismissed the finder.
    Cancelled,
    /// Only printed, `--dry-run`.
    Printed(GoTestCommand),
    Ran(GoTestCommand, ExitStatus),
}

pub fn discover(root: &Path, strict: bool) -> Result<Discovery> {
    Ok(TestCollector::new().strict(strict).collect(root)?)
}

/// Lets the user pick one of `tests` and runs it.
///
/// `build` turns the chosen selector into the command to run.
pub fn pick_and_run<F>(
    tests: &[String],
    finder: &Finder,
    dry_run: bool,
    build: F,
) -> Result<Outcome>
where
    F: FnOnce(String) -> GoTestCommand,
{
    let Some(selected) = finder.select(tests)? else {
        info!("no test selected");
        return Ok(Outcome::Cancelled);
    };

    let command = build(selected);
    eprintln!("{command}");

    if dry_run {
        return Ok(Outcome::Printed(command));
    }

    let status = command.run()?;
    Ok(Outcome::Ran(command, status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, SelectionError};

    #[test]
    fn test_no_tests_is_an_error() {
        let finder = Finder::new("fzf");
        let err = pick_and_run(&[], &finder, true, |s| GoTestCommand::new("./...", s))
            .unwrap_err();
        assert!(matches!(err, Error::Selection(SelectionError::Empty)));
    }

    #[cfg(unix)]
    #[test]
    fn test_dry_run_prints_selected_command() {
        let finder = Finder::with_args("head", ["-n", "1"]);
        let tests = vec!["TestA$".to_string(), "TestB$".to_string()];
        let outcome =
            pick_and_run(&tests, &finder, true, |s| GoTestCommand::new("./...", s)).unwrap();
        match outcome {
            Outcome::Printed(command) => {
                assert_eq!(command.to_string(), "go test -v ./... -run TestA$")
            }
            other => panic!("expected dry run, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_cancelled_selection() {
        let finder = Finder::new("true");
        let tests = vec!["TestA$".to_string()];
        let outcome =
            pick_and_run(&tests, &finder, false, |s| GoTestCommand::new("./...", s)).unwrap();
        assert!(matches!(outcome, Outcome::Cancelled));
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_selected_command() {
        let finder = Finder::with_args("head", ["-n", "1"]);
        let tests = vec!["TestA$".to_string()];
        let outcome = pick_and_run(&tests, &finder, false, |s| {
            GoTestCommand::new("./...", s).with_go("true")
        })
        .unwrap();
        match outcome {
            Outcome::Ran(_, status) => assert!(status.success()),
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn test_discover_missing_root() {
        let err = discover(Path::new("/nonexistent/dir"), false).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
