use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use gotest_picker::app::{self, Outcome};
use gotest_picker::cli;
use gotest_picker::logging::{self, Verbosity};
use gotest_picker::output::OutputFormatter;
use gotest_picker::runner::GoTestCommand;
use gotest_picker::select::Finder;
use std::process::{ExitCode, ExitStatus};

fn main() -> Result<ExitCode> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let root = args.root()?;
    let discovery = app::discover(&root, args.strict)
        .with_context(|| format!("Failed to discover tests under {}", root.display()))?;

    if args.list {
        tracing::debug!(format = args.format.as_str(), "listing tests");
        let output = OutputFormatter::format(&discovery, args.format)?;
        if !output.is_empty() {
            println!("{output}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let finder = Finder::from_command_line(&args.finder).context("Finder command is empty")?;
    let outcome = app::pick_and_run(&discovery.tests, &finder, args.dry_run, |selected| {
        GoTestCommand::new(&args.target, selected)
            .with_go(&args.go)
            .with_extra_args(args.go_args.clone())
    })?;

    Ok(match outcome {
        Outcome::Cancelled | Outcome::Printed(_) => ExitCode::SUCCESS,
        Outcome::Ran(_, status) => exit_code(status),
    })
}

fn exit_code(status: ExitStatus) -> ExitCode {
    match status.code() {
        Some(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        None => ExitCode::FAILURE,
    }
}
