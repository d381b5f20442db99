//! Pathtrace - step-by-step Dijkstra shortest paths
//!
//! Loads a weighted graph file, runs Dijkstra from a chosen start node and
//! prints or replays the ordered trace of relaxation steps.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use pathtrace_core::error::PathtraceError;
use pathtrace_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return argument_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e, cli.format, cli.quiet),
    }
}

/// Handle a clap rejection. Help and version output go through clap as
/// usual; under `--format json` every other rejection becomes a usage
/// error envelope, since `Cli.format` was never parsed.
fn argument_failure(err: clap::Error) -> ExitCode {
    let informational = matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
    if informational || !json_requested(env::args().skip(1)) {
        err.exit();
    }

    let error = PathtraceError::UsageError(err.render().to_string().trim_end().to_string());
    report(&error, OutputFormat::Json, false)
}

/// Print a command failure and map it to the process exit code
fn report(error: &PathtraceError, format: OutputFormat, quiet: bool) -> ExitCode {
    match format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        _ if quiet => {}
        _ => eprintln!("error: {}", error),
    }
    ExitCode::from(error.exit_code() as u8)
}

/// Whether the raw arguments ask for `--format json`
fn json_requested(args: impl Iterator<Item = String>) -> bool {
    let args: Vec<String> = args.collect();
    args.iter().any(|arg| arg == "--format=json")
        || args
            .windows(2)
            .any(|pair| pair[0] == "--format" && pair[1] == "json")
}
