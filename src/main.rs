//! Wayfinder - shortest travel-time routes between locations
//!
//! Loads or generates a weighted location graph and answers distance,
//! route and neighbor queries from the command line.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use wayfinder_core::error::WayfinderError;
use wayfinder_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e, cli.format, cli.quiet);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn report(e: &WayfinderError, format: OutputFormat, quiet: bool) {
    match format {
        OutputFormat::Json => eprintln!("{}", e.to_json()),
        _ if quiet => {}
        _ => eprintln!("error: {}", e),
    }
}

/// Clap rejected argv before `Cli.format` existed.
///
/// Help and version output, and any run not asking for JSON, keep clap's
/// own rendering. Otherwise the failure becomes a usage error envelope.
fn parse_failure(err: clap::Error) -> ExitCode {
    let informational = matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
    if informational || requested_format() != Some(OutputFormat::Json) {
        err.exit();
    }

    let rendered = err.to_string();
    let summary = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ");
    let usage = WayfinderError::UsageError(summary.to_string());
    eprintln!("{}", usage.to_json());
    ExitCode::from(usage.exit_code() as u8)
}

/// Last `--format` value on the raw command line, if it names a format
fn requested_format() -> Option<OutputFormat> {
    let args: Vec<String> = env::args().skip(1).collect();
    args.iter().enumerate().rev().find_map(|(i, arg)| {
        if let Some(value) = arg.strip_prefix("--format=") {
            value.parse().ok()
        } else if arg == "--format" {
            args.get(i + 1)?.parse().ok()
        } else {
            None
        }
    })
}
