//! Digraph - directed graph traversal CLI
//!
//! Builds a graph from a TOML definition (or the built-in sample graph)
//! and prints breadth-first/depth-first orders, spanning trees and
//! shortest paths.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use digraph_core::error::{ExitCode as DigraphExitCode, GraphError};
use digraph_core::format::OutputFormat;
use digraph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap may fail before `Cli.format` is available. If JSON output
            // was requested, emit a structured error envelope.
            if argv_format_json {
                if let Some(graph_error) = parse_failure(&err) {
                    eprintln!("{}", graph_error.to_json());
                    return ExitCode::from(graph_error.exit_code() as u8);
                }
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(DigraphExitCode::Success as u8),
        Err(e) => report(&cli, &e),
    }
}

/// Print a command failure in the requested format and pick the exit code
fn report(cli: &Cli, err: &GraphError) -> ExitCode {
    match cli.format {
        OutputFormat::Json => eprintln!("{}", err.to_json()),
        OutputFormat::Human if !cli.quiet => eprintln!("error: {}", err),
        OutputFormat::Human => {}
    }
    tracing::debug!(kind = err.error_type(), "command failed");
    ExitCode::from(err.exit_code() as u8)
}

/// Structured form of a clap failure, or `None` for help/version output.
///
/// Values rejected by a `value_parser` keep the library's own message
/// instead of clap's rendered usage block.
fn parse_failure(err: &clap::Error) -> Option<GraphError> {
    use clap::error::ErrorKind;

    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        | ErrorKind::DisplayVersion => return None,
        _ => {}
    }

    let rejected =
        std::error::Error::source(err).and_then(|source| source.downcast_ref::<GraphError>());
    let message = match rejected {
        Some(inner) => inner.to_string(),
        None => {
            let rendered = err.to_string();
            let headline = rendered.lines().next().unwrap_or_default();
            headline.trim_start_matches("error: ").to_string()
        }
    };
    Some(GraphError::UsageError(message))
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
