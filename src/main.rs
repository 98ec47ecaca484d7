//! Netpath - minimum-delay route finder CLI
//!
//! A command-line tool for querying the lowest-total-delay route between
//! two nodes of a weighted directed graph.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use netpath_core::error::{ExitCode as NetpathExitCode, NetpathError};
use netpath_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return handle_parse_error(err),
    };

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = commands::dispatch::run(&cli, start);

    match result {
        Ok(()) => ExitCode::from(NetpathExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

/// Render a clap parse failure.
///
/// `--format` is a global flag, but clap may fail before the `Cli` struct is
/// available to inspect. If the command line requested JSON output, emit a
/// structured error envelope instead of clap's plain-text message.
fn handle_parse_error(err: clap::Error) -> ExitCode {
    if !argv_requests_json() {
        err.exit();
    }

    let netpath_error = match err.kind() {
        // Help and version are informational, not errors - let clap handle them
        clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => err.exit(),
        clap::error::ErrorKind::ValueValidation
        | clap::error::ErrorKind::InvalidValue
        | clap::error::ErrorKind::InvalidSubcommand
        | clap::error::ErrorKind::UnknownArgument
        | clap::error::ErrorKind::MissingRequiredArgument => {
            NetpathError::UsageError(err.to_string())
        }
        clap::error::ErrorKind::ArgumentConflict => {
            // Covers a repeated `--format`
            NetpathError::DuplicateFormat
        }
        _ => NetpathError::Other(err.to_string()),
    };

    eprintln!("{}", netpath_error.to_json());
    ExitCode::from(netpath_error.exit_code() as u8)
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
