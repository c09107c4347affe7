//! Gradebook - command-line tools for a classroom gradebook
//!
//! Lists students, creates blank gradebook files, calculates weighted
//! averages, and reports unscored assignments from a directory of JSON files.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use gradebook_core::error::{ExitCode as GradebookExitCode, GradebookError};
use gradebook_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let args = cli::argv::normalize(env::args_os());
    let argv_format_json = cli::argv::requests_json(&args);

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) => {
            match err.kind() {
                // Help and version are informational, not errors - let clap handle them
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    err.exit()
                }
                _ => {
                    let rendered = err.to_string();
                    let message = rendered.strip_prefix("error: ").unwrap_or(&rendered);
                    if argv_format_json {
                        let usage = GradebookError::Usage(message.trim_end().to_string());
                        eprintln!("{}", usage.to_json());
                    } else {
                        eprint!("{}: {}", cli::argv::command_name(&args), message);
                    }
                }
            }
            return ExitCode::from(GradebookExitCode::Failure as u8);
        }
    };

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = commands::dispatch::run(&cli, start);

    match result {
        Ok(()) => ExitCode::from(GradebookExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else {
                eprintln!("{}: {}", cli.command_name(), e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}
