//! Manda: installer and validator for the M&A deal intelligence agent module.
//!
//! This is the main entry point for the `manda` CLI. It parses arguments,
//! initializes diagnostics, dispatches to the appropriate command handler,
//! and handles errors with proper exit codes.

mod cli;
mod commands;
pub mod compile;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod install;
mod logging;
pub mod model;
pub mod module_check;
pub mod report;
pub mod settings;
pub mod validate;
pub mod yaml;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    logging::init_logging(cli.verbose);

    match commands::dispatch(cli.command, cli.module_root.as_deref()) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
