//! pps: scaffold new projects from starter templates.
//!
//! This is the main entry point for the `pps` CLI. It parses arguments,
//! sets up logging, reads the runtime configuration, dispatches to the
//! command handler, and renders errors with proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod deploy;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod packager;
pub mod template;
pub mod tree;
pub mod validate;

#[cfg(test)]
mod test_support;

use cli::Cli;
use config::Config;
use error::PpsError;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding a `tracing` filter that overrides `-v`/`-q`.
const LOG_ENV: &str = "PPS_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    init_tracing(cli.verbose, cli.quiet);

    let mut stdout = io::stdout().lock();
    let result = Config::from_env()
        .map_err(PpsError::from)
        .and_then(|config| commands::dispatch(cli.command, &config, &mut stdout));

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");

            if let Err(write_err) = commands::report_error(&err, &mut stdout) {
                eprintln!("Error: {}", err);
                eprintln!("(failed to write to stdout: {})", write_err);
            }
            let _ = stdout.flush();

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Initialize tracing on stderr so progress output on stdout stays clean.
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if quiet {
            EnvFilter::new("error")
        } else {
            match verbose {
                0 => EnvFilter::new("warn"),
                1 => EnvFilter::new("info"),
                2 => EnvFilter::new("debug"),
                _ => EnvFilter::new("trace"),
            }
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}
