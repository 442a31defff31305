//! Command implementations for pps.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, and the renderer that turns a failed command into
//! user-visible output.

mod init;

use crate::cli::Command;
use crate::config::Config;
use crate::error::{PpsError, Result};
use std::error::Error;
use std::io::{self, Write};

/// Dispatch a command to its implementation.
///
/// Progress output goes to `out`. Errors are returned unrendered; see
/// [`report_error`].
pub fn dispatch(command: Command, config: &Config, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Init(args) => init::cmd_init(config, &args, out),
    }
}

/// Write `err` followed by its chain of causes.
///
/// ```text
/// Error: failed to compress '/tmp/_temp_ab12'
///
/// Caused by:
///     0: Permission denied (os error 13)
/// ```
pub fn report_error(err: &PpsError, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Error: {}", err)?;

    let mut source = err.source();
    if source.is_some() {
        writeln!(out)?;
        writeln!(out, "Caused by:")?;
    }
    let mut depth = 0;
    while let Some(cause) = source {
        writeln!(out, "    {}: {}", depth, cause)?;
        source = cause.source();
        depth += 1;
    }

    Ok(())
}
