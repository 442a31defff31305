//! Exit code constants for the pps CLI.
//!
//! - 0: Success
//! - 1: Failure (bad name, bad mode, missing template, guard or deploy error)
//!
//! Argument parsing errors are reported by clap with its own usage code.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Any validation, resolution, staging, guard or deploy failure.
pub const FAILURE: i32 = 1;
