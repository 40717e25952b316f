//! Exit code constants for the manda CLI.
//!
//! Every entry point is used from scripts and CI, so the contract is binary:
//! - 0: Success
//! - 1: Failure (validation errors, failed install, bad arguments)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Any failure: a report finished with errors, an install precondition failed,
/// or the command could not start.
pub const FAILURE: i32 = 1;
