//! Error types for the manda CLI.
//!
//! Two layers, both derived with thiserror:
//! - [`CheckError`] is raised by a single check (one file, one record) and is
//!   always folded into a [`ValidationReport`](crate::report::ValidationReport)
//!   as one error line by the caller.
//! - [`MandaError`] is the command-level failure that reaches `main` and
//!   decides the process exit code.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Command-level error type.
#[derive(Error, Debug)]
pub enum MandaError {
    /// Bad arguments, unreadable settings, or a module root that cannot be used.
    #[error("{0}")]
    UserError(String),

    /// A validation or compilation report finished with errors.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// An install precondition failed or the scaffolder could not create a path.
    #[error("Installation failed: {0}")]
    InstallError(String),
}

impl MandaError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            MandaError::UserError(_)
            | MandaError::ValidationError(_)
            | MandaError::InstallError(_) => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for command-level operations.
pub type Result<T> = std::result::Result<T, MandaError>;

/// Failure of a single file-level check.
///
/// The display string is exactly the line that ends up in the report, so it
/// always leads with the context (usually a file name).
#[derive(Error, Debug)]
pub enum CheckError {
    /// The file could not be read.
    #[error("{context}: failed to read '{}': {source}", path.display())]
    Read {
        context: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML.
    #[error("{context} parse error: {source}")]
    Parse {
        context: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// The YAML parsed but does not have the expected shape.
    #[error("{context}: invalid structure - {message}")]
    Shape { context: String, message: String },
}
