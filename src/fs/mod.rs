//! Filesystem helpers.
//!
//! The installer never deletes or overwrites content it did not create, and
//! compiled documentation is written atomically so a reader never sees a
//! half-written agent page.

pub mod atomic;

pub use atomic::atomic_write_file;

use crate::error::{MandaError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Outcome of [`ensure_dir`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirOutcome {
    /// The directory was created by this call.
    Created,
    /// The directory was already present.
    Existed,
}

/// Create a directory (and parents) unless it already exists.
pub fn ensure_dir(path: &Path) -> Result<DirOutcome> {
    if path.is_dir() {
        return Ok(DirOutcome::Existed);
    }
    if path.exists() {
        return Err(MandaError::InstallError(format!(
            "'{}' exists but is not a directory",
            path.display()
        )));
    }

    std::fs::create_dir_all(path).map_err(|e| {
        MandaError::InstallError(format!(
            "failed to create directory '{}': {}",
            path.display(),
            e
        ))
    })?;
    Ok(DirOutcome::Created)
}

/// Write `content` to `path` only if no file exists there yet.
///
/// Returns `true` if the file was written. The existence check and the
/// creation are one `create_new` open, so an existing file is never touched.
pub fn write_if_absent(path: &Path, content: &str) -> Result<bool> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => {
            return Err(MandaError::InstallError(format!(
                "failed to create '{}': {}",
                path.display(),
                e
            )));
        }
    };

    file.write_all(content.as_bytes()).map_err(|e| {
        MandaError::InstallError(format!("failed to write '{}': {}", path.display(), e))
    })?;
    Ok(true)
}
