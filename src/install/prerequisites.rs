//! Install preconditions.

use crate::error::{MandaError, Result};
use crate::settings::InstallSettings;
use semver::Version;

/// Oldest platform release able to host the module.
pub const MIN_PLATFORM_VERSION: &str = "0.1.0";

/// The running platform's version.
pub fn platform_version() -> Result<Version> {
    parse_version(env!("CARGO_PKG_VERSION"))
}

fn parse_version(raw: &str) -> Result<Version> {
    Version::parse(raw).map_err(|e| {
        MandaError::InstallError(format!("invalid platform version '{}': {}", raw, e))
    })
}

/// Check that `current` meets the required minimum and that the project
/// root is an existing directory.
///
/// The required minimum is the stricter of [`MIN_PLATFORM_VERSION`] and the
/// settings' `min_platform_version`.
pub fn check_prerequisites(settings: &InstallSettings, current: &Version) -> Result<()> {
    let mut required = parse_version(MIN_PLATFORM_VERSION)?;
    if let Some(configured) = settings.min_platform_version()?
        && configured > required
    {
        required = configured;
    }

    if *current < required {
        return Err(MandaError::InstallError(format!(
            "platform {}+ required. Current version: {}",
            required, current
        )));
    }

    let root = &settings.project_root;
    if !root.exists() {
        return Err(MandaError::InstallError(format!(
            "Project root not found: {}",
            root.display()
        )));
    }
    if !root.is_dir() {
        return Err(MandaError::InstallError(format!(
            "Project root is not a directory: {}",
            root.display()
        )));
    }

    tracing::debug!(version = %current, required = %required, "prerequisites validated");
    Ok(())
}
