//! Settings loading, validation and path resolution.

use super::model::InstallSettings;
use crate::error::{MandaError, Result};
use semver::Version;
use std::path::{Path, PathBuf};

impl InstallSettings {
    /// Load settings from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored.
    ///
    /// # Returns
    ///
    /// * `Ok(InstallSettings)` - Successfully loaded and validated settings
    /// * `Err(MandaError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            MandaError::UserError(format!(
                "failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string. An empty document yields defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let settings: InstallSettings = if yaml.trim().is_empty() {
            InstallSettings::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                MandaError::UserError(format!("failed to parse settings YAML: {}", e))
            })?
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings values.
    ///
    /// Validation rules:
    /// - path fields and `template_preference` must be non-empty
    /// - `min_platform_version`, if set, must be a semantic version
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("data_room_path", &self.data_room_path),
            ("knowledge_base_path", &self.knowledge_base_path),
            ("output_location", &self.output_location),
            ("template_preference", &self.template_preference),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(MandaError::UserError(format!(
                    "settings validation failed: {} must not be empty",
                    name
                )));
            }
        }

        if self.project_root.as_os_str().is_empty() {
            return Err(MandaError::UserError(
                "settings validation failed: project_root must not be empty".to_string(),
            ));
        }

        self.min_platform_version()?;

        Ok(())
    }

    /// The configured minimum platform version, parsed.
    pub fn min_platform_version(&self) -> Result<Option<Version>> {
        self.min_platform_version
            .as_deref()
            .map(|v| {
                Version::parse(v.trim()).map_err(|e| {
                    MandaError::UserError(format!(
                        "settings validation failed: min_platform_version '{}' is not a valid version: {}",
                        v, e
                    ))
                })
            })
            .transpose()
    }

    /// Resolve a configured path against the project root. Absolute paths
    /// are returned unchanged.
    pub fn resolve(&self, configured: &str) -> PathBuf {
        let path = Path::new(configured);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }

    pub fn data_room_dir(&self) -> PathBuf {
        self.resolve(&self.data_room_path)
    }

    pub fn knowledge_base_dir(&self) -> PathBuf {
        self.resolve(&self.knowledge_base_path)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.output_location)
    }
}
