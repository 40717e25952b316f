//! InstallSettings struct definition and defaults.

use crate::model::Sensitivity;
use serde::Deserialize;
use std::path::PathBuf;

/// Settings for one installer run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InstallSettings {
    // =========================================================================
    // Locations
    // =========================================================================
    /// Project the module is installed into.
    pub project_root: PathBuf,

    /// Deal document storage, relative to `project_root` unless absolute.
    pub data_room_path: String,

    /// Knowledge base storage, relative to `project_root` unless absolute.
    pub knowledge_base_path: String,

    /// Generated deliverables, relative to `project_root` unless absolute.
    pub output_location: String,

    // =========================================================================
    // Preferences
    // =========================================================================
    /// CIM template style.
    pub template_preference: String,

    pub inconsistency_sensitivity: Sensitivity,

    pub user_name: String,
    pub communication_language: String,
    pub document_output_language: String,

    // =========================================================================
    // Install behavior
    // =========================================================================
    /// Write an explanatory README into freshly created root directories.
    pub seed_docs: bool,

    /// Minimum platform version this installation requires. Checked in
    /// addition to the installer's built-in minimum.
    pub min_platform_version: Option<String>,
}

impl Default for InstallSettings {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            data_room_path: default_data_room_path(),
            knowledge_base_path: default_knowledge_base_path(),
            output_location: default_output_location(),
            template_preference: default_template_preference(),
            inconsistency_sensitivity: Sensitivity::default(),
            user_name: default_user_name(),
            communication_language: default_language(),
            document_output_language: default_language(),
            seed_docs: false,
            min_platform_version: None,
        }
    }
}

pub(crate) fn default_data_room_path() -> String {
    "data/deals".to_string()
}

pub(crate) fn default_knowledge_base_path() -> String {
    "data/knowledge-base".to_string()
}

pub(crate) fn default_output_location() -> String {
    "output/manda".to_string()
}

pub(crate) fn default_template_preference() -> String {
    "standard".to_string()
}

pub(crate) fn default_user_name() -> String {
    "Max".to_string()
}

pub(crate) fn default_language() -> String {
    "English".to_string()
}
