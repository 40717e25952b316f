//! Tests for installer settings.

use crate::model::Sensitivity;
use crate::settings::InstallSettings;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn test_default_settings() {
    let settings = InstallSettings::default();

    assert_eq!(settings.project_root, PathBuf::from("."));
    assert_eq!(settings.data_room_path, "data/deals");
    assert_eq!(settings.knowledge_base_path, "data/knowledge-base");
    assert_eq!(settings.output_location, "output/manda");
    assert_eq!(settings.template_preference, "standard");
    assert_eq!(settings.inconsistency_sensitivity, Sensitivity::Standard);
    assert_eq!(settings.user_name, "Max");
    assert_eq!(settings.communication_language, "English");
    assert_eq!(settings.document_output_language, "English");
    assert!(!settings.seed_docs);
    assert!(settings.min_platform_version.is_none());
}

#[test]
fn test_parse_empty_yaml_uses_defaults() {
    let settings = InstallSettings::from_yaml("").unwrap();
    assert_eq!(settings, InstallSettings::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
project_root: /srv/deals
output_location: deliverables
inconsistency_sensitivity: strict
"#;
    let settings = InstallSettings::from_yaml(yaml).unwrap();

    assert_eq!(settings.project_root, PathBuf::from("/srv/deals"));
    assert_eq!(settings.output_location, "deliverables");
    assert_eq!(settings.inconsistency_sensitivity, Sensitivity::Strict);

    // Unspecified values should use defaults
    assert_eq!(settings.data_room_path, "data/deals");
    assert_eq!(settings.user_name, "Max");
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
user_name: Dana
some_future_option: true
"#;
    let settings = InstallSettings::from_yaml(yaml).unwrap();
    assert_eq!(settings.user_name, "Dana");
}

#[test]
fn test_invalid_sensitivity_rejected() {
    let err = InstallSettings::from_yaml("inconsistency_sensitivity: paranoid\n").unwrap_err();
    assert!(err.to_string().contains("failed to parse settings YAML"));
}

#[test]
fn test_empty_path_rejected() {
    let err = InstallSettings::from_yaml("data_room_path: \"\"\n").unwrap_err();
    assert!(err.to_string().contains("data_room_path must not be empty"));
}

#[test]
fn test_invalid_min_platform_version_rejected() {
    let err = InstallSettings::from_yaml("min_platform_version: one-point-oh\n").unwrap_err();
    assert!(err.to_string().contains("min_platform_version"));
}

#[test]
fn test_min_platform_version_parsed() {
    let settings = InstallSettings::from_yaml("min_platform_version: \"0.2.0\"\n").unwrap();
    assert_eq!(
        settings.min_platform_version().unwrap(),
        Some(semver::Version::new(0, 2, 0))
    );
}

#[test]
fn test_paths_resolve_against_project_root() {
    let settings = InstallSettings {
        project_root: PathBuf::from("/projects/acme"),
        output_location: "/var/manda/out".to_string(),
        ..InstallSettings::default()
    };

    assert_eq!(
        settings.data_room_dir(),
        Path::new("/projects/acme/data/deals")
    );
    assert_eq!(
        settings.knowledge_base_dir(),
        Path::new("/projects/acme/data/knowledge-base")
    );
    assert_eq!(settings.output_dir(), Path::new("/var/manda/out"));
}

#[test]
fn test_load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("install.yaml");
    std::fs::write(&path, "template_preference: detailed\n").unwrap();

    let settings = InstallSettings::load(&path).unwrap();
    assert_eq!(settings.template_preference, "detailed");
}

#[test]
fn test_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = InstallSettings::load(temp.path().join("nope.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to read settings file"));
}
