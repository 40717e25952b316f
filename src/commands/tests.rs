//! Tests for command dispatch.

use super::*;
use crate::cli::{CompileArgs, InstallArgs};
use crate::error::MandaError;
use crate::model::Sensitivity;
use crate::test_support::{DirGuard, ModuleFixture};
use serial_test::serial;
use std::path::PathBuf;
use tempfile::TempDir;

fn install_args() -> InstallArgs {
    InstallArgs {
        config: None,
        project_root: None,
        data_room_path: None,
        knowledge_base_path: None,
        output_location: None,
        template_preference: None,
        inconsistency_sensitivity: None,
        seed_docs: false,
    }
}

#[test]
fn test_validate_passes_on_valid_module() {
    let fixture = ModuleFixture::new();
    dispatch(Command::Validate, Some(fixture.root())).unwrap();
}

#[test]
fn test_validate_config_failure_is_validation_error() {
    let fixture = ModuleFixture::new();
    fixture.remove("agents/company-analyst.agent.yaml");

    let err = dispatch(Command::ValidateConfig, Some(fixture.root())).unwrap_err();

    assert!(matches!(err, MandaError::ValidationError(_)));
    assert_eq!(err.exit_code(), crate::exit_codes::FAILURE);
}

#[test]
fn test_validate_fails_when_docs_missing() {
    let fixture = ModuleFixture::new();
    fixture.remove("docs/QUICKSTART.md");

    let err = dispatch(Command::Validate, Some(fixture.root())).unwrap_err();

    assert!(matches!(err, MandaError::ValidationError(_)));
}

#[test]
fn test_compile_writes_output_dir() {
    let fixture = ModuleFixture::new();
    let out = TempDir::new().unwrap();

    dispatch(
        Command::Compile(CompileArgs {
            output_dir: Some(out.path().join("compiled")),
        }),
        Some(fixture.root()),
    )
    .unwrap();

    assert!(out.path().join("compiled/deal-orchestrator.md").is_file());
    assert!(out.path().join("compiled/story-architect.md").is_file());
}

#[test]
fn test_compile_failure_writes_nothing() {
    let fixture = ModuleFixture::new();
    fixture.write("agents/finance-analyst.agent.yaml", "name: only-a-name\n");
    let out = TempDir::new().unwrap();
    let target = out.path().join("compiled");

    let err = dispatch(
        Command::Compile(CompileArgs {
            output_dir: Some(target.clone()),
        }),
        Some(fixture.root()),
    )
    .unwrap_err();

    assert!(matches!(err, MandaError::ValidationError(_)));
    assert!(!target.exists());
}

#[test]
fn test_missing_module_root_is_user_error() {
    let temp = TempDir::new().unwrap();

    let err = dispatch(Command::Validate, Some(&temp.path().join("absent"))).unwrap_err();

    assert!(matches!(err, MandaError::UserError(_)));
}

#[test]
fn test_install_end_to_end() {
    let fixture = ModuleFixture::new();
    let project = TempDir::new().unwrap();
    let args = InstallArgs {
        project_root: Some(project.path().to_path_buf()),
        output_location: Some("deliverables".to_string()),
        ..install_args()
    };

    dispatch(Command::Install(args), Some(fixture.root())).unwrap();

    assert!(project.path().join("deliverables/teasers").is_dir());
    assert!(project.path().join("data/deals/upload/pending").is_dir());
}

#[test]
fn test_build_settings_flags_override_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("install.yaml");
    std::fs::write(
        &config,
        "project_root: /srv/acme\ntemplate_preference: detailed\nuser_name: Dana\n",
    )
    .unwrap();
    let args = InstallArgs {
        config: Some(config),
        template_preference: Some("compact".to_string()),
        inconsistency_sensitivity: Some(Sensitivity::Relaxed),
        seed_docs: true,
        ..install_args()
    };

    let settings = install::build_settings(args).unwrap();

    assert_eq!(settings.project_root, PathBuf::from("/srv/acme"));
    assert_eq!(settings.template_preference, "compact");
    assert_eq!(settings.user_name, "Dana");
    assert_eq!(settings.inconsistency_sensitivity, Sensitivity::Relaxed);
    assert!(settings.seed_docs);
}

#[test]
fn test_build_settings_rejects_empty_override() {
    let args = InstallArgs {
        project_root: Some(PathBuf::from("/srv/acme")),
        data_room_path: Some(String::new()),
        ..install_args()
    };

    let err = install::build_settings(args).unwrap_err();

    assert!(err.to_string().contains("data_room_path must not be empty"));
}

#[test]
#[serial]
fn test_build_settings_relative_root_uses_cwd() {
    let temp = TempDir::new().unwrap();
    let _guard = DirGuard::new(temp.path());

    let settings = install::build_settings(install_args()).unwrap();

    let cwd = std::env::current_dir().unwrap();
    assert_eq!(settings.project_root, cwd.join("."));
}
