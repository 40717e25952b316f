//! Cross-reference checks: names listed in the install configuration must
//! resolve to files and directories in the module.

use crate::context::{INSTALL_CONFIG_FILE, ModuleContext};
use crate::model::Workflow;
use crate::model::install_config::{entry_codes, uncoded_entries};
use crate::model::workflow::{TEMPLATE_FILE, WORKFLOW_FILE};
use crate::report::ValidationReport;
use crate::yaml::{into_record, load_yaml};
use serde_yaml::Value;
use std::path::PathBuf;

/// Check configured agents and workflows exist, and that every workflow
/// declaring a template ships `template.md`.
pub fn validate_cross_references(
    ctx: &ModuleContext,
    config: Option<&Value>,
    report: &mut ValidationReport,
) {
    if let Some(config) = config {
        check_references(
            config,
            ("agents", "agent"),
            "All configured agents have corresponding files",
            report,
            |code| ctx.agent_path(code).is_file(),
        );
        check_references(
            config,
            ("workflows", "workflow"),
            "All configured workflows have corresponding directories",
            report,
            |code| ctx.workflow_dir(code).is_dir(),
        );
    }

    for dir in workflow_subdirs(ctx) {
        let Some(code) = dir.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        let workflow_path = dir.join(WORKFLOW_FILE);
        if !workflow_path.is_file() {
            continue;
        }

        // Parse and shape failures are already reported by the workflow checks.
        let context = format!("{}/{}", code, WORKFLOW_FILE);
        let Ok(workflow) = load_yaml(&workflow_path, &context)
            .and_then(|value| into_record::<Workflow>(value, &context))
        else {
            continue;
        };

        if workflow.template().is_some() && !dir.join(TEMPLATE_FILE).is_file() {
            report.warn(format!(
                "{}: {} not found at expected location",
                code, TEMPLATE_FILE
            ));
        }
    }

    report.pass("Cross-reference validation complete");
}

/// Report configured entries of `key` that lack a code or do not resolve.
fn check_references(
    config: &Value,
    (key, kind): (&str, &str),
    resolved: &str,
    report: &mut ValidationReport,
    exists: impl Fn(&str) -> bool,
) {
    let Some(codes) = entry_codes(config, key) else {
        return;
    };

    for position in uncoded_entries(config, key) {
        report.error(format!(
            "{} references {} entry {} without a code",
            INSTALL_CONFIG_FILE, kind, position
        ));
    }
    for code in codes {
        if !exists(code) {
            report.error(format!(
                "{} references non-existent {}: {}",
                INSTALL_CONFIG_FILE, kind, code
            ));
        }
    }

    report.pass(resolved);
}

/// Every subdirectory of `workflows/`, sorted by name.
fn workflow_subdirs(ctx: &ModuleContext) -> Vec<PathBuf> {
    let workflows_dir = ctx.workflows_dir();
    let entries = match std::fs::read_dir(&workflows_dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(path = %workflows_dir.display(), error = %e, "cannot list workflows");
            return Vec::new();
        }
    };

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    dirs
}
