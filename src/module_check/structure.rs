//! File structure verification.

use crate::context::{
    INSTALL_CONFIG_FILE, INSTALLER_DIR, ModuleContext, REQUIRED_AGENTS, REQUIRED_WORKFLOWS,
    agent_file_name,
};
use crate::model::workflow::{INSTRUCTIONS_FILE, TEMPLATE_FILE, WORKFLOW_FILE};
use crate::report::ValidationReport;
use std::path::Path;

/// Directories every module must contain, relative to the module root.
pub const REQUIRED_DIRS: &[&str] = &[
    "agents",
    "workflows",
    "workflows/data-room-audit",
    "workflows/investment-storyline-workshop",
    "tasks",
    "cim-templates",
    "data",
    "_module-installer",
    "docs",
];

/// Files every module must contain, relative to the module root.
pub fn required_files() -> Vec<String> {
    let mut files = vec![
        "README.md".to_string(),
        format!("{}/{}", INSTALLER_DIR, INSTALL_CONFIG_FILE),
        "docs/QUICKSTART.md".to_string(),
        "docs/USER-GUIDE.md".to_string(),
        "docs/COMPONENT-ROADMAP.md".to_string(),
    ];
    files.extend(
        REQUIRED_AGENTS
            .iter()
            .map(|code| format!("agents/{}", agent_file_name(code))),
    );
    files.push("agents/information-vault-rag-implementation.md".to_string());
    for code in REQUIRED_WORKFLOWS {
        for file in [WORKFLOW_FILE, INSTRUCTIONS_FILE, TEMPLATE_FILE] {
            files.push(format!("workflows/{}/{}", code, file));
        }
    }
    files.push("workflows/investment-storyline-workshop/teaser-template.md".to_string());
    files
}

/// Check that the required directories and files exist.
pub fn validate_file_structure(ctx: &ModuleContext) -> ValidationReport {
    let mut report = ValidationReport::new();

    for dir in REQUIRED_DIRS {
        if ctx.path(dir).is_dir() {
            report.pass(format!("Directory exists: {}", dir));
        } else {
            report.error(format!("Missing directory: {}", dir));
        }
    }

    for file in required_files() {
        if ctx.path(&file).is_file() {
            report.pass(format!("File exists: {}", file));
        } else {
            report.error(format!("Missing file: {}", file));
        }
    }

    if is_empty_dir(&ctx.path("tasks")) {
        report.warn("tasks/ directory is empty (optional)");
    }
    if is_empty_dir(&ctx.path("cim-templates")) {
        report.warn("cim-templates/ directory is empty (workflow templates are sufficient)");
    }

    report
}

/// An existing directory with no entries. Missing directories are not empty;
/// they are reported on their own.
fn is_empty_dir(path: &Path) -> bool {
    match std::fs::read_dir(path) {
        Ok(mut entries) => entries.next().is_none(),
        Err(_) => false,
    }
}
