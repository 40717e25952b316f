//! Configuration validation.
//!
//! Checks the install configuration, every required agent file, every
//! required workflow directory, and the references between them. All checks
//! run to completion and append to a single report; nothing short-circuits
//! except where a missing file makes the following checks meaningless.

mod agents;
mod cross_refs;
mod install_config;
mod workflows;


use crate::context::{INSTALL_CONFIG_FILE, ModuleContext};
use crate::report::ValidationReport;
use crate::yaml::load_yaml;
use serde_yaml::Value;

pub use agents::{validate_agent_file, validate_agent_files};
pub use cross_refs::validate_cross_references;
pub use install_config::validate_install_config;
pub use workflows::{validate_workflow_dir, validate_workflows};

/// Run every configuration check over a module.
pub fn validate_config(ctx: &ModuleContext) -> ValidationReport {
    tracing::info!(module_root = %ctx.module_root.display(), "validating configuration");

    let mut report = ValidationReport::new();

    let config = load_install_config(ctx, &mut report);
    if let Some(config) = &config {
        validate_install_config(config, &mut report);
    }

    validate_agent_files(ctx, &mut report);
    validate_workflows(ctx, &mut report);
    validate_cross_references(ctx, config.as_ref(), &mut report);

    report
}

/// Load `install-config.yaml`, recording an error if it is missing or
/// unparsable.
pub fn load_install_config(ctx: &ModuleContext, report: &mut ValidationReport) -> Option<Value> {
    let path = ctx.install_config_path();
    if !path.is_file() {
        report.error(format!("{} not found", INSTALL_CONFIG_FILE));
        return None;
    }

    match load_yaml(&path, INSTALL_CONFIG_FILE) {
        Ok(config) => Some(config),
        Err(e) => {
            report.error(e.to_string());
            None
        }
    }
}
