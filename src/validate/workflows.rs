//! Checks for the required workflow directories.

use crate::context::{ModuleContext, REQUIRED_WORKFLOWS};
use crate::model::agent::PROJECT_ROOT_PLACEHOLDER;
use crate::model::workflow::{
    INSTRUCTIONS_FILE, REQUIRED_WORKFLOW_FIELDS, TEMPLATE_FILE, WORKFLOW_FILE,
};
use crate::report::ValidationReport;
use crate::yaml::{check_required, field, load_yaml, scalar_to_string};
use serde_yaml::Value;
use std::path::Path;

/// Validate every required workflow under `workflows/`.
pub fn validate_workflows(ctx: &ModuleContext, report: &mut ValidationReport) {
    for code in REQUIRED_WORKFLOWS {
        validate_workflow_dir(&ctx.workflow_dir(code), code, report);
    }
}

/// Validate one workflow directory whose name is `code`.
pub fn validate_workflow_dir(dir: &Path, code: &str, report: &mut ValidationReport) {
    if !dir.is_dir() {
        report.error(format!("Missing workflow directory: {}", code));
        return;
    }

    let workflow_path = dir.join(WORKFLOW_FILE);
    if !workflow_path.is_file() {
        report.error(format!("{}: Missing {}", code, WORKFLOW_FILE));
        return;
    }

    for companion in [INSTRUCTIONS_FILE, TEMPLATE_FILE] {
        if dir.join(companion).is_file() {
            report.pass(format!("{}/{} exists", code, companion));
        } else {
            report.error(format!("{}: Missing {}", code, companion));
        }
    }

    let context = format!("{}/{}", code, WORKFLOW_FILE);
    let workflow = match load_yaml(&workflow_path, &context) {
        Ok(workflow) => workflow,
        Err(e) => {
            report.error(e.to_string());
            return;
        }
    };

    let errors_before = report.errors.len();

    check_required(&workflow, REQUIRED_WORKFLOW_FIELDS, &context, report);

    if let Some(declared) = field(&workflow, "code").map(scalar_to_string)
        && declared != code
    {
        report.error(format!(
            "{}: code '{}' doesn't match directory name '{}'",
            context, declared, code
        ));
    }

    match field(&workflow, "template").map(scalar_to_string) {
        Some(template) if !template.contains(PROJECT_ROOT_PLACEHOLDER) => report.warn(format!(
            "{}: template should use {} variable",
            context, PROJECT_ROOT_PLACEHOLDER
        )),
        Some(_) => {}
        None => report.warn(format!("{}: No template specified", context)),
    }

    if let Some(count) = field(&workflow, "inputs").and_then(input_count) {
        report.pass(format!("{}: {} inputs defined", context, count));
    }

    if report.errors.len() == errors_before {
        report.pass(format!("{} is valid", context));
    }
}

fn input_count(inputs: &Value) -> Option<usize> {
    match inputs {
        Value::Mapping(map) => Some(map.len()),
        Value::Sequence(seq) => Some(seq.len()),
        _ => None,
    }
}
