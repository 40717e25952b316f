//! Checks for `_module-installer/install-config.yaml`.

use crate::context::{INSTALL_CONFIG_FILE, REQUIRED_AGENTS, REQUIRED_WORKFLOWS};
use crate::model::Sensitivity;
use crate::model::install_config::{
    CHOICE_FIELDS, CONFIG_FIELDS, FIELD_KEYS, IDENTITY_FIELDS, SINGLE_SELECT, entry_codes,
    select_values,
};
use crate::report::ValidationReport;
use crate::yaml::{check_required, field};
use serde_yaml::Value;

/// Validate a parsed install configuration.
pub fn validate_install_config(config: &Value, report: &mut ValidationReport) {
    check_required(config, IDENTITY_FIELDS, INSTALL_CONFIG_FILE, report);

    for &name in CONFIG_FIELDS {
        match field(config, name) {
            Some(entry) => validate_config_field(name, entry, report),
            None => report.error(format!("Missing {} configuration", name)),
        }
    }

    check_entry_list(config, "agents", "agent", REQUIRED_AGENTS, report);
    check_entry_list(config, "workflows", "workflow", REQUIRED_WORKFLOWS, report);

    report.pass(format!("{} is valid YAML", INSTALL_CONFIG_FILE));
}

fn validate_config_field(name: &str, entry: &Value, report: &mut ValidationReport) {
    let errors_before = report.errors.len();

    check_required(entry, FIELD_KEYS, name, report);

    if CHOICE_FIELDS.contains(&name) {
        if field(entry, SINGLE_SELECT).is_none() {
            report.error(format!(
                "{}: Missing required field '{}'",
                name, SINGLE_SELECT
            ));
        } else {
            match select_values(entry) {
                Some(values) => check_options(name, &values, report),
                None => report.error(format!("{}: {} must be a list", name, SINGLE_SELECT)),
            }
        }
    }

    if report.errors.len() == errors_before {
        report.pass(format!("{} configuration valid", name));
    }
}

fn check_options(name: &str, values: &[&str], report: &mut ValidationReport) {
    if name == "inconsistency_sensitivity" {
        check_sensitivity_options(values, report);
    } else if values.is_empty() {
        report.error(format!(
            "{} must have at least one option in {}",
            name, SINGLE_SELECT
        ));
    }
}

/// The sensitivity options must be exactly `relaxed`, `standard` and
/// `strict`. Any deviation is reported once, listing what is off.
fn check_sensitivity_options(values: &[&str], report: &mut ValidationReport) {
    let missing: Vec<&str> = Sensitivity::ALL
        .iter()
        .map(Sensitivity::as_str)
        .filter(|expected| !values.contains(expected))
        .collect();

    let mut unexpected: Vec<&str> = Vec::new();
    for &value in values {
        if Sensitivity::from_str(value).is_none() && !unexpected.contains(&value) {
            unexpected.push(value);
        }
    }

    if missing.is_empty() && unexpected.is_empty() {
        return;
    }

    let mut details = Vec::new();
    if !missing.is_empty() {
        details.push(format!("missing: {}", missing.join(", ")));
    }
    if !unexpected.is_empty() {
        details.push(format!("unexpected: {}", unexpected.join(", ")));
    }
    report.error(format!(
        "inconsistency_sensitivity must have exactly relaxed, standard, and strict options ({})",
        details.join("; ")
    ));
}

/// Check that the `agents` or `workflows` list names every expected code.
fn check_entry_list(
    config: &Value,
    key: &str,
    kind: &str,
    expected: &[&str],
    report: &mut ValidationReport,
) {
    let Some(codes) = entry_codes(config, key) else {
        report.error(format!(
            "{} list missing or invalid in {}",
            key, INSTALL_CONFIG_FILE
        ));
        return;
    };

    let mut complete = true;
    for code in expected {
        if !codes.contains(code) {
            report.error(format!("Missing {} in config: {}", kind, code));
            complete = false;
        }
    }

    if complete {
        report.pass(format!(
            "All {} {} configured in {}",
            expected.len(),
            key,
            INSTALL_CONFIG_FILE
        ));
    }
}
