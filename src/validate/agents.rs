//! Checks for the required agent definition files.

use crate::context::{ModuleContext, REQUIRED_AGENTS, agent_file_name};
use crate::model::AgentType;
use crate::model::agent::{MIN_SYSTEM_PROMPT_CHARS, PROJECT_ROOT_PLACEHOLDER, REQUIRED_AGENT_FIELDS};
use crate::report::ValidationReport;
use crate::yaml::{check_required, field, load_yaml, missing_fields, scalar_to_string, str_field};
use serde_yaml::Value;
use std::path::Path;

/// Validate every required agent file under `agents/`.
pub fn validate_agent_files(ctx: &ModuleContext, report: &mut ValidationReport) {
    for code in REQUIRED_AGENTS {
        let file = agent_file_name(code);
        let path = ctx.agent_path(code);
        if !path.is_file() {
            report.error(format!("Missing agent file: {}", file));
            continue;
        }
        validate_agent_file(&path, &file, report);
    }
}

/// Validate one agent file. `file` names it in report lines.
pub fn validate_agent_file(path: &Path, file: &str, report: &mut ValidationReport) {
    let agent = match load_yaml(path, file) {
        Ok(agent) => agent,
        Err(e) => {
            report.error(e.to_string());
            return;
        }
    };

    let errors_before = report.errors.len();

    check_required(&agent, REQUIRED_AGENT_FIELDS, file, report);

    if let Some(agent_type) = field(&agent, "type")
        && agent_type.as_str().and_then(AgentType::from_str).is_none()
    {
        report.error(format!(
            "{}: Invalid type '{}'. Must be: module, service, or expert",
            file,
            scalar_to_string(agent_type)
        ));
    }

    if let Some(capabilities) = field(&agent, "capabilities") {
        check_capabilities(file, capabilities, report);
    }

    if let Some(source) = field(&agent, "config_source").map(scalar_to_string)
        && !source.contains(PROJECT_ROOT_PLACEHOLDER)
    {
        report.warn(format!(
            "{}: config_source should use {} variable",
            file, PROJECT_ROOT_PLACEHOLDER
        ));
    }

    if let Some(prompt) = str_field(&agent, "system_prompt") {
        let chars = prompt.chars().count();
        if chars < MIN_SYSTEM_PROMPT_CHARS {
            report.warn(format!(
                "{}: system_prompt seems too short ({} chars)",
                file, chars
            ));
        }
    }

    if report.errors.len() == errors_before {
        report.pass(format!("{} is valid", file));
    }
}

fn check_capabilities(file: &str, capabilities: &Value, report: &mut ValidationReport) {
    let Some(entries) = capabilities.as_sequence() else {
        report.error(format!("{}: capabilities must be a list", file));
        return;
    };

    for (i, capability) in entries.iter().enumerate() {
        if !missing_fields(capability, &["name", "description"]).is_empty() {
            report.error(format!(
                "{}: Capability {} missing name or description",
                file,
                i + 1
            ));
        }
    }
    report.pass(format!(
        "{}: {} capabilities defined",
        file,
        entries.len()
    ));
}
