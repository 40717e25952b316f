//! Workflow records (`workflows/<code>/workflow.yaml`).

use serde::Deserialize;
use serde_yaml::Mapping;

/// Keys every `workflow.yaml` must carry.
pub const REQUIRED_WORKFLOW_FIELDS: &[&str] = &["name", "code", "description"];

pub const WORKFLOW_FILE: &str = "workflow.yaml";
pub const INSTRUCTIONS_FILE: &str = "instructions.md";
pub const TEMPLATE_FILE: &str = "template.md";

/// A workflow definition. Every field is optional at this level; presence
/// is enforced by the validator so that all gaps are reported at once.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Workflow {
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    /// Declared output template path, usually rooted at `{project-root}`.
    pub template: Option<String>,
    /// Named inputs the workflow asks for.
    pub inputs: Option<Mapping>,
}

impl Workflow {
    /// Declared template, ignoring an empty string.
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workflow_tolerates_missing_optional_fields() {
        let wf: Workflow =
            serde_yaml::from_str("name: Data Room Audit\ncode: data-room-audit\n").unwrap();
        assert_eq!(wf.code.as_deref(), Some("data-room-audit"));
        assert!(wf.description.is_none());
        assert!(wf.template().is_none());
    }

    #[test]
    fn empty_template_counts_as_absent() {
        let wf: Workflow = serde_yaml::from_str("template: \"\"\n").unwrap();
        assert!(wf.template().is_none());
    }
}
