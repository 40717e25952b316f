//! Agent definition records (`agents/<code>.agent.yaml`).

use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::fmt;

/// Keys every agent file must carry.
pub const REQUIRED_AGENT_FIELDS: &[&str] = &[
    "name",
    "role",
    "code",
    "system_prompt",
    "capabilities",
    "type",
    "version",
];

/// Placeholder that path-like fields are expected to be rooted at.
pub const PROJECT_ROOT_PLACEHOLDER: &str = "{project-root}";

/// Prompts shorter than this many characters earn a quality warning.
pub const MIN_SYSTEM_PROMPT_CHARS: usize = 100;

/// Deployment kind of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentType {
    /// Module agent with a user-facing menu.
    Module,
    /// Background service invoked by other agents.
    Service,
    /// Domain expert consulted on demand.
    Expert,
}

impl AgentType {
    /// Parse an agent type. Matching is exact and case-sensitive.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "module" => Some(Self::Module),
            "service" => Some(Self::Service),
            "expert" => Some(Self::Expert),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentType::Module => "module",
            AgentType::Service => "service",
            AgentType::Expert => "expert",
        }
    }
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully-typed agent record, as consumed by the Markdown compiler.
///
/// Descriptive leaves (capability input, persona items, standards and so on)
/// stay raw YAML values: modules write them as strings, numbers or lists,
/// and the renderer flattens whatever is there.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Agent {
    pub name: String,
    pub role: String,
    pub code: String,
    #[serde(rename = "type")]
    pub agent_type: AgentType,
    pub version: Value,
    pub system_prompt: String,
    pub capabilities: Vec<Capability>,
    #[serde(default)]
    pub persona: Option<Persona>,
    #[serde(default)]
    pub tools: Option<Vec<Tool>>,
    #[serde(default)]
    pub menu: Option<Vec<MenuItem>>,
    #[serde(default)]
    pub behavior: Option<Mapping>,
    #[serde(default)]
    pub quality_standards: Option<Value>,
    #[serde(default)]
    pub config_source: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Persona {
    pub expertise: Value,
    pub communication_style: Value,
    pub core_principles: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Capability {
    pub name: Value,
    pub description: Value,
    pub input: Value,
    pub output: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tool {
    pub name: Value,
    pub description: Value,
    pub usage: Value,
    pub implementation: Value,
}

/// A slash-command menu entry (module agents only).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuItem {
    pub trigger: Value,
    pub description: Value,
    pub action: Value,
    pub prompt: Value,
}
