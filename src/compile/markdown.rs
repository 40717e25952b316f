//! Agent record to Markdown rendering.
//!
//! Lines are pushed one at a time and joined with `\n`; a blank line is an
//! explicit empty entry. Sections whose source field is absent or empty are
//! skipped entirely, so the output never contains an empty heading.

use crate::model::{Agent, Capability, MenuItem, Persona, Tool};
use crate::yaml::{inline_text, scalar_to_string, text_items};
use serde_yaml::{Mapping, Value};

/// Render an agent record as Markdown. Pure: equal records give
/// byte-identical output.
pub fn render_markdown(agent: &Agent) -> String {
    let mut md = MarkdownLines::default();

    md.push(format!("# {}", agent.name));
    md.blank();
    md.push(format!("**Role:** {}", agent.role));
    md.push(format!("**Code:** {}", agent.code));
    md.push(format!("**Type:** {}", agent.agent_type));
    md.push(format!("**Version:** {}", scalar_to_string(&agent.version)));
    md.blank();

    if let Some(persona) = &agent.persona {
        push_persona(&mut md, persona);
    }

    md.push("## System Prompt");
    md.blank();
    md.push(agent.system_prompt.as_str());
    md.blank();

    if !agent.capabilities.is_empty() {
        push_capabilities(&mut md, &agent.capabilities);
    }

    if let Some(tools) = non_empty(&agent.tools) {
        push_tools(&mut md, tools);
    }

    if let Some(menu) = non_empty(&agent.menu) {
        push_menu(&mut md, menu);
    }

    if let Some(behavior) = agent.behavior.as_ref().filter(|b| !b.is_empty()) {
        push_behavior(&mut md, behavior);
    }

    let standards = agent
        .quality_standards
        .as_ref()
        .map(text_items)
        .unwrap_or_default();
    if !standards.is_empty() {
        md.push("## Quality Standards");
        md.blank();
        for standard in &standards {
            md.push(format!("- {}", standard));
        }
        md.blank();
    }

    if let Some(source) = agent.config_source.as_ref().and_then(optional_text) {
        md.push("## Configuration");
        md.blank();
        md.push(format!("**Source:** {}", source));
        md.blank();
    }

    md.finish()
}

#[derive(Default)]
struct MarkdownLines {
    lines: Vec<String>,
}

impl MarkdownLines {
    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn bullets(&mut self, heading: &str, items: &[String]) {
        self.push(heading);
        for item in items {
            self.push(format!("- {}", item));
        }
        self.blank();
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

fn non_empty<T>(items: &Option<Vec<T>>) -> Option<&[T]> {
    items.as_deref().filter(|items| !items.is_empty())
}

/// One-line text of an optional leaf, or `None` when it renders empty.
fn optional_text(value: &Value) -> Option<String> {
    Some(inline_text(value)).filter(|text| !text.is_empty())
}

fn push_persona(md: &mut MarkdownLines, persona: &Persona) {
    let groups: Vec<(&str, Vec<String>)> = [
        ("**Expertise:**", &persona.expertise),
        ("**Communication Style:**", &persona.communication_style),
        ("**Core Principles:**", &persona.core_principles),
    ]
    .into_iter()
    .map(|(heading, items)| (heading, text_items(items)))
    .filter(|(_, items)| !items.is_empty())
    .collect();

    if groups.is_empty() {
        return;
    }

    md.push("## Persona");
    md.blank();
    for (heading, items) in &groups {
        md.bullets(heading, items);
    }
}

fn push_capabilities(md: &mut MarkdownLines, capabilities: &[Capability]) {
    md.push("## Capabilities");
    md.blank();
    for cap in capabilities {
        md.push(format!("### {}", inline_text(&cap.name)));
        md.blank();
        md.push(format!("**Description:** {}", inline_text(&cap.description)));
        if let Some(input) = optional_text(&cap.input) {
            md.push(format!("**Input:** {}", input));
        }
        if let Some(output) = optional_text(&cap.output) {
            md.push(format!("**Output:** {}", output));
        }
        md.blank();
    }
}

fn push_tools(md: &mut MarkdownLines, tools: &[Tool]) {
    md.push("## Tools");
    md.blank();
    for tool in tools {
        md.push(format!("### {}", inline_text(&tool.name)));
        md.blank();
        md.push(format!("**Description:** {}", inline_text(&tool.description)));
        if let Some(usage) = optional_text(&tool.usage) {
            md.push(format!("**Usage:** {}", usage));
        }
        if let Some(imp) = optional_text(&tool.implementation) {
            md.push(format!("**Implementation:** {}", imp));
        }
        md.blank();
    }
}

fn push_menu(md: &mut MarkdownLines, menu: &[MenuItem]) {
    md.push("## Menu");
    md.blank();
    for item in menu {
        md.push(format!("### /{}", inline_text(&item.trigger)));
        md.blank();
        md.push(format!("**Description:** {}", inline_text(&item.description)));
        md.push(format!("**Action:** {}", inline_text(&item.action)));
        if let Some(prompt) = optional_text(&item.prompt) {
            md.blank();
            md.push("**Prompt:**");
            md.push("```");
            md.push(prompt);
            md.push("```");
        }
        md.blank();
    }
}

fn push_behavior(md: &mut MarkdownLines, behavior: &Mapping) {
    md.push("## Behavior Flags");
    md.blank();
    for (key, value) in behavior {
        md.push(format!(
            "- **{}:** {}",
            scalar_to_string(key),
            scalar_to_string(value)
        ));
    }
    md.blank();
}
