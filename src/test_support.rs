use crate::context::{ModuleContext, REQUIRED_AGENTS, REQUIRED_WORKFLOWS, agent_file_name};
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A complete, valid module in a temporary directory. Tests break it in
/// targeted ways through `write`/`remove`.
pub(crate) struct ModuleFixture {
    dir: TempDir,
}

impl ModuleFixture {
    pub(crate) fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().unwrap(),
        };

        fixture.write(
            "_module-installer/install-config.yaml",
            VALID_INSTALL_CONFIG,
        );

        for (i, code) in REQUIRED_AGENTS.iter().enumerate() {
            let agent_type = ["module", "service", "expert"][i % 3];
            fixture.write(
                &format!("agents/{}", agent_file_name(code)),
                &agent_yaml(code, agent_type),
            );
        }
        fixture.write(
            "agents/information-vault-rag-implementation.md",
            "# RAG Implementation\n",
        );

        for code in REQUIRED_WORKFLOWS {
            fixture.write(
                &format!("workflows/{}/workflow.yaml", code),
                &workflow_yaml(code),
            );
            fixture.write(
                &format!("workflows/{}/instructions.md", code),
                "# Instructions\n",
            );
            fixture.write(
                &format!("workflows/{}/template.md", code),
                "# Template\n",
            );
        }
        fixture.write(
            "workflows/investment-storyline-workshop/teaser-template.md",
            "# Teaser\n",
        );

        fixture.write("tasks/kickoff.md", "# Kickoff\n");
        fixture.write("cim-templates/standard.md", "# CIM\n");
        fixture.write("data/.gitkeep", "");

        fixture.write("README.md", &readme());
        fixture.write(
            "docs/QUICKSTART.md",
            "# Quick Start\n\n## Installation\n\nRun the installer.\n\n## First-Time Setup\n\nUpload documents.\n",
        );
        fixture.write(
            "docs/USER-GUIDE.md",
            "# User Guide\n\n## Agent System\n## Workflows\n## Knowledge Base\n\
             ## Data Room Management\n## Inconsistency Detection\n## Storyline Development\n",
        );
        fixture.write(
            "docs/COMPONENT-ROADMAP.md",
            "# Roadmap\n\n## Completed Components\n\n- agents\n\n## Remaining Work\n\n- CIM templates\n",
        );

        fixture
    }

    pub(crate) fn root(&self) -> &Path {
        self.dir.path()
    }

    pub(crate) fn ctx(&self) -> ModuleContext {
        ModuleContext::at(self.dir.path())
    }

    pub(crate) fn write(&self, relative: &str, content: &str) {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub(crate) fn remove(&self, relative: &str) {
        let path = self.dir.path().join(relative);
        if path.is_dir() {
            std::fs::remove_dir_all(path).unwrap();
        } else {
            std::fs::remove_file(path).unwrap();
        }
    }
}

pub(crate) const VALID_INSTALL_CONFIG: &str = r#"
module_name: M&A Deal Intelligence Platform
module_code: manda
module_version: 1.0.0

data_room_path:
  prompt: Where should deal documents be stored?
  default: data/deals
  result: "{project-root}/{value}"

output_location:
  prompt: Where should generated deliverables be written?
  default: output/manda
  result: "{project-root}/{value}"

knowledge_base_path:
  prompt: Where should the knowledge base live?
  default: data/knowledge-base
  result: "{project-root}/{value}"

template_preference:
  prompt: Which CIM template style do you prefer?
  default: standard
  result: "{value}"
  single-select:
    - value: standard
      label: Standard
    - value: detailed
      label: Detailed

inconsistency_sensitivity:
  prompt: How aggressively should inconsistencies be flagged?
  default: standard
  result: "{value}"
  single-select:
    - value: relaxed
      label: Relaxed
    - value: standard
      label: Standard
    - value: strict
      label: Strict

agents:
  - code: deal-orchestrator
  - code: information-vault
  - code: company-analyst
  - code: finance-analyst
  - code: story-architect

workflows:
  - code: data-room-audit
  - code: investment-storyline-workshop
"#;

pub(crate) fn agent_yaml(code: &str, agent_type: &str) -> String {
    format!(
        r#"name: {code} agent
role: Specialist for {code}
code: {code}
type: {agent_type}
version: 1.0.0
config_source: "{{project-root}}/_module-installer/install-config.yaml"
system_prompt: |
  You are the {code} agent of the deal intelligence platform. Write all
  deliverables to {{{{output_location}}}} and cite every source document.
capabilities:
  - name: Analyze
    description: Produces the {code} analysis
    input: Data room documents
    output: Markdown report
"#
    )
}

pub(crate) fn workflow_yaml(code: &str) -> String {
    format!(
        r#"name: {code} workflow
code: {code}
description: Runs the {code} procedure
template: "{{project-root}}/workflows/{code}/template.md"
inputs:
  deal_name:
    description: Name of the deal
"#
    )
}

fn readme() -> String {
    let mut readme = String::from(
        "# M&A Deal Intelligence Platform\n\n## Overview\n\n## Architecture\n\n\
         ## Agent System\n\n## Workflows\n\n## Installation\n\n## Quick Start\n\n\
         ## Development Status\n\n",
    );
    while readme.len() <= 3000 {
        readme.push_str("The platform turns a raw data room into a structured deal narrative.\n");
    }
    readme
}
