//! Module root resolution.
//!
//! Every command operates on a module root: the directory holding `agents/`,
//! `workflows/`, `_module-installer/` and `docs/`. This module finds that root
//! and exposes the well-known paths beneath it so checks never build paths by
//! hand.

use crate::error::{MandaError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Directory holding the install configuration.
pub const INSTALLER_DIR: &str = "_module-installer";

/// File name of the install configuration inside [`INSTALLER_DIR`].
pub const INSTALL_CONFIG_FILE: &str = "install-config.yaml";

/// Suffix shared by all agent definition files.
pub const AGENT_FILE_SUFFIX: &str = ".agent.yaml";

/// Agent codes every module must ship, in display order.
pub const REQUIRED_AGENTS: &[&str] = &[
    "deal-orchestrator",
    "information-vault",
    "company-analyst",
    "finance-analyst",
    "story-architect",
];

/// Workflow codes every module must ship.
pub const REQUIRED_WORKFLOWS: &[&str] = &["data-room-audit", "investment-storyline-workshop"];

/// File name of an agent definition for the given code.
pub fn agent_file_name(code: &str) -> String {
    format!("{}{}", code, AGENT_FILE_SUFFIX)
}

/// Resolved paths for one module. All paths are absolute when built through
/// [`ModuleContext::resolve`].
#[derive(Debug, Clone)]
pub struct ModuleContext {
    /// The module root directory.
    pub module_root: PathBuf,
}

impl ModuleContext {
    /// Resolve the module root.
    ///
    /// An explicit root wins. Otherwise the nearest ancestor of the working
    /// directory that contains `_module-installer/` is used, falling back to
    /// the working directory itself.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            MandaError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        match explicit {
            Some(root) => {
                let root = if root.is_absolute() {
                    root.to_path_buf()
                } else {
                    cwd.join(root)
                };
                if !root.is_dir() {
                    return Err(MandaError::UserError(format!(
                        "module root '{}' does not exist or is not a directory",
                        root.display()
                    )));
                }
                Ok(Self::at(root))
            }
            None => Ok(Self::discover_from(&cwd)),
        }
    }

    /// Walk upward from `start` looking for a directory that contains the
    /// installer directory.
    pub fn discover_from(start: &Path) -> Self {
        let found = start
            .ancestors()
            .find(|dir| dir.join(INSTALLER_DIR).is_dir())
            .unwrap_or(start);
        Self::at(found.to_path_buf())
    }

    /// Build a context rooted at a known directory.
    pub fn at<P: Into<PathBuf>>(module_root: P) -> Self {
        Self {
            module_root: module_root.into(),
        }
    }

    pub fn agents_dir(&self) -> PathBuf {
        self.module_root.join("agents")
    }

    pub fn workflows_dir(&self) -> PathBuf {
        self.module_root.join("workflows")
    }

    pub fn installer_dir(&self) -> PathBuf {
        self.module_root.join(INSTALLER_DIR)
    }

    /// Path to `_module-installer/install-config.yaml`.
    pub fn install_config_path(&self) -> PathBuf {
        self.installer_dir().join(INSTALL_CONFIG_FILE)
    }

    /// Path to `agents/<code>.agent.yaml`.
    pub fn agent_path(&self, code: &str) -> PathBuf {
        self.agents_dir().join(agent_file_name(code))
    }

    /// Path to `workflows/<code>/`.
    pub fn workflow_dir(&self, code: &str) -> PathBuf {
        self.workflows_dir().join(code)
    }

    /// Path to a file relative to the module root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.module_root.join(relative)
    }
}
