//! Installer: prepares a project for the deal intelligence module.
//!
//! # Steps
//!
//! 1. Check preconditions (platform version, project root). Nothing is
//!    touched if these fail.
//! 2. Create the data room, knowledge base and output directory trees.
//!    Existing directories are left alone.
//! 3. Optionally seed a README into root directories created by this run.
//! 4. Confirm the module ships every required agent file.
//!
//! Running the installer again over the same project is a no-op apart from
//! reporting every directory as already present.

mod display;
mod prerequisites;
mod scaffolding;


use crate::context::ModuleContext;
use crate::error::Result;
use crate::fs::DirOutcome;
use crate::settings::InstallSettings;
use std::path::PathBuf;

pub use display::{print_directory_status, print_post_install};
pub use prerequisites::{MIN_PLATFORM_VERSION, check_prerequisites, platform_version};
pub use scaffolding::{
    create_directory_structure, directory_plan, seed_readmes, verify_agent_files,
};

/// One planned directory and what the installer did with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirStatus {
    pub path: PathBuf,
    pub outcome: DirOutcome,
}

/// Everything an install run did.
#[derive(Debug, Clone, Default)]
pub struct InstallOutcome {
    pub directories: Vec<DirStatus>,
    /// README files written by seeding.
    pub seeded: Vec<PathBuf>,
    /// Agent files confirmed present, in required order.
    pub agents: Vec<String>,
}

impl InstallOutcome {
    /// Number of directories this run created.
    pub fn created_count(&self) -> usize {
        self.directories
            .iter()
            .filter(|d| d.outcome == DirOutcome::Created)
            .count()
    }
}

/// Run the installer against a module.
pub fn run_install(ctx: &ModuleContext, settings: &InstallSettings) -> Result<InstallOutcome> {
    tracing::info!(project_root = %settings.project_root.display(), "installing module");

    check_prerequisites(settings, &platform_version()?)?;

    let directories = create_directory_structure(settings)?;

    let seeded = if settings.seed_docs {
        seed_readmes(settings, &directories)?
    } else {
        Vec::new()
    };

    let agents = verify_agent_files(ctx)?;

    Ok(InstallOutcome {
        directories,
        seeded,
        agents,
    })
}
