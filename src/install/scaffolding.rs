//! Directory scaffolding for the installer.
//!
//! Creates the data room, knowledge base and output trees. Append-only:
//! nothing is deleted and existing files are never overwritten.

use super::DirStatus;
use crate::context::{ModuleContext, REQUIRED_AGENTS, agent_file_name};
use crate::error::{MandaError, Result};
use crate::fs::{DirOutcome, ensure_dir, write_if_absent};
use crate::settings::InstallSettings;
use std::path::PathBuf;

const DATA_ROOM_SUBDIRS: &[&str] = &[
    "upload",
    "upload/pending",
    "upload/processed",
    "upload/archived",
];
const KNOWLEDGE_BASE_SUBDIRS: &[&str] = &["vector-store", "structured-data", "metadata"];
const OUTPUT_SUBDIRS: &[&str] = &["reports", "storylines", "cims", "teasers"];

const DATA_ROOM_README: &str = "\
# Data Room

Deal documents live here, organized by category (financials, legal,
operational, commercial, strategic).

- `upload/pending/` holds documents waiting to be processed
- `upload/processed/` holds documents already indexed
- `upload/archived/` holds superseded versions
";

const KNOWLEDGE_BASE_README: &str = "\
# Knowledge Base

Indexed deal knowledge used by the Information Vault agent.

- `vector-store/` holds document embeddings
- `structured-data/` holds extracted tables and figures
- `metadata/` holds source tracking for every extracted fact
";

const OUTPUT_README: &str = "\
# Deliverables

Generated deal materials.

- `reports/` holds data room audits and analysis reports
- `storylines/` holds investment storyline drafts
- `cims/` holds confidential information memoranda
- `teasers/` holds one-page teasers
";

/// Every directory the installer creates, parents before children.
pub fn directory_plan(settings: &InstallSettings) -> Vec<PathBuf> {
    let mut plan = Vec::new();
    for (root, subdirs) in [
        (settings.data_room_dir(), DATA_ROOM_SUBDIRS),
        (settings.knowledge_base_dir(), KNOWLEDGE_BASE_SUBDIRS),
        (settings.output_dir(), OUTPUT_SUBDIRS),
    ] {
        let children: Vec<PathBuf> = subdirs.iter().map(|sub| root.join(sub)).collect();
        plan.push(root);
        plan.extend(children);
    }
    plan
}

/// Create every planned directory that does not exist yet.
pub fn create_directory_structure(settings: &InstallSettings) -> Result<Vec<DirStatus>> {
    directory_plan(settings)
        .into_iter()
        .map(|path| {
            let outcome = ensure_dir(&path)?;
            tracing::debug!(path = %path.display(), ?outcome, "directory");
            Ok(DirStatus { path, outcome })
        })
        .collect()
}

/// Write a README into each root directory created by this run, unless one
/// is already there.
pub fn seed_readmes(settings: &InstallSettings, statuses: &[DirStatus]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (root, content) in [
        (settings.data_room_dir(), DATA_ROOM_README),
        (settings.knowledge_base_dir(), KNOWLEDGE_BASE_README),
        (settings.output_dir(), OUTPUT_README),
    ] {
        let fresh = statuses
            .iter()
            .any(|s| s.path == root && s.outcome == DirOutcome::Created);
        if !fresh {
            continue;
        }

        let readme = root.join("README.md");
        if write_if_absent(&readme, content)? {
            written.push(readme);
        }
    }
    Ok(written)
}

/// Confirm every required agent file exists in the module.
pub fn verify_agent_files(ctx: &ModuleContext) -> Result<Vec<String>> {
    let mut found = Vec::with_capacity(REQUIRED_AGENTS.len());
    for code in REQUIRED_AGENTS {
        let file = agent_file_name(code);
        if !ctx.agent_path(code).is_file() {
            return Err(MandaError::InstallError(format!(
                "Missing agent file: {}",
                file
            )));
        }
        found.push(file);
    }
    Ok(found)
}
