//! CLI argument parsing for manda.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::model::Sensitivity;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Manda: installer and validator for the M&A deal intelligence agent module.
///
/// A module is a directory of agent definitions (`agents/*.agent.yaml`),
/// workflows (`workflows/<code>/`), an install configuration
/// (`_module-installer/install-config.yaml`) and documentation.
#[derive(Parser, Debug)]
#[command(name = "manda")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Module root. Defaults to the nearest ancestor of the working directory
    /// containing `_module-installer/`.
    #[arg(long, global = true, value_name = "DIR")]
    pub module_root: Option<PathBuf>,

    /// Increase diagnostic output (-v info, -vv debug). `MANDA_LOG` overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for manda.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile agent definitions to Markdown and check config variables.
    Compile(CompileArgs),

    /// Validate the install configuration, agents, workflows and their
    /// cross-references.
    ValidateConfig,

    /// Run every module check: configuration, compilation, file structure
    /// and documentation.
    Validate,

    /// Install the module into a project.
    ///
    /// Creates the data room, knowledge base and output directory trees.
    /// Safe to run repeatedly; nothing is overwritten.
    Install(InstallArgs),
}

/// Arguments for the `compile` command.
#[derive(Parser, Debug)]
pub struct CompileArgs {
    /// Write each compiled agent to `<DIR>/<code>.md`.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

/// Arguments for the `install` command.
#[derive(Parser, Debug)]
pub struct InstallArgs {
    /// Settings file (YAML). Flags below override its values.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project to install into.
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Deal document storage, relative to the project root.
    #[arg(long, value_name = "DIR")]
    pub data_room_path: Option<String>,

    /// Knowledge base storage, relative to the project root.
    #[arg(long, value_name = "DIR")]
    pub knowledge_base_path: Option<String>,

    /// Generated deliverables, relative to the project root.
    #[arg(long, value_name = "DIR")]
    pub output_location: Option<String>,

    /// CIM template style.
    #[arg(long, value_name = "NAME")]
    pub template_preference: Option<String>,

    /// How aggressively inconsistencies are flagged.
    #[arg(long, value_name = "LEVEL", value_parser = parse_sensitivity)]
    pub inconsistency_sensitivity: Option<Sensitivity>,

    /// Write an explanatory README into newly created root directories.
    #[arg(long)]
    pub seed_docs: bool,
}

fn parse_sensitivity(s: &str) -> Result<Sensitivity, String> {
    Sensitivity::from_str(s)
        .ok_or_else(|| format!("invalid sensitivity '{}': expected relaxed, standard or strict", s))
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
