//! Command implementations for manda.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each command resolves the module root, runs its checks,
//! prints the report, and turns a failing report into an error.

mod compile;
mod install;
mod validate_config;
mod validate_module;

#[cfg(test)]
mod tests;

use crate::cli::Command;
use crate::context::ModuleContext;
use crate::error::Result;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, module_root: Option<&Path>) -> Result<()> {
    let ctx = ModuleContext::resolve(module_root)?;
    tracing::debug!(module_root = %ctx.module_root.display(), "resolved module root");

    match command {
        Command::Compile(args) => compile::cmd_compile(&ctx, args),
        Command::ValidateConfig => validate_config::cmd_validate_config(&ctx),
        Command::Validate => validate_module::cmd_validate(&ctx),
        Command::Install(args) => install::cmd_install(&ctx, args),
    }
}
