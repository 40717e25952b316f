//! Whole-module validation.
//!
//! Runs four independent steps in a fixed order and never short-circuits:
//!
//! 1. Configuration validation
//! 2. Agent compilation check
//! 3. File structure verification
//! 4. Documentation completeness
//!
//! Each step owns its report. Overall success is the conjunction of all four.

mod docs;
mod structure;

#[cfg(test)]
mod tests;

use crate::compile::compile_agents;
use crate::context::ModuleContext;
use crate::report::ValidationReport;
use crate::validate::validate_config;

pub use docs::validate_documentation;
pub use structure::{REQUIRED_DIRS, required_files, validate_file_structure};

/// Reports from every step of a module validation run.
#[derive(Debug, Default)]
pub struct ModuleValidation {
    pub config: ValidationReport,
    pub compilation: ValidationReport,
    pub structure: ValidationReport,
    pub documentation: ValidationReport,
}

impl ModuleValidation {
    /// Step names and reports, in execution order.
    pub fn steps(&self) -> [(&'static str, &ValidationReport); 4] {
        [
            ("Configuration Validation", &self.config),
            ("Agent Compilation", &self.compilation),
            ("File Structure", &self.structure),
            ("Documentation", &self.documentation),
        ]
    }

    pub fn success(&self) -> bool {
        self.steps().iter().all(|(_, report)| report.success())
    }

    pub fn error_count(&self) -> usize {
        self.steps().iter().map(|(_, r)| r.errors.len()).sum()
    }
}

/// Run every step against a module.
pub fn validate_module(ctx: &ModuleContext) -> ModuleValidation {
    tracing::info!(step = 1, "configuration validation");
    let config = validate_config(ctx);

    tracing::info!(step = 2, "agent compilation check");
    let compilation = compile_agents(ctx).report;

    tracing::info!(step = 3, "file structure verification");
    let structure = validate_file_structure(ctx);

    tracing::info!(step = 4, "documentation completeness");
    let documentation = validate_documentation(ctx);

    ModuleValidation {
        config,
        compilation,
        structure,
        documentation,
    }
}
