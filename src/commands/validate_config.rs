//! Implementation of the `manda validate-config` command.

use crate::context::ModuleContext;
use crate::error::{MandaError, Result};
use crate::report::print_report;
use crate::validate::validate_config;

/// Execute the `manda validate-config` command.
pub fn cmd_validate_config(ctx: &ModuleContext) -> Result<()> {
    println!("Configuration Validation");
    println!("Module root: {}", ctx.module_root.display());

    let report = validate_config(ctx);
    print_report("VALIDATION RESULTS", &report);

    if !report.success() {
        println!();
        println!("Please fix the errors above and re-run validation.");
        return Err(MandaError::ValidationError(format!(
            "configuration has {} error(s)",
            report.errors.len()
        )));
    }

    println!();
    println!("Configuration validation passed.");
    Ok(())
}
