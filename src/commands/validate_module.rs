//! Implementation of the `manda validate` command.

use crate::context::ModuleContext;
use crate::error::{MandaError, Result};
use crate::module_check::validate_module;
use crate::report::{print_report, print_step_summary, rule};

const STEP_TITLES: [&str; 4] = [
    "STEP 1: Configuration Validation",
    "STEP 2: Agent Compilation Check",
    "STEP 3: File Structure Verification",
    "STEP 4: Documentation Completeness",
];

/// Execute the `manda validate` command.
///
/// Every step runs and is printed even when an earlier one fails.
pub fn cmd_validate(ctx: &ModuleContext) -> Result<()> {
    println!("Complete Module Validation");
    println!("Module root: {}", ctx.module_root.display());

    let result = validate_module(ctx);

    for (title, (_, report)) in STEP_TITLES.iter().zip(result.steps()) {
        print_report(title, report);
    }

    println!();
    println!("{}", rule('='));
    println!("FINAL VALIDATION SUMMARY");
    println!("{}", rule('='));
    print_step_summary(&result.steps());
    println!();

    if !result.success() {
        println!("Module validation FAILED. Fix the errors reported in each step and re-run.");
        return Err(MandaError::ValidationError(format!(
            "module has {} error(s)",
            result.error_count()
        )));
    }

    println!("Module validation PASSED.");
    println!();
    println!("Next steps:");
    println!("  1. Review any warnings");
    println!("  2. Run the installer: manda install");
    println!("  3. Upload test documents to the data room");
    println!("  4. Test workflows end-to-end");
    Ok(())
}
