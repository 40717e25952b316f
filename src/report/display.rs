//! Console rendering for reports.

use super::ValidationReport;

/// Width of the horizontal rules framing each report.
const RULE_WIDTH: usize = 70;

/// A horizontal rule of the given character.
pub fn rule(ch: char) -> String {
    std::iter::repeat_n(ch, RULE_WIDTH).collect()
}

/// Print a full report: passed checks, warnings, errors and a summary line.
pub fn print_report(title: &str, report: &ValidationReport) {
    println!();
    println!("{}", rule('='));
    println!("{}", title);
    println!("{}", rule('='));

    if !report.passed.is_empty() {
        println!();
        println!("Passed checks ({}):", report.passed.len());
        for msg in &report.passed {
            println!("  [PASS] {}", msg);
        }
    }

    if !report.warnings.is_empty() {
        println!();
        println!("Warnings ({}):", report.warnings.len());
        for msg in &report.warnings {
            println!("  [WARN] {}", msg);
        }
    }

    if !report.errors.is_empty() {
        println!();
        println!("Errors ({}):", report.errors.len());
        for msg in &report.errors {
            println!("  [FAIL] {}", msg);
        }
    }

    println!();
    println!("{}", rule('='));
    println!("Summary: {}", report.summary_line());
    println!("{}", rule('='));
}

/// Print one line per step of a composite run, with its error and warning
/// counts underneath.
pub fn print_step_summary(steps: &[(&str, &ValidationReport)]) {
    println!();
    println!("Validation checks:");
    println!();
    for (name, report) in steps {
        let status = if report.success() { "PASS" } else { "FAIL" };
        println!("  [{}] {}", status, name);
        if !report.errors.is_empty() {
            println!("         Errors: {}", report.errors.len());
        }
        if !report.warnings.is_empty() {
            println!("         Warnings: {}", report.warnings.len());
        }
    }
}
