//! Validation reports.
//!
//! A [`ValidationReport`] is owned by exactly one run of one step. Check
//! functions take `&mut ValidationReport` and append to it; composite steps
//! keep their sub-reports separate and only merge them for display.

mod display;

pub use display::{print_report, print_step_summary, rule};

/// Outcome of one validation step: passed notes, warnings and errors, each in
/// the order they were recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub passed: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pass(&mut self, message: impl Into<String>) {
        self.passed.push(message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(warning = %message, "check warning");
        self.warnings.push(message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(error = %message, "check error");
        self.errors.push(message);
    }

    /// A report succeeds when it holds no errors. Warnings never fail a run.
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }

    /// One-line count summary used in report footers.
    pub fn summary_line(&self) -> String {
        format!(
            "{} passed, {} warnings, {} errors",
            self.passed.len(),
            self.warnings.len(),
            self.errors.len()
        )
    }
}
