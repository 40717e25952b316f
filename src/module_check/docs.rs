//! Documentation completeness.

use crate::context::ModuleContext;
use crate::report::ValidationReport;

const README_SECTIONS: &[&str] = &[
    "Overview",
    "Architecture",
    "Agent System",
    "Workflows",
    "Installation",
    "Quick Start",
    "Development Status",
];

const USER_GUIDE_TOPICS: &[&str] = &[
    "Agent System",
    "Workflows",
    "Knowledge Base",
    "Data Room Management",
    "Inconsistency Detection",
    "Storyline Development",
];

const README_MIN_CHARS: usize = 3000;
const QUICKSTART_DETAILED_CHARS: usize = 5000;
const USER_GUIDE_DETAILED_CHARS: usize = 20000;

/// Check the README and the guides under `docs/`.
pub fn validate_documentation(ctx: &ModuleContext) -> ValidationReport {
    let mut report = ValidationReport::new();

    if let Some(readme) = read_doc(ctx, "README.md", &mut report) {
        check_readme(&readme, &mut report);
    }

    if let Some(quickstart) = read_doc(ctx, "docs/QUICKSTART.md", &mut report) {
        check_quickstart(&quickstart, &mut report);
    }

    if let Some(guide) = read_doc(ctx, "docs/USER-GUIDE.md", &mut report) {
        check_user_guide(&guide, &mut report);
    }

    if let Some(roadmap) = read_doc(ctx, "docs/COMPONENT-ROADMAP.md", &mut report) {
        if roadmap.contains("Completed Components") && roadmap.contains("Remaining Work") {
            report.pass("Component Roadmap tracks progress");
        } else {
            report.warn("Component Roadmap missing progress tracking");
        }
    }

    report
}

/// Read a documentation file, recording an error under its file name if it
/// is missing or unreadable.
fn read_doc(ctx: &ModuleContext, relative: &str, report: &mut ValidationReport) -> Option<String> {
    let path = ctx.path(relative);
    let name = relative.rsplit('/').next().unwrap_or(relative);
    if !path.is_file() {
        report.error(format!("{} not found", name));
        return None;
    }
    match std::fs::read_to_string(&path) {
        Ok(content) => Some(content),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "unreadable documentation file");
            report.error(format!("{} could not be read: {}", name, e));
            None
        }
    }
}

fn check_readme(readme: &str, report: &mut ValidationReport) {
    for section in README_SECTIONS {
        if readme.contains(section) {
            report.pass(format!("README contains '{}' section", section));
        } else {
            report.error(format!("README missing '{}' section", section));
        }
    }

    let chars = readme.chars().count();
    if chars > README_MIN_CHARS {
        report.pass(format!("README is comprehensive ({} chars)", chars));
    } else {
        report.warn(format!("README seems short ({} chars)", chars));
    }
}

fn check_quickstart(quickstart: &str, report: &mut ValidationReport) {
    if quickstart.contains("Installation") && quickstart.contains("First-Time Setup") {
        report.pass("Quick Start Guide covers installation and setup");
    } else {
        report.error("Quick Start Guide missing key sections");
    }

    let chars = quickstart.chars().count();
    if chars > QUICKSTART_DETAILED_CHARS {
        report.pass(format!("Quick Start Guide is detailed ({} chars)", chars));
    }
}

fn check_user_guide(guide: &str, report: &mut ValidationReport) {
    let covered = USER_GUIDE_TOPICS
        .iter()
        .filter(|topic| guide.contains(*topic))
        .count();

    if covered == USER_GUIDE_TOPICS.len() {
        report.pass(format!(
            "User Guide covers all {} key topics",
            USER_GUIDE_TOPICS.len()
        ));
    } else {
        report.warn(format!(
            "User Guide missing some topics ({}/{})",
            covered,
            USER_GUIDE_TOPICS.len()
        ));
    }

    let chars = guide.chars().count();
    if chars > USER_GUIDE_DETAILED_CHARS {
        report.pass(format!("User Guide is comprehensive ({} chars)", chars));
    }
}
