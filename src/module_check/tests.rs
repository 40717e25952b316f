use super::*;
use crate::test_support::ModuleFixture;

#[test]
fn test_valid_module_passes_every_step() {
    let fixture = ModuleFixture::new();

    let result = validate_module(&fixture.ctx());

    for (name, report) in result.steps() {
        assert!(report.success(), "{} errors: {:?}", name, report.errors);
    }
    assert!(result.success());
    assert_eq!(result.error_count(), 0);
    assert!(result.structure.warnings.is_empty());
    assert!(result.documentation.warnings.is_empty());
}

#[test]
fn test_steps_do_not_short_circuit() {
    let fixture = ModuleFixture::new();
    fixture.remove("_module-installer/install-config.yaml");
    fixture.remove("docs/USER-GUIDE.md");

    let result = validate_module(&fixture.ctx());

    assert!(!result.success());
    assert_eq!(result.config.errors, vec!["install-config.yaml not found"]);
    assert!(
        result
            .compilation
            .errors
            .contains(&"install-config.yaml not found".to_string())
    );
    assert_eq!(
        result.structure.errors,
        vec![
            "Missing file: _module-installer/install-config.yaml",
            "Missing file: docs/USER-GUIDE.md",
        ]
    );
    assert_eq!(result.documentation.errors, vec!["USER-GUIDE.md not found"]);
}

#[test]
fn test_structure_reports_missing_dirs_and_files() {
    let fixture = ModuleFixture::new();
    fixture.remove("data");
    fixture.remove("workflows/investment-storyline-workshop/teaser-template.md");

    let report = validate_file_structure(&fixture.ctx());

    assert_eq!(
        report.errors,
        vec![
            "Missing directory: data",
            "Missing file: workflows/investment-storyline-workshop/teaser-template.md",
        ]
    );
}

#[test]
fn test_structure_warns_on_empty_optional_dirs() {
    let fixture = ModuleFixture::new();
    fixture.remove("tasks/kickoff.md");
    fixture.remove("cim-templates/standard.md");

    let report = validate_file_structure(&fixture.ctx());

    assert!(report.success());
    assert_eq!(report.warnings.len(), 2);
    assert!(report.warnings[0].starts_with("tasks/ directory is empty"));
    assert!(report.warnings[1].starts_with("cim-templates/ directory is empty"));
}

#[test]
fn test_missing_tasks_dir_is_error_not_warning() {
    let fixture = ModuleFixture::new();
    fixture.remove("tasks");

    let report = validate_file_structure(&fixture.ctx());

    assert_eq!(report.errors, vec!["Missing directory: tasks"]);
    assert!(report.warnings.is_empty());
}

#[test]
fn test_required_files_cover_agents_and_workflows() {
    let files = required_files();

    assert_eq!(files.len(), 18);
    assert!(files.contains(&"agents/story-architect.agent.yaml".to_string()));
    assert!(files.contains(&"workflows/data-room-audit/instructions.md".to_string()));
    assert!(!files.iter().any(|f| f.ends_with(".js")));
}

#[test]
fn test_readme_missing_section_and_short() {
    let fixture = ModuleFixture::new();
    fixture.write(
        "README.md",
        "# Module\n\n## Overview\n## Architecture\n## Agent System\n## Workflows\n\
         ## Installation\n## Quick Start\n",
    );

    let report = validate_documentation(&fixture.ctx());

    assert_eq!(report.errors, vec!["README missing 'Development Status' section"]);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].starts_with("README seems short ("));
}

#[test]
fn test_quickstart_without_setup_section() {
    let fixture = ModuleFixture::new();
    fixture.write("docs/QUICKSTART.md", "# Quick Start\n\n## Installation\n");

    let report = validate_documentation(&fixture.ctx());

    assert_eq!(report.errors, vec!["Quick Start Guide missing key sections"]);
}

#[test]
fn test_user_guide_partial_topics_is_warning() {
    let fixture = ModuleFixture::new();
    fixture.write(
        "docs/USER-GUIDE.md",
        "# Guide\n## Agent System\n## Workflows\n## Knowledge Base\n",
    );

    let report = validate_documentation(&fixture.ctx());

    assert!(report.success());
    assert_eq!(report.warnings, vec!["User Guide missing some topics (3/6)"]);
}

#[test]
fn test_roadmap_without_progress_tracking() {
    let fixture = ModuleFixture::new();
    fixture.write("docs/COMPONENT-ROADMAP.md", "# Roadmap\n\nEverything is planned.\n");

    let report = validate_documentation(&fixture.ctx());

    assert!(report.success());
    assert_eq!(
        report.warnings,
        vec!["Component Roadmap missing progress tracking"]
    );
}

#[test]
fn test_long_guides_earn_detail_notes() {
    let fixture = ModuleFixture::new();
    let mut quickstart = String::from("## Installation\n## First-Time Setup\n");
    quickstart.push_str(&"Step details.\n".repeat(400));
    fixture.write("docs/QUICKSTART.md", &quickstart);

    let report = validate_documentation(&fixture.ctx());

    assert!(
        report
            .passed
            .iter()
            .any(|p| p.starts_with("Quick Start Guide is detailed ("))
    );
}
