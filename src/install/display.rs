//! Console output for the installer.

use super::InstallOutcome;
use crate::context::ModuleContext;
use crate::fs::DirOutcome;
use crate::report::rule;
use crate::settings::InstallSettings;
use std::path::Path;

/// Print one line per planned directory.
pub fn print_directory_status(settings: &InstallSettings, outcome: &InstallOutcome) {
    println!();
    println!("Directory structure:");
    for dir in &outcome.directories {
        let label = match dir.outcome {
            DirOutcome::Created => "Created",
            DirOutcome::Existed => "Exists ",
        };
        println!("  {}: {}", label, relative_to(&dir.path, &settings.project_root));
    }

    for readme in &outcome.seeded {
        println!("  Seeded: {}", relative_to(readme, &settings.project_root));
    }

    println!();
    println!("Agent files:");
    for agent in &outcome.agents {
        println!("  [PASS] {}", agent);
    }
}

/// Print next steps and the configuration summary.
pub fn print_post_install(ctx: &ModuleContext, settings: &InstallSettings) {
    let root = &settings.project_root;

    println!();
    println!("{}", rule('='));
    println!("POST-INSTALLATION INSTRUCTIONS");
    println!("{}", rule('='));
    println!();
    println!("Next steps:");
    println!();
    println!("1. Upload deal documents");
    println!("   Add documents to: {}", relative_to(&settings.data_room_dir(), root));
    println!("   Organize by category (financials, legal, operational, commercial, strategic)");
    println!();
    println!("2. Activate the module");
    println!("   Run: /manda:deal-orchestrator");
    println!();
    println!("3. Run the initial analysis");
    println!("   Data Room Audit: /manda:data-room-audit");
    println!();
    println!("4. Develop the investment storyline");
    println!("   Storyline Workshop: /manda:investment-storyline-workshop");
    println!();
    println!("Configuration summary:");
    println!("{}", rule('-'));
    println!("User:                    {}", settings.user_name);
    println!("Language:                {}", settings.communication_language);
    println!("Document language:       {}", settings.document_output_language);
    println!("Data Room:               {}", settings.data_room_dir().display());
    println!("Knowledge Base:          {}", settings.knowledge_base_dir().display());
    println!("Output Location:         {}", settings.output_dir().display());
    println!("Template Style:          {}", settings.template_preference);
    println!("Inconsistency Detection: {}", settings.inconsistency_sensitivity);
    println!("{}", rule('-'));
    println!();
    println!("Documentation:");
    println!("  Module README: {}", ctx.path("README.md").display());
    println!(
        "  RAG Implementation Guide: {}",
        ctx.agents_dir()
            .join("information-vault-rag-implementation.md")
            .display()
    );
    println!("{}", rule('='));
}

/// `path` relative to `base` when it lies beneath it, else unchanged.
fn relative_to(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}
