//! Implementation of the `manda install` command.

use crate::cli::InstallArgs;
use crate::context::ModuleContext;
use crate::error::{MandaError, Result};
use crate::install::{print_directory_status, print_post_install, run_install};
use crate::settings::InstallSettings;

/// Execute the `manda install` command.
pub fn cmd_install(ctx: &ModuleContext, args: InstallArgs) -> Result<()> {
    let settings = build_settings(args)?;

    println!("Installing M&A Deal Intelligence Platform...");
    println!("Project root: {}", settings.project_root.display());

    let outcome = run_install(ctx, &settings)?;

    print_directory_status(&settings, &outcome);
    print_post_install(ctx, &settings);

    println!();
    println!(
        "Installed successfully ({} created, {} already present).",
        outcome.created_count(),
        outcome.directories.len() - outcome.created_count()
    );
    Ok(())
}

/// Settings file (if any), then CLI overrides. The project root is made
/// absolute against the working directory.
pub(crate) fn build_settings(args: InstallArgs) -> Result<InstallSettings> {
    let mut settings = match &args.config {
        Some(path) => InstallSettings::load(path)?,
        None => InstallSettings::default(),
    };

    if let Some(root) = args.project_root {
        settings.project_root = root;
    }
    if let Some(path) = args.data_room_path {
        settings.data_room_path = path;
    }
    if let Some(path) = args.knowledge_base_path {
        settings.knowledge_base_path = path;
    }
    if let Some(path) = args.output_location {
        settings.output_location = path;
    }
    if let Some(template) = args.template_preference {
        settings.template_preference = template;
    }
    if let Some(sensitivity) = args.inconsistency_sensitivity {
        settings.inconsistency_sensitivity = sensitivity;
    }
    if args.seed_docs {
        settings.seed_docs = true;
    }

    if settings.project_root.is_relative() {
        let cwd = std::env::current_dir().map_err(|e| {
            MandaError::UserError(format!("failed to get current working directory: {}", e))
        })?;
        settings.project_root = cwd.join(&settings.project_root);
    }

    settings.validate()?;
    Ok(settings)
}
