//! Installer settings.
//!
//! `InstallSettings` holds the answers the installer needs: where the project
//! lives, where deal documents, the knowledge base and generated deliverables
//! go, and the user's preferences. Settings come from an optional YAML file
//! (unknown keys are ignored), then CLI flags override individual values.

mod model;
mod operations;

#[cfg(test)]
mod tests;

pub use model::InstallSettings;
