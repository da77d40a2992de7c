// crates/ewp2cmake/src/resolver/mod.rs

//! Handles the business logic of resolving a deserialized `.ewp` model into
//! the public `ProjectModel`.
//!
//! This module contains the `resolve_project` orchestrator and sub-modules
//! for the source tree and the option blocks.

use crate::error::EwpError;
use crate::model;
use crate::parser::{ExtractOptions, file_stem, normalize_separators, split_descriptor_path};
use crate::settings::WorkbenchSettings;
use crate::types::ProjectModel;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use log::{debug, info};

// --- Sub-modules ---

mod groups;
mod options;

pub use groups::flatten;

/// Resolves the final `ProjectModel` from the raw deserialized project.
pub(crate) fn resolve_project(
    project: &model::Project,
    descriptor_path: &str,
    settings: &WorkbenchSettings,
    extract_options: &ExtractOptions,
) -> Result<ProjectModel, EwpError> {
    // --- Pass 1: Pick the configuration ---
    let configuration = select_configuration(project, extract_options.configuration.as_deref())?;
    if let Some(toolchain) = &configuration.toolchain {
        debug!(
            "Using configuration '{}' (toolchain {})",
            configuration.name, toolchain.name
        );
    }

    // --- Pass 2: Descriptor path and external settings ---
    let (directory, file_name) = split_descriptor_path(descriptor_path);
    let name = file_stem(file_name).to_string();
    let sources_base = normalize_separators(directory);
    let toolkit_dir = settings.toolkit_dir();

    // --- Pass 3: Flatten the source tree ---
    // The root element is an unnamed group; it is never excluded.
    let mut sources: Vec<String> = Vec::new();
    groups::flatten_files(&project.file, &mut sources);
    for group in &project.group {
        flatten(group, &mut sources);
    }

    // --- Pass 4: Route the recognized options ---
    let mut resolved = ProjectModel {
        name,
        workspace_name: configuration.name.clone(),
        sources_base,
        toolkit_dir: Some(toolkit_dir),
        sources,
        ..Default::default()
    };
    options::apply_settings(&configuration.settings, &mut resolved)?;

    info!(
        "Extracted project '{}': {} sources, {} include dirs, {} defines",
        resolved.name,
        resolved.sources.len(),
        resolved.includes.len(),
        resolved.defines.len()
    );

    Ok(resolved)
}

/// Finds the named configuration, or the first one when no name is given.
fn select_configuration<'a>(
    project: &'a model::Project,
    name: Option<&str>,
) -> Result<&'a model::Configuration, EwpError> {
    match name {
        Some(name) => project
            .configuration
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| EwpError::UnknownConfiguration(name.to_string())),
        None => project
            .configuration
            .first()
            .ok_or(EwpError::MissingElement {
                element: "configuration",
            }),
    }
}
