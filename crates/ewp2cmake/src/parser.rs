// crates/ewp2cmake/src/parser.rs

use crate::error::EwpError;
use crate::model;
use crate::resolver;
use crate::settings::WorkbenchSettings;
use crate::types::ProjectModel;
use alloc::string::String;
use log::debug;

/// The project-root placeholder IAR writes in front of project-relative paths.
pub const PROJ_DIR_TOKEN: &str = "$PROJ_DIR$";

/// Knobs for the extraction step.
#[derive(Debug, Default, Clone)]
pub struct ExtractOptions {
    /// Name of the `<configuration>` to read options from.
    /// `None` selects the first configuration in the descriptor.
    pub configuration: Option<String>,
}

/// Parses an `.ewp` descriptor and extracts the canonical `ProjectModel`.
///
/// `descriptor_path` is the path of the descriptor as given by the caller; the
/// project name is derived from its file name and the sources base from its
/// directory part. The path is never touched on disk.
///
/// # Errors
/// Returns an `EwpError` if the XML is malformed, a required element is
/// missing, or the requested configuration does not exist.
pub fn extract_project(
    xml_content: &str,
    descriptor_path: &str,
    settings: &WorkbenchSettings,
    options: &ExtractOptions,
) -> Result<ProjectModel, EwpError> {
    // 1. Deserialize the raw XML string into our internal model.
    let project: model::Project = quick_xml::de::from_str(xml_content)?;
    debug!(
        "Parsed descriptor {} (fileVersion {})",
        descriptor_path,
        project.file_version.as_deref().unwrap_or("?")
    );

    // 2. Resolve the model into the public type.
    resolver::resolve_project(&project, descriptor_path, settings, options)
}

// --- Path helpers ---

/// Normalizes a project-relative path.
///
/// Backslashes become forward slashes, every `$PROJ_DIR$` token is removed
/// and leading slashes are stripped. Applying it twice changes nothing.
pub fn normalize_path(s: &str) -> String {
    let mut out = normalize_separators(s);
    while out.contains(PROJ_DIR_TOKEN) {
        out = out.replace(PROJ_DIR_TOKEN, "");
    }
    match out.find(|c: char| c != '/') {
        Some(start) => out.split_off(start),
        None => String::new(),
    }
}

/// Replaces backslashes with forward slashes and leaves everything else alone.
pub fn normalize_separators(s: &str) -> String {
    s.replace('\\', "/")
}

/// Splits a descriptor path into its directory part and its file name.
/// Both separator styles are accepted.
pub fn split_descriptor_path(path: &str) -> (&str, &str) {
    match path.rfind(['/', '\\']) {
        Some(pos) => (&path[..pos], &path[pos + 1..]),
        None => ("", path),
    }
}

/// Strips the last extension from a file name (`blinky.ewp` -> `blinky`).
/// A leading dot is not treated as an extension separator.
pub fn file_stem(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(pos) if pos > 0 => &file_name[..pos],
        _ => file_name,
    }
}
