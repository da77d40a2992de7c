// crates/ewp2cmake/src/io.rs

//! Filesystem collaborators: descriptor loading, template directories and
//! output writing. Only available with the `std` feature.

use crate::error::EwpError;
use crate::parser::{ExtractOptions, extract_project, split_descriptor_path};
use crate::renderer::{OUTPUT_FILE_NAME, TemplateId, TemplateStore, Toolchain, render_project};
use crate::settings::WorkbenchSettings;
use crate::types::ProjectModel;
use log::{debug, info};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Loads templates from `<root>/<template file name>`.
#[derive(Debug, Clone)]
pub struct DirTemplateStore {
    root: PathBuf,
}

impl DirTemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_of(&self, id: TemplateId) -> PathBuf {
        self.root.join(id.file_name())
    }
}

impl TemplateStore for DirTemplateStore {
    fn load(&self, id: TemplateId) -> Result<String, EwpError> {
        let path = self.path_of(id);
        debug!("Loading template {}", path.display());
        match fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(EwpError::TemplateMissing(id.file_name()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Reads a descriptor and its workbench settings from disk and extracts the
/// project.
///
/// The settings are looked up in `.vscode/iar-vsc.json` next to the
/// descriptor. Nothing is written.
pub fn load_project(
    descriptor_path: &Path,
    options: &ExtractOptions,
) -> Result<ProjectModel, EwpError> {
    let xml_content = fs::read_to_string(descriptor_path)?;
    let descriptor = descriptor_path.to_string_lossy();
    let (directory, _) = split_descriptor_path(&descriptor);
    let settings = WorkbenchSettings::discover(Path::new(directory))?;
    extract_project(&xml_content, &descriptor, &settings, options)
}

/// The generated file's location: `CMakeLists.txt` next to the descriptor.
pub fn output_path(descriptor_path: &Path) -> PathBuf {
    descriptor_dir(descriptor_path).join(OUTPUT_FILE_NAME)
}

fn descriptor_dir(descriptor_path: &Path) -> &Path {
    match descriptor_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Writes `text` to `CMakeLists.txt` next to the descriptor, replacing any
/// existing file.
///
/// The text goes to a temporary file in the same directory first and is then
/// renamed over the destination, so a failed write leaves the previous file
/// untouched.
pub fn write_output(descriptor_path: &Path, text: &str) -> Result<PathBuf, EwpError> {
    let destination = output_path(descriptor_path);
    let mut staged = tempfile::NamedTempFile::new_in(descriptor_dir(descriptor_path))?;
    staged.write_all(text.as_bytes())?;
    staged.as_file().sync_all()?;
    staged.persist(&destination).map_err(|e| EwpError::Io(e.error))?;
    info!("Wrote {}", destination.display());
    Ok(destination)
}

/// Runs the whole pipeline: extract, render and write.
///
/// Returns the path of the generated file.
pub fn generate(
    descriptor_path: &Path,
    toolchain: Toolchain,
    templates: &impl TemplateStore,
    options: &ExtractOptions,
) -> Result<PathBuf, EwpError> {
    let project = load_project(descriptor_path, options)?;
    let text = render_project(&project, toolchain, templates)?;
    write_output(descriptor_path, &text)
}
