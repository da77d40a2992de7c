// crates/ewp2cmake/src/types.rs

//! Public, toolchain-agnostic representation of an extracted project.

use alloc::fmt;
use alloc::string::String;
use alloc::vec::Vec;

/// The canonical project model shared between extraction and rendering.
///
/// Produced once by the extractor and treated as immutable by the renderer.
/// Project-relative paths use forward slashes, never start with a slash and
/// never contain the `$PROJ_DIR$` token.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProjectModel {
    /// Descriptor file name without its extension.
    pub name: String,
    /// Name of the selected `<configuration>` (informational).
    pub workspace_name: String,
    /// Directory holding the descriptor, as given by the caller.
    pub sources_base: String,
    /// Toolchain installation directory (`<workbench>/arm`).
    pub toolkit_dir: Option<String>,
    /// Source files in descriptor traversal order. Duplicates are preserved.
    pub sources: Vec<String>,
    pub includes: Vec<String>,
    pub defines: Vec<String>,
    /// Chip selector, e.g. `"STM32F407VG\tST STM32F407VG"`.
    pub chip: String,
    /// Runtime library configuration header, relative to the toolkit.
    pub dlib_config: String,
    pub diag_suppress: String,
    pub diag_error: String,
    /// Linker configuration (`.icf`) file.
    pub linker_icf: String,
    /// Symbols kept through linking. Blank entries are skipped when rendering.
    pub linker_symbols: Vec<String>,
}

impl ProjectModel {
    /// Iterates over sources that are not static archives.
    pub fn ordinary_sources(&self) -> impl Iterator<Item = &str> {
        self.sources
            .iter()
            .map(String::as_str)
            .filter(|s| !is_archive(s))
    }

    /// Iterates over static archive (`.a`) sources.
    pub fn archive_sources(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(String::as_str).filter(|s| is_archive(s))
    }
}

fn is_archive(path: &str) -> bool {
    path.ends_with(".a")
}

/// Multi-line summary of the extracted settings.
impl fmt::Display for ProjectModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project workspace name: {}", self.workspace_name)?;
        writeln!(f, "Project name: {}", self.name)?;
        writeln!(
            f,
            "Project toolkit dir: {}",
            self.toolkit_dir.as_deref().unwrap_or("<unset>")
        )?;
        writeln!(f, "Project chip: {}", self.chip)?;
        writeln!(f, "Project includes: {}", self.includes.join(" "))?;
        writeln!(f, "Project defines: {}", self.defines.join(" "))?;
        writeln!(f, "Project srcs: {}", self.sources.join(" "))?;
        writeln!(f, "Project linker icf file: {}", self.linker_icf)?;
        write!(f, "Project linker symbols: {}", self.linker_symbols.join(" "))
    }
}
