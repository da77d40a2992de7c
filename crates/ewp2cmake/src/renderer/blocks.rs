// crates/ewp2cmake/src/renderer/blocks.rs

//! Builds the placeholder values for a project, including the multi-line
//! file, include, define and linker blocks.

use super::chip::CoreSelection;
use super::template::{Placeholder, PlaceholderValues};
use crate::types::ProjectModel;
use alloc::string::{String, ToString};
use core::fmt::Write;
use log::warn;

/// CMake variable every project-relative path is prefixed with.
pub const SOURCES_BASE_VAR: &str = "${SOURCES_BASE_PATH}";

/// Written in place of `%toolkit_dir%` when the model has no toolkit directory.
pub const TOOLKIT_DIR_FALLBACK: &str = "UNDEFINED-PLEASE EDIT";

/// Maps every placeholder to its value for `project`.
pub fn build_values(project: &ProjectModel, core: &CoreSelection) -> PlaceholderValues {
    let mut values = PlaceholderValues::new();
    values.insert(Placeholder::ProjectName, project.name.clone());
    values.insert(Placeholder::Chip, project.chip.clone());
    values.insert(Placeholder::Core, core.core.to_string());
    values.insert(Placeholder::Fpu, core.fpu.to_string());
    values.insert(Placeholder::DlibConfig, project.dlib_config.clone());
    values.insert(Placeholder::DiagSuppress, project.diag_suppress.clone());
    values.insert(Placeholder::DiagError, project.diag_error.clone());
    values.insert(Placeholder::SourcesBase, project.sources_base.clone());
    values.insert(
        Placeholder::ToolkitDir,
        project
            .toolkit_dir
            .clone()
            .unwrap_or_else(|| TOOLKIT_DIR_FALLBACK.to_string()),
    );
    values.insert(Placeholder::SourceFile, source_block(project));
    values.insert(Placeholder::LibFiles, archive_block(project));
    values.insert(Placeholder::IncludeDir, include_block(project));
    values.insert(Placeholder::PreprocessorDefines, define_block(project));
    values.insert(Placeholder::LinkerIcf, project.linker_icf.clone());
    values.insert(Placeholder::LinkerSymbol, keep_symbol_block(project));
    values
}

/// One `    ${SOURCES_BASE_PATH}<path>` line per non-archive source.
pub fn source_block(project: &ProjectModel) -> String {
    let mut block = String::new();
    for source in project.ordinary_sources() {
        let _ = writeln!(block, "    {}{}", SOURCES_BASE_VAR, source);
    }
    block
}

/// One tab-indented, quoted line per `.a` archive.
pub fn archive_block(project: &ProjectModel) -> String {
    let mut block = String::new();
    for archive in project.archive_sources() {
        let _ = writeln!(block, "\t\"{}{}\"", SOURCES_BASE_VAR, archive);
    }
    block
}

pub fn include_block(project: &ProjectModel) -> String {
    let mut block = String::new();
    for include in &project.includes {
        let _ = writeln!(block, "    {}{}", SOURCES_BASE_VAR, include);
    }
    block
}

pub fn define_block(project: &ProjectModel) -> String {
    let mut block = String::new();
    for define in &project.defines {
        let _ = writeln!(block, "    {}", define);
    }
    block
}

/// One `--keep <symbol>` line per textual entry. Blank entries are skipped.
pub fn keep_symbol_block(project: &ProjectModel) -> String {
    let mut block = String::new();
    for (position, symbol) in project.linker_symbols.iter().enumerate() {
        if symbol.trim().is_empty() {
            warn!("Skipping blank linker keep symbol at position {}", position);
            continue;
        }
        let _ = writeln!(block, "--keep {}", symbol);
    }
    block
}
