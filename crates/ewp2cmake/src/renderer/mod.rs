// crates/ewp2cmake/src/renderer/mod.rs

//! Renders a `ProjectModel` into CMake text.
//!
//! The renderer derives the core/FPU pair from the chip, picks a template for
//! the requested toolchain, and substitutes the placeholder values in one pass.
//! It holds no state between calls.

use crate::error::EwpError;
use crate::types::ProjectModel;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;
use log::info;

// --- Sub-modules ---

mod blocks;
mod chip;
mod template;

pub use blocks::{SOURCES_BASE_VAR, TOOLKIT_DIR_FALLBACK, build_values};
pub use chip::{CORE_FAMILIES, CoreFamily, CoreSelection, DEFAULT_FPU, UNKNOWN_CORE, derive_core};
pub use template::{EmptyPolicy, Placeholder, PlaceholderValues, Template};

/// File name of the generated build file.
pub const OUTPUT_FILE_NAME: &str = "CMakeLists.txt";

/// The build-configuration dialect to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toolchain {
    /// Clang-based cross toolchain.
    Clang,
    /// IAR C/C++ Compiler for ARM.
    Iar,
}

impl FromStr for Toolchain {
    type Err = EwpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clang" => Ok(Toolchain::Clang),
            "iar" => Ok(Toolchain::Iar),
            _ => Err(EwpError::UnsupportedToolchain(s.to_string())),
        }
    }
}

impl fmt::Display for Toolchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Toolchain::Clang => write!(f, "clang"),
            Toolchain::Iar => write!(f, "iar"),
        }
    }
}

/// Identifies one of the raw template texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TemplateId {
    Clang,
    Iar,
    /// IAR template for the STR91x family (ARM9, no FPU).
    IarStr91,
}

impl TemplateId {
    pub const ALL: [TemplateId; 3] = [TemplateId::Clang, TemplateId::Iar, TemplateId::IarStr91];

    /// File name of the template inside a template directory.
    pub fn file_name(self) -> &'static str {
        match self {
            TemplateId::Clang => "CMakeLists.tmpl",
            TemplateId::Iar => "CMakeLists_iar.tmpl",
            TemplateId::IarStr91 => "CMakeLists_iar_STR91.tmpl",
        }
    }
}

/// Picks the template for a toolchain. IAR builds for STR912 chips use a
/// dedicated template.
pub fn select_template(toolchain: Toolchain, chip: &str) -> TemplateId {
    match toolchain {
        Toolchain::Clang => TemplateId::Clang,
        Toolchain::Iar if chip.contains("STR912") => TemplateId::IarStr91,
        Toolchain::Iar => TemplateId::Iar,
    }
}

/// Source of raw template text.
pub trait TemplateStore {
    /// Returns the full text of the template.
    fn load(&self, id: TemplateId) -> Result<String, EwpError>;
}

/// Keeps template texts in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryTemplateStore {
    templates: BTreeMap<TemplateId, String>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `text` for `id`, replacing any previous text.
    pub fn insert(&mut self, id: TemplateId, text: impl Into<String>) {
        self.templates.insert(id, text.into());
    }

    pub fn with(mut self, id: TemplateId, text: impl Into<String>) -> Self {
        self.insert(id, text);
        self
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn load(&self, id: TemplateId) -> Result<String, EwpError> {
        self.templates
            .get(&id)
            .cloned()
            .ok_or(EwpError::TemplateMissing(id.file_name()))
    }
}

/// Substitutes the values of `project` into raw template text.
pub fn render_text(template: &str, project: &ProjectModel) -> String {
    let core = derive_core(&project.chip);
    let values = build_values(project, &core);
    Template::parse(template).render(&values)
}

/// Renders `project` for `toolchain` using a template from `store`.
///
/// # Errors
/// Returns an `EwpError` if the store cannot provide the template.
pub fn render_project(
    project: &ProjectModel,
    toolchain: Toolchain,
    store: &impl TemplateStore,
) -> Result<String, EwpError> {
    let template_id = select_template(toolchain, &project.chip);
    info!(
        "Rendering '{}' for {} using {}",
        project.name,
        toolchain,
        template_id.file_name()
    );
    let raw = store.load(template_id)?;
    Ok(render_text(&raw, project))
}
