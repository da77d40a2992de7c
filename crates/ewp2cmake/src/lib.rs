// crates/ewp2cmake/src/lib.rs

#![cfg_attr(not(feature = "std"), no_std)]
#![doc = "Converts IAR Embedded Workbench project descriptors (`.ewp`) into CMake build files."]
#![doc = ""]
#![doc = "The conversion is a two-stage pipeline:"]
#![doc = "- `extract_project`: flattens the XML descriptor into a toolchain-agnostic `ProjectModel`."]
#![doc = "- `render_project`: substitutes the model into a `CMakeLists.txt` template for a `Toolchain`."]
#![doc = ""]
#![doc = "Both stages are `no_std + alloc`. The `std` feature (default) adds the filesystem"]
#![doc = "side: settings discovery, template directories and atomic output writing."]

// 'alloc' is used for the owned strings and lists of the project model
extern crate alloc;

// --- Crate Modules ---

mod error;
mod model;
mod parser;
mod resolver;
mod settings;
mod types;

pub mod renderer;

#[cfg(feature = "std")]
mod io;

// --- Public API Re-exports ---

pub use error::EwpError;
pub use parser::{ExtractOptions, PROJ_DIR_TOKEN, extract_project, normalize_path};
pub use renderer::{
    MemoryTemplateStore, OUTPUT_FILE_NAME, TemplateId, TemplateStore, Toolchain, derive_core,
    render_project, render_text, select_template,
};
pub use settings::{SETTINGS_DIR, SETTINGS_FILE, WorkbenchSettings};
pub use types::ProjectModel;

#[cfg(feature = "std")]
pub use io::{DirTemplateStore, generate, load_project, output_path, write_output};
