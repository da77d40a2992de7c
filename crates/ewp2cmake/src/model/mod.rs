//! Internal `serde` data structures that map directly to the EWP XML layout.
//!
//! This module defines the raw structure of an IAR Embedded Workbench project
//! file. These structs are annotated with `serde` attributes to facilitate
//! parsing via `quick-xml` and are not intended for direct public use.

#![allow(clippy::pedantic)] // XML element naming conventions differ from Rust

use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

pub mod configuration;
pub mod group;

// Re-export key components for internal use
pub use configuration::{Configuration, OptionEntry, Settings, SettingsData};
pub use group::{Excluded, File, Group};

/// The root element of an `.ewp` file.
///
/// Represents the `<project>` element. The root acts as an unnamed group: it
/// can hold `<file>` and `<group>` children next to its configurations.
#[derive(Debug, Deserialize, Default)]
#[serde(rename = "project")]
pub struct Project {
    /// `<fileVersion>` (e.g. "3" or "4").
    #[serde(rename = "fileVersion", default)]
    pub file_version: Option<String>,

    /// One entry per build configuration (e.g. "Debug", "Release").
    #[serde(rename = "configuration", default)]
    pub configuration: Vec<Configuration>,

    /// Top-level source groups.
    #[serde(rename = "group", default)]
    pub group: Vec<Group>,

    /// Source files placed directly at the project root.
    #[serde(rename = "file", default)]
    pub file: Vec<File>,
}
