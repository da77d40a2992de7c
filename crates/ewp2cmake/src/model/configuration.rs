//! Contains model structs related to `<configuration>` and its option blocks.

use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

/// Represents a `<configuration>` element.
#[derive(Debug, Deserialize, Default)]
pub struct Configuration {
    /// `<name>` (e.g. "Debug").
    #[serde(default)]
    pub name: String,

    /// `<toolchain><name>` (e.g. "ARM").
    #[serde(rename = "toolchain", default)]
    pub toolchain: Option<ToolchainRef>,

    /// One `<settings>` block per tool (General, ICCARM, ILINK, ...).
    #[serde(rename = "settings", default)]
    pub settings: Vec<Settings>,
}

/// Represents the `<toolchain>` element of a configuration.
#[derive(Debug, Deserialize, Default)]
pub struct ToolchainRef {
    #[serde(default)]
    pub name: String,
}

/// Represents a `<settings>` element.
#[derive(Debug, Deserialize, Default)]
pub struct Settings {
    /// The tool this block configures (e.g. "ICCARM").
    #[serde(default)]
    pub name: String,

    /// The option payload. Mandatory in well-formed descriptors.
    #[serde(rename = "data", default)]
    pub data: Option<SettingsData>,
}

/// Represents the `<data>` element inside `<settings>`.
#[derive(Debug, Deserialize, Default)]
pub struct SettingsData {
    #[serde(rename = "option", default)]
    pub option: Vec<OptionEntry>,
}

/// Represents one `<option>`: a name plus zero or more `<state>` values.
#[derive(Debug, Deserialize, Default)]
pub struct OptionEntry {
    pub name: String,

    /// Scalar options carry a single state, list options carry one per entry.
    #[serde(rename = "state", default)]
    pub state: Vec<String>,
}

impl OptionEntry {
    /// Returns the first state, or an empty string when none is present.
    pub fn scalar(&self) -> &str {
        self.state.first().map(String::as_str).unwrap_or("")
    }
}
