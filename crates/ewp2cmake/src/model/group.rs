//! Contains model structs for the recursive `<group>` / `<file>` hierarchy.

use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

/// Represents a `<group>` (a folder in the IDE project tree).
#[derive(Debug, Deserialize, Default)]
pub struct Group {
    #[serde(default)]
    pub name: String,

    /// When present, the group and its whole subtree are excluded from the build.
    #[serde(default)]
    pub excluded: Option<Excluded>,

    #[serde(rename = "file", default)]
    pub file: Vec<File>,

    #[serde(rename = "group", default)]
    pub group: Vec<Group>,
}

/// Represents a `<file>` entry.
#[derive(Debug, Deserialize, Default)]
pub struct File {
    /// The file path, usually prefixed with `$PROJ_DIR$`.
    pub name: String,

    #[serde(default)]
    pub excluded: Option<Excluded>,
}

/// The `<excluded>` marker, listing the configurations it applies to.
#[derive(Debug, Deserialize, Default)]
pub struct Excluded {
    #[serde(rename = "configuration", default)]
    pub configuration: Vec<String>,
}
