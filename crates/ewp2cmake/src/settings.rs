// crates/ewp2cmake/src/settings.rs

//! The editor-integration settings artifact that locates the IAR toolkit.
//!
//! The IAR extension for VS Code records the selected Embedded Workbench
//! installation in `.vscode/iar-vsc.json` next to the project:
//!
//! ```json
//! { "workbench": { "path": "C:\\Program Files\\IAR Systems\\EW ARM 9.40" } }
//! ```

use crate::error::EwpError;
use crate::parser::normalize_separators;
use alloc::format;
use alloc::string::{String, ToString};
use serde::Deserialize;

/// Location of the settings artifact, relative to the sources base.
pub const SETTINGS_DIR: &str = ".vscode";
/// File name of the settings artifact.
pub const SETTINGS_FILE: &str = "iar-vsc.json";

/// Raw layout of `iar-vsc.json`. Only the fields we need are modelled.
#[derive(Debug, Deserialize)]
struct IarVscSettings {
    workbench: WorkbenchEntry,
}

#[derive(Debug, Deserialize)]
struct WorkbenchEntry {
    path: String,
}

/// Resolved workbench settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbenchSettings {
    workbench_path: String,
}

impl WorkbenchSettings {
    /// Creates settings for a known Embedded Workbench installation directory.
    pub fn new(workbench_path: impl Into<String>) -> Self {
        Self {
            workbench_path: workbench_path.into(),
        }
    }

    /// Parses the contents of an `iar-vsc.json` file.
    ///
    /// # Errors
    /// Returns `EwpError::ConfigurationMissing` if the JSON is malformed or the
    /// `workbench.path` field is absent.
    pub fn from_json_str(json: &str) -> Result<Self, EwpError> {
        let raw: IarVscSettings =
            serde_json::from_str(json).map_err(|e| EwpError::ConfigurationMissing {
                artifact: SETTINGS_FILE.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self::new(raw.workbench.path))
    }

    /// The Embedded Workbench installation directory as recorded.
    pub fn workbench_path(&self) -> &str {
        &self.workbench_path
    }

    /// The ARM toolkit directory inside the installation, with forward slashes.
    pub fn toolkit_dir(&self) -> String {
        let base = normalize_separators(&self.workbench_path);
        format!("{}/arm", base.trim_end_matches('/'))
    }
}

#[cfg(feature = "std")]
impl WorkbenchSettings {
    /// Reads `<sources_base>/.vscode/iar-vsc.json`.
    ///
    /// # Errors
    /// Returns `EwpError::ConfigurationMissing` if the file does not exist,
    /// cannot be read, or does not name a workbench path.
    pub fn discover(sources_base: &std::path::Path) -> Result<Self, EwpError> {
        let path = sources_base.join(SETTINGS_DIR).join(SETTINGS_FILE);
        if !path.exists() {
            return Err(EwpError::ConfigurationMissing {
                artifact: path.display().to_string(),
                reason: "not found, import the project into VS Code first".to_string(),
            });
        }

        let content =
            std::fs::read_to_string(&path).map_err(|e| EwpError::ConfigurationMissing {
                artifact: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Self::from_json_str(&content).map_err(|e| match e {
            EwpError::ConfigurationMissing { reason, .. } => EwpError::ConfigurationMissing {
                artifact: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }
}
