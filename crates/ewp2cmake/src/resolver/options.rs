// crates/ewp2cmake/src/resolver/options.rs

//! Routes the recognized `<option>` entries into the `ProjectModel`.

use crate::error::EwpError;
use crate::model;
use crate::parser::normalize_path;
use crate::types::ProjectModel;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use log::debug;

/// The toolkit placeholder IAR writes in front of runtime library paths.
const TOOLKIT_DIR_TOKEN: &str = "$TOOLKIT_DIR$";

/// The option names this converter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KnownOption {
    ChipSelect,
    Defines,
    DiagSuppress,
    DiagError,
    IncludePaths,
    RuntimeConfig,
    LinkerIcf,
    LinkerKeepSymbols,
}

impl KnownOption {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "OGChipSelectEditMenu" => Some(Self::ChipSelect),
            "CCDefines" => Some(Self::Defines),
            "CCDiagSuppress" => Some(Self::DiagSuppress),
            "CCDiagError" => Some(Self::DiagError),
            "CCIncludePath2" => Some(Self::IncludePaths),
            "RTConfigPath2" => Some(Self::RuntimeConfig),
            "IlinkIcfFile" => Some(Self::LinkerIcf),
            "IlinkKeepSymbols" => Some(Self::LinkerKeepSymbols),
            _ => None,
        }
    }
}

/// Scans every `<settings>` block and applies the recognized options.
///
/// Scalars are overwritten by later occurrences, lists accumulate.
pub(super) fn apply_settings(
    settings: &[model::Settings],
    project: &mut ProjectModel,
) -> Result<(), EwpError> {
    for block in settings {
        let data = block
            .data
            .as_ref()
            .ok_or(EwpError::MissingElement { element: "data" })?;

        for option in &data.option {
            if let Some(known) = KnownOption::from_name(&option.name) {
                debug!(
                    "Option {} ({} state(s)) from '{}'",
                    option.name,
                    option.state.len(),
                    block.name
                );
                apply_option(known, option, project);
            }
        }
    }
    Ok(())
}

fn apply_option(known: KnownOption, option: &model::OptionEntry, project: &mut ProjectModel) {
    match known {
        KnownOption::ChipSelect => project.chip = option.scalar().to_string(),
        KnownOption::Defines => {
            extend_non_blank(&mut project.defines, &option.name, option.state.iter().cloned())
        }
        KnownOption::DiagSuppress => project.diag_suppress = option.scalar().to_string(),
        KnownOption::DiagError => project.diag_error = option.scalar().to_string(),
        KnownOption::IncludePaths => extend_non_blank(
            &mut project.includes,
            &option.name,
            option.state.iter().map(|s| normalize_path(s)),
        ),
        KnownOption::RuntimeConfig => {
            project.dlib_config = normalize_path(&option.scalar().replace(TOOLKIT_DIR_TOKEN, ""))
        }
        KnownOption::LinkerIcf => project.linker_icf = normalize_path(option.scalar()),
        // Kept verbatim, the renderer decides what to do with blank entries.
        KnownOption::LinkerKeepSymbols => {
            project.linker_symbols.extend(option.state.iter().cloned())
        }
    }
}

/// IAR writes a single empty `<state/>` for an empty list; those are dropped.
fn extend_non_blank(target: &mut Vec<String>, option: &str, values: impl Iterator<Item = String>) {
    for value in values {
        if value.trim().is_empty() {
            debug!("Dropping blank entry in {}", option);
            continue;
        }
        target.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn option(name: &str, states: &[&str]) -> model::OptionEntry {
        model::OptionEntry {
            name: name.to_string(),
            state: states.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn settings(name: &str, options: Vec<model::OptionEntry>) -> model::Settings {
        model::Settings {
            name: name.to_string(),
            data: Some(model::SettingsData { option: options }),
        }
    }

    #[test]
    fn test_routes_known_options() {
        let blocks = vec![
            settings(
                "General",
                vec![
                    option("OGChipSelectEditMenu", &["STM32F407VG\tST STM32F407VG"]),
                    option(
                        "RTConfigPath2",
                        &["$TOOLKIT_DIR$\\inc\\c\\DLib_Config_Normal.h"],
                    ),
                ],
            ),
            settings(
                "ICCARM",
                vec![
                    option("CCDefines", &["USE_HAL_DRIVER", "STM32F407xx"]),
                    option("CCDiagSuppress", &["Pa050"]),
                    option("CCDiagError", &[""]),
                    option(
                        "CCIncludePath2",
                        &["$PROJ_DIR$\\..\\Inc", "$PROJ_DIR$\\..\\Drivers\\CMSIS\\Include"],
                    ),
                ],
            ),
            settings(
                "ILINK",
                vec![
                    option("IlinkIcfFile", &["$PROJ_DIR$\\stm32f407xx_flash.icf"]),
                    option("IlinkKeepSymbols", &["__vector_table", "", "app_header"]),
                ],
            ),
        ];

        let mut project = ProjectModel::default();
        apply_settings(&blocks, &mut project).unwrap();

        assert_eq!(project.chip, "STM32F407VG\tST STM32F407VG");
        assert_eq!(project.dlib_config, "inc/c/DLib_Config_Normal.h");
        assert_eq!(project.defines, vec!["USE_HAL_DRIVER", "STM32F407xx"]);
        assert_eq!(project.diag_suppress, "Pa050");
        assert_eq!(project.diag_error, "");
        assert_eq!(project.includes, vec!["../Inc", "../Drivers/CMSIS/Include"]);
        assert_eq!(project.linker_icf, "stm32f407xx_flash.icf");
        assert_eq!(project.linker_symbols, vec!["__vector_table", "", "app_header"]);
    }

    #[test]
    fn test_unknown_and_missing_options_leave_defaults() {
        let blocks = vec![settings(
            "ICCARM",
            vec![option("CCOptimizationLevel", &["3"]), option("CCNoSuchThing", &[])],
        )];
        let mut project = ProjectModel::default();
        apply_settings(&blocks, &mut project).unwrap();
        assert_eq!(project, ProjectModel::default());
    }

    #[test]
    fn test_blank_list_entries_are_dropped() {
        let blocks = vec![settings(
            "ICCARM",
            vec![option("CCDefines", &[""]), option("CCIncludePath2", &["", "$PROJ_DIR$"])],
        )];
        let mut project = ProjectModel::default();
        apply_settings(&blocks, &mut project).unwrap();
        assert!(project.defines.is_empty());
        assert!(project.includes.is_empty());
    }

    #[test]
    fn test_lists_accumulate_across_blocks() {
        let blocks = vec![
            settings("ICCARM", vec![option("CCDefines", &["A"])]),
            settings("AARM", vec![option("CCDefines", &["B"])]),
        ];
        let mut project = ProjectModel::default();
        apply_settings(&blocks, &mut project).unwrap();
        assert_eq!(project.defines, vec!["A", "B"]);
    }

    #[test]
    fn test_scalar_without_state_is_empty() {
        let blocks = vec![settings("General", vec![option("OGChipSelectEditMenu", &[])])];
        let mut project = ProjectModel::default();
        apply_settings(&blocks, &mut project).unwrap();
        assert_eq!(project.chip, "");
    }

    #[test]
    fn test_settings_without_data_is_schema_error() {
        let blocks = vec![model::Settings {
            name: "General".to_string(),
            data: None,
        }];
        let mut project = ProjectModel::default();
        let result = apply_settings(&blocks, &mut project);
        assert!(matches!(
            result,
            Err(EwpError::MissingElement { element: "data" })
        ));
    }
}
