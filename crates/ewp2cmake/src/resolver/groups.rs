// crates/ewp2cmake/src/resolver/groups.rs

//! Flattening of the recursive `<group>` / `<file>` tree.

use crate::model;
use crate::parser::normalize_path;
use alloc::string::String;
use alloc::vec::Vec;
use log::{debug, trace};

/// Appends every included file below `group` to `out`.
///
/// Pre-order, files before subgroups, siblings in document order. An excluded
/// group contributes nothing, whatever its children say.
pub fn flatten(group: &model::Group, out: &mut Vec<String>) {
    if let Some(excluded) = &group.excluded {
        debug!(
            "Skipping excluded group '{}' (excluded from {:?})",
            group.name, excluded.configuration
        );
        return;
    }

    flatten_files(&group.file, out);

    for child in &group.group {
        flatten(child, out);
    }
}

/// Appends the non-excluded files of one level to `out`.
pub(super) fn flatten_files(files: &[model::File], out: &mut Vec<String>) {
    for file in files {
        if let Some(excluded) = &file.excluded {
            debug!(
                "Skipping excluded file '{}' (excluded from {:?})",
                file.name, excluded.configuration
            );
            continue;
        }
        let path = normalize_path(&file.name);
        trace!("Adding source {}", path);
        out.push(path);
    }
}
