use super::types::{FolderSpec, LayoutConfig};
use tracing::error;

/// Outcome of checking a layout file for internal consistency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consistency {
    Consistent,
    Inconsistent,
}

impl Consistency {
    pub fn is_consistent(self) -> bool {
        self == Consistency::Consistent
    }

    /// Process exit code the benchmark scripts expect (0 = ok, 1 = inconsistent)
    pub fn exit_code(self) -> i32 {
        match self {
            Consistency::Consistent => 0,
            Consistency::Inconsistent => 1,
        }
    }
}

/// Check a layout file before any bucket is touched.
///
/// Rules are checked in order and the first failure wins:
/// 1. a non-empty bucket `name`
/// 2. `folders`, when present, carries `num_folders` and `folder_structure`
///    and the two agree
/// 3. `nested_folders`, when present, does the same and also names its
///    `folder_name`
pub fn check_config_consistency(config: &LayoutConfig) -> Consistency {
    match config.name.as_deref() {
        Some(name) if !name.trim().is_empty() => {}
        _ => {
            error!("Bucket name not present in config file");
            return Consistency::Inconsistent;
        }
    }

    if let Some(folders) = &config.folders {
        if !group_is_consistent(
            "folders",
            folders.num_folders,
            folders.folder_structure.as_deref(),
        ) {
            return Consistency::Inconsistent;
        }
    }

    if let Some(nested) = &config.nested_folders {
        // "/" or "//" would collapse into the bucket root
        let folder_name = nested.folder_name.as_deref().map(|n| n.trim().trim_matches('/'));
        if folder_name.map_or(true, str::is_empty) {
            error!("Key 'folder_name' missing or empty in nested_folders in config file");
            return Consistency::Inconsistent;
        }
        if !group_is_consistent(
            "nested_folders",
            nested.num_folders,
            nested.folder_structure.as_deref(),
        ) {
            return Consistency::Inconsistent;
        }
    }

    Consistency::Consistent
}

fn group_is_consistent(
    group: &str,
    num_folders: Option<usize>,
    folder_structure: Option<&[FolderSpec]>,
) -> bool {
    let (Some(num_folders), Some(folder_structure)) = (num_folders, folder_structure) else {
        error!(
            group = %group,
            "Key 'num_folders' or 'folder_structure' missing from {} in config file",
            group
        );
        return false;
    };

    if num_folders != folder_structure.len() {
        error!(
            group = %group,
            declared = num_folders,
            actual = folder_structure.len(),
            "Inconsistency in {}: num_folders is {} but folder_structure has {} entries",
            group,
            num_folders,
            folder_structure.len()
        );
        return false;
    }

    true
}
