use serde::{Deserialize, Serialize};

/// One folder's expected contents
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FolderSpec {
    pub name: String,
    pub num_files: usize,
    pub file_name_prefix: String,
    /// Size of every file in the folder, e.g. `"1kb"`
    pub file_size: String,
}

/// The `folders` section of a layout file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FolderGroupConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_folders: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_structure: Option<Vec<FolderSpec>>,
}

/// The `nested_folders` section of a layout file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NestedFolderGroupConfig {
    /// Directory under the bucket root that holds the nested folders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_folders: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_structure: Option<Vec<FolderSpec>>,
}

/// Layout file as written on disk.
///
/// Every key is optional so that a malformed file still parses and
/// [`super::check_config_consistency`] can say which key is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Bucket name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folders: Option<FolderGroupConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested_folders: Option<NestedFolderGroupConfig>,
}
