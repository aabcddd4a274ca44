//! Validated, immutable view of a layout file.

use crate::config::{check_config_consistency, Consistency, FolderSpec, LayoutConfig};
use crate::generate::parse_file_size;
use crate::utils::{bucket_url, child_folder_url};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Layout config is inconsistent")]
    Inconsistent,

    #[error("Folder {folder} has an invalid file_size {size:?}")]
    InvalidFileSize { folder: String, size: String },
}

/// A set of sibling folders under one parent directory of the bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderGroup {
    /// Path of the parent directory relative to the bucket root ("" for the root itself)
    pub base_path: String,
    pub entries: Vec<FolderSpec>,
}

impl FolderGroup {
    pub fn is_nested(&self) -> bool {
        !self.base_path.is_empty()
    }

    /// URL of the directory holding this group's folders
    pub fn parent_url(&self, bucket: &str) -> String {
        if self.is_nested() {
            child_folder_url(&bucket_url(bucket), &self.base_path)
        } else {
            bucket_url(bucket)
        }
    }
}

/// Desired contents of a bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSpec {
    pub bucket: String,
    /// Flat folders first, then nested folders
    pub groups: Vec<FolderGroup>,
}

impl LayoutSpec {
    /// Build the layout from a config, refusing configs that fail the consistency check
    pub fn from_config(config: &LayoutConfig) -> Result<Self, LayoutError> {
        if check_config_consistency(config) == Consistency::Inconsistent {
            return Err(LayoutError::Inconsistent);
        }

        let bucket = config.name.clone().ok_or(LayoutError::Inconsistent)?;
        let mut groups = Vec::new();

        if let Some(folders) = &config.folders {
            groups.push(FolderGroup {
                base_path: String::new(),
                entries: folders.folder_structure.clone().unwrap_or_default(),
            });
        }

        if let Some(nested) = &config.nested_folders {
            groups.push(FolderGroup {
                base_path: nested
                    .folder_name
                    .clone()
                    .ok_or(LayoutError::Inconsistent)?
                    .trim()
                    .trim_matches('/')
                    .to_string(),
                entries: nested.folder_structure.clone().unwrap_or_default(),
            });
        }

        let spec = Self { bucket, groups };
        spec.check_file_sizes()?;
        Ok(spec)
    }

    /// Reject unparsable sizes up front, before anything in the bucket is deleted
    fn check_file_sizes(&self) -> Result<(), LayoutError> {
        for folder in self.groups.iter().flat_map(|g| &g.entries) {
            if parse_file_size(&folder.file_size).is_err() {
                error!(
                    folder = %folder.name,
                    file_size = %folder.file_size,
                    "Invalid file_size in config file"
                );
                return Err(LayoutError::InvalidFileSize {
                    folder: folder.name.clone(),
                    size: folder.file_size.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn root_url(&self) -> String {
        bucket_url(&self.bucket)
    }

    /// Total number of declared folders across all groups
    pub fn folder_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    const FULL_CONFIG: &str = r#"{
        "name": "test_bucket",
        "folders": {
            "num_folders": 1,
            "folder_structure": [
                {"name": "test_folder", "num_files": 1, "file_name_prefix": "file", "file_size": "1kb"}
            ]
        },
        "nested_folders": {
            "folder_name": "nested",
            "num_folders": 2,
            "folder_structure": [
                {"name": "a", "num_files": 1, "file_name_prefix": "file", "file_size": "1kb"},
                {"name": "b", "num_files": 3, "file_name_prefix": "file", "file_size": "2kb"}
            ]
        }
    }"#;

    #[test]
    fn test_from_config_orders_groups() {
        let config = parse_config(FULL_CONFIG).unwrap();
        let spec = LayoutSpec::from_config(&config).unwrap();

        assert_eq!(spec.bucket, "test_bucket");
        assert_eq!(spec.groups.len(), 2);
        assert!(!spec.groups[0].is_nested());
        assert_eq!(spec.groups[1].base_path, "nested");
        assert_eq!(spec.folder_count(), 3);
    }

    #[test]
    fn test_parent_urls() {
        let config = parse_config(FULL_CONFIG).unwrap();
        let spec = LayoutSpec::from_config(&config).unwrap();

        assert_eq!(spec.groups[0].parent_url(&spec.bucket), "gs://test_bucket");
        assert_eq!(
            spec.groups[1].parent_url(&spec.bucket),
            "gs://test_bucket/nested/"
        );
    }

    #[test]
    fn test_from_config_rejects_bad_file_size() {
        let config = parse_config(&FULL_CONFIG.replace(r#""2kb""#, r#""1xb""#)).unwrap();
        match LayoutSpec::from_config(&config) {
            Err(LayoutError::InvalidFileSize { folder, size }) => {
                assert_eq!(folder, "b");
                assert_eq!(size, "1xb");
            }
            other => panic!("Expected InvalidFileSize, got {:?}", other),
        }
    }

    #[test]
    fn test_from_config_rejects_inconsistent() {
        let config = parse_config(r#"{"name": "b", "nested_folders": {}}"#).unwrap();
        assert!(matches!(
            LayoutSpec::from_config(&config),
            Err(LayoutError::Inconsistent)
        ));
    }
}
