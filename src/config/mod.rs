mod types;
mod validate;

pub use types::{FolderGroupConfig, FolderSpec, LayoutConfig, NestedFolderGroupConfig};
pub use validate::{check_config_consistency, Consistency};

use std::path::Path;
use thiserror::Error;
use tokio::fs;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Parse a layout document
pub fn parse_config(content: &str) -> Result<LayoutConfig, ConfigError> {
    let config: LayoutConfig = serde_json::from_str(content)?;
    Ok(config)
}

/// Read the layout file from disk
pub async fn read_config(config_path: &Path) -> Result<LayoutConfig, ConfigError> {
    let content = fs::read_to_string(config_path).await?;
    parse_config(&content)
}
