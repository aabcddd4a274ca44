//! Regeneration of a bucket's declared contents.

mod files;
mod size;

pub use files::{file_name, generate_folder, generate_layout, UPLOAD_BATCH};
pub use size::parse_file_size;

use crate::store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Invalid file size: {0:?}")]
    InvalidFileSize(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),
}

/// What was uploaded for one folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderReport {
    pub url: String,
    pub files: usize,
    pub bytes: u64,
}

/// Summary of a full regeneration run
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub started_at: String,
    pub finished_at: String,
    pub folders: Vec<FolderReport>,
}

impl GenerationReport {
    pub fn push(&mut self, folder: FolderReport) {
        self.folders.push(folder);
    }

    pub fn total_files(&self) -> usize {
        self.folders.iter().map(|f| f.files).sum()
    }

    pub fn total_bytes(&self) -> u64 {
        self.folders.iter().map(|f| f.bytes).sum()
    }
}
