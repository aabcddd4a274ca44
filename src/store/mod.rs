//! Access to the bucket being prepared.
//!
//! Everything else in the crate talks to the bucket through [`ObjectStore`],
//! so tests can swap the `gcloud`-backed implementation for a scripted fake.

mod command;
mod gcloud;

pub use command::{CommandOutput, CommandRunner, SystemCommandRunner};
pub use gcloud::{GcloudStorage, DEFAULT_GCLOUD};

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Command `{command}` failed: {output}")]
    CommandFailed { command: String, output: String },
}

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// List the direct children of `prefix`, in the order the store returns them.
    ///
    /// `Ok(vec![])` is an empty listing; `Err` means the listing itself failed
    /// (missing path, auth or network trouble).
    async fn list(&self, prefix: &str) -> Result<Vec<String>, StoreError>;

    /// Recursively delete everything in the bucket
    async fn remove_all(&self, bucket: &str) -> Result<(), StoreError>;

    /// Copy local files into the folder at `dest_url`
    async fn upload(&self, files: &[PathBuf], dest_url: &str) -> Result<(), StoreError>;
}
