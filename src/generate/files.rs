use super::size::parse_file_size;
use super::{FolderReport, GenerateError, GenerationReport};
use crate::config::FolderSpec;
use crate::layout::LayoutSpec;
use crate::store::ObjectStore;
use crate::utils::{child_folder_url, now_iso};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Largest buffer written in one call while filling a file
const WRITE_CHUNK: usize = 1 << 20;

/// Name of the `index`-th file (1-based) of a folder
pub fn file_name(prefix: &str, index: usize) -> String {
    format!("{}_{}.txt", prefix, index)
}

/// Most files handed to a single upload call; keeps the argv under the OS limit
/// and bounds how much data sits in the staging directory at once
pub const UPLOAD_BATCH: usize = 100;

/// Write `num_files` files of the declared size locally and upload them to `dest_url`.
///
/// Files are staged in a fresh directory under `staging_root` and uploaded
/// in batches of [`UPLOAD_BATCH`]; each batch is deleted locally once
/// uploaded. The directory is removed whether or not the upload succeeds.
pub async fn generate_folder(
    store: &dyn ObjectStore,
    staging_root: &Path,
    folder: &FolderSpec,
    dest_url: &str,
) -> Result<FolderReport, GenerateError> {
    let size = parse_file_size(&folder.file_size)?;
    let local_dir = staging_root.join(format!("{}-{}", folder.name, Uuid::new_v4()));
    fs::create_dir_all(&local_dir).await?;

    let result = write_and_upload(store, &local_dir, folder, size, dest_url).await;

    if let Err(e) = fs::remove_dir_all(&local_dir).await {
        warn!(dir = %local_dir.display(), error = %e, "Failed to remove staging directory");
    }

    result
}

async fn write_and_upload(
    store: &dyn ObjectStore,
    local_dir: &Path,
    folder: &FolderSpec,
    size: u64,
    dest_url: &str,
) -> Result<FolderReport, GenerateError> {
    let mut uploaded = 0;
    let mut batch: Vec<PathBuf> = Vec::with_capacity(UPLOAD_BATCH.min(folder.num_files));

    for index in 1..=folder.num_files {
        let path = local_dir.join(file_name(&folder.file_name_prefix, index));
        write_sized_file(&path, size).await?;
        batch.push(path);

        if batch.len() == UPLOAD_BATCH || index == folder.num_files {
            upload_batch(store, &batch, dest_url).await?;
            uploaded += batch.len();
            batch.clear();
        }
    }

    info!(
        folder = %dest_url,
        files = uploaded,
        file_size = size,
        "Uploaded folder"
    );

    Ok(FolderReport {
        url: dest_url.to_string(),
        files: uploaded,
        bytes: size * uploaded as u64,
    })
}

async fn upload_batch(
    store: &dyn ObjectStore,
    batch: &[PathBuf],
    dest_url: &str,
) -> Result<(), GenerateError> {
    store.upload(batch, dest_url).await?;
    debug!(folder = %dest_url, files = batch.len(), "Uploaded batch");

    for path in batch {
        fs::remove_file(path).await?;
    }
    Ok(())
}

async fn write_sized_file(path: &Path, size: u64) -> Result<(), GenerateError> {
    let mut file = fs::File::create(path).await?;
    let chunk = vec![b'x'; WRITE_CHUNK.min(size as usize)];

    let mut remaining = size;
    while remaining > 0 {
        let n = remaining.min(chunk.len() as u64) as usize;
        file.write_all(&chunk[..n]).await?;
        remaining -= n as u64;
    }
    file.flush().await?;
    Ok(())
}

/// Generate every declared folder, flat group first, in declaration order
pub async fn generate_layout(
    store: &dyn ObjectStore,
    staging_root: &Path,
    layout: &LayoutSpec,
) -> Result<GenerationReport, GenerateError> {
    let mut report = GenerationReport {
        started_at: now_iso(),
        ..Default::default()
    };

    info!(
        bucket = %layout.bucket,
        folders = layout.folder_count(),
        "Generating bucket layout"
    );

    for group in &layout.groups {
        let parent_url = group.parent_url(&layout.bucket);
        for folder in &group.entries {
            let dest_url = child_folder_url(&parent_url, &folder.name);
            let folder_report = generate_folder(store, staging_root, folder, &dest_url).await?;
            report.push(folder_report);
        }
    }

    report.finished_at = now_iso();
    Ok(report)
}
