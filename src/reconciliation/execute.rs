use super::exists::structure_exists;
use super::reset::{reset_bucket, ResetStatus};
use crate::config::{check_config_consistency, Consistency, LayoutConfig};
use crate::generate::{generate_layout, GenerateError, GenerationReport};
use crate::layout::LayoutSpec;
use crate::store::ObjectStore;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Error, Debug)]
pub enum ExecuteError {
    #[error("Failed to delete existing data in bucket {0}")]
    ResetFailed(String),

    #[error("Generation error: {0}")]
    GenerateError(#[from] GenerateError),
}

/// How a reconciliation run may touch the bucket
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Only report drift; never delete or upload
    pub dry_run: bool,
    /// Local directory where files are written before upload
    pub staging_dir: PathBuf,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            staging_dir: std::env::temp_dir(),
        }
    }
}

/// Result of reconciliation execution
#[derive(Debug, Clone, Default)]
pub struct ReconciliationResult {
    /// The declared structure was found and nothing was changed
    pub already_present: bool,
    /// Set when the bucket was wiped (or a wipe was attempted)
    pub reset: Option<ResetStatus>,
    pub generation: Option<GenerationReport>,
}

impl ReconciliationResult {
    /// Whether the bucket matches the layout after this run
    pub fn in_sync(&self) -> bool {
        self.already_present || self.generation.is_some()
    }
}

/// Bring the bucket in line with the layout.
///
/// Does nothing when the structure is already present. Otherwise wipes the
/// bucket and regenerates every folder, unless `dry_run` is set.
pub async fn execute_reconciliation(
    store: &dyn ObjectStore,
    layout: &LayoutSpec,
    options: &RunOptions,
) -> Result<ReconciliationResult, ExecuteError> {
    let mut result = ReconciliationResult::default();

    if structure_exists(store, layout).await {
        info!(bucket = %layout.bucket, "Directory structure already exists");
        result.already_present = true;
        return Ok(result);
    }

    if options.dry_run {
        warn!(
            bucket = %layout.bucket,
            "Directory structure differs from config; dry run, leaving bucket untouched"
        );
        return Ok(result);
    }

    let status = reset_bucket(store, &layout.bucket).await;
    result.reset = Some(status);
    if status == ResetStatus::Failure {
        return Err(ExecuteError::ResetFailed(layout.bucket.clone()));
    }

    let report = generate_layout(store, &options.staging_dir, layout).await?;
    info!(
        bucket = %layout.bucket,
        folders = report.folders.len(),
        files = report.total_files(),
        bytes = report.total_bytes(),
        "Bucket regenerated"
    );
    result.generation = Some(report);

    Ok(result)
}

/// Validate a layout file, reconcile the bucket with it and return the process exit code.
///
/// 0 when the config is consistent and the run completed (bucket in sync, or
/// drift reported in a dry run); 1 when the config is inconsistent or any
/// operation failed.
pub async fn reconcile_config(
    store: &dyn ObjectStore,
    config: &LayoutConfig,
    options: &RunOptions,
) -> i32 {
    let consistency = check_config_consistency(config);
    if !consistency.is_consistent() {
        return consistency.exit_code();
    }

    let layout = match LayoutSpec::from_config(config) {
        Ok(layout) => layout,
        Err(e) => {
            error!("{}", e);
            return Consistency::Inconsistent.exit_code();
        }
    };

    match execute_reconciliation(store, &layout, options).await {
        Ok(result) => {
            if let Some(report) = &result.generation {
                info!(
                    bucket = %layout.bucket,
                    started_at = %report.started_at,
                    finished_at = %report.finished_at,
                    files = report.total_files(),
                    "Bucket generated from layout"
                );
            }
            0
        }
        Err(e) => {
            error!(bucket = %layout.bucket, error = %e, "Reconciliation failed");
            1
        }
    }
}
