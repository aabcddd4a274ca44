use crate::store::ObjectStore;
use tracing::{error, info};

/// Outcome of wiping a bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetStatus {
    Success,
    Failure,
}

impl ResetStatus {
    pub fn is_success(self) -> bool {
        self == ResetStatus::Success
    }
}

/// Delete every object in the bucket.
///
/// Irreversible. Callers decide whether to continue after a `Failure`.
pub async fn reset_bucket(store: &dyn ObjectStore, bucket: &str) -> ResetStatus {
    info!(bucket = %bucket, "Deleting existing data in bucket");

    match store.remove_all(bucket).await {
        Ok(()) => ResetStatus::Success,
        Err(e) => {
            error!(bucket = %bucket, error = %e, "Failed to delete existing data in bucket");
            ResetStatus::Failure
        }
    }
}
