use crate::config::FolderSpec;
use crate::store::ObjectStore;
use tracing::{debug, info};

/// Check one folder of the bucket against its declaration.
///
/// Only the number of objects is compared. The file name prefix and size are
/// not verified, so a folder holding the right number of unrelated files
/// still matches. A folder that cannot be listed never matches.
pub async fn compare_folder_structure(
    store: &dyn ObjectStore,
    folder: &FolderSpec,
    folder_url: &str,
) -> bool {
    let listing = match store.list(folder_url).await {
        Ok(listing) => listing,
        Err(e) => {
            debug!(folder = %folder_url, error = %e, "Folder could not be listed");
            return false;
        }
    };

    if listing.len() != folder.num_files {
        info!(
            folder = %folder_url,
            expected = folder.num_files,
            actual = listing.len(),
            "File count mismatch"
        );
        return false;
    }

    true
}
