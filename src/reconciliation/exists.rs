use super::compare::compare_folder_structure;
use crate::layout::{FolderGroup, LayoutSpec};
use crate::store::ObjectStore;
use crate::utils::{child_folder_url, same_entry};
use tracing::info;

/// Whether the bucket already holds every declared folder with the declared file count.
///
/// Groups are checked in declaration order and the first missing or
/// mismatching folder ends the walk, so nothing after it is listed.
pub async fn structure_exists(store: &dyn ObjectStore, layout: &LayoutSpec) -> bool {
    let root_url = layout.root_url();
    let root_listing = match store.list(&root_url).await {
        Ok(listing) => listing,
        Err(_) => {
            info!(bucket = %root_url, "Bucket could not be listed");
            return false;
        }
    };

    for group in &layout.groups {
        // Nothing declared, nothing to check
        if group.entries.is_empty() {
            continue;
        }
        if !group_exists(store, &layout.bucket, group, &root_listing).await {
            return false;
        }
    }

    true
}

async fn group_exists(
    store: &dyn ObjectStore,
    bucket: &str,
    group: &FolderGroup,
    root_listing: &[String],
) -> bool {
    let parent_url = group.parent_url(bucket);

    let nested_listing;
    let parent_listing: &[String] = if group.is_nested() {
        if !contains_entry(root_listing, &parent_url) {
            info!(folder = %parent_url, "Nested folder missing from bucket");
            return false;
        }
        nested_listing = match store.list(&parent_url).await {
            Ok(listing) => listing,
            Err(_) => return false,
        };
        &nested_listing
    } else {
        root_listing
    };

    for folder in &group.entries {
        let folder_url = child_folder_url(&parent_url, &folder.name);
        if !contains_entry(parent_listing, &folder_url) {
            info!(folder = %folder_url, "Folder missing from bucket");
            return false;
        }
        if !compare_folder_structure(store, folder, &folder_url).await {
            return false;
        }
    }

    true
}

fn contains_entry(listing: &[String], url: &str) -> bool {
    listing.iter().any(|entry| same_entry(entry, url))
}
