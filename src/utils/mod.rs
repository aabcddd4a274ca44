/// URL scheme used by every path the `gcloud storage` CLI understands
pub const GCS_SCHEME: &str = "gs://";

/// Get the root URL of a bucket (`gs://<bucket>`)
///
/// Accepts both a bare bucket name and one that already carries the scheme.
pub fn bucket_url(bucket: &str) -> String {
    let name = bucket.trim_start_matches(GCS_SCHEME).trim_end_matches('/');
    format!("{}{}", GCS_SCHEME, name)
}

/// Get the URL of a direct child folder, always with a trailing slash
pub fn child_folder_url(parent_url: &str, name: &str) -> String {
    format!(
        "{}/{}/",
        parent_url.trim_end_matches('/'),
        name.trim_matches('/')
    )
}

/// Whether a listing entry names the given URL, ignoring a trailing slash on either side
pub fn same_entry(entry: &str, url: &str) -> bool {
    entry.trim_end_matches('/') == url.trim_end_matches('/')
}

/// Get current timestamp in ISO 8601 format
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}
