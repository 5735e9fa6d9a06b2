//! Object download into the staging area.

use std::path::{Path, PathBuf};

use aws_sdk_s3::Client;
use bg_error::{FetchError, Result};
use tracing::debug;

/// Compute the local staging path for an object key.
///
/// The key is joined verbatim: a key containing `..` segments escapes the
/// staging root. Downstream consumers rely on downloads landing at the
/// literal key layout, so no sanitization happens here.
pub fn staging_path(staging_root: &Path, key: &str) -> PathBuf {
    staging_root.join(key)
}

/// Download one object into `staging_root/<key>` and return the local path.
///
/// Intermediate directories are created as needed, and an existing file
/// at the target path is overwritten. Any download or write error
/// propagates; there is no retry and no partial-download cleanup.
pub async fn fetch_object(
    client: &Client,
    bucket: &str,
    key: &str,
    staging_root: &Path,
) -> Result<PathBuf> {
    let path = staging_path(staging_root, key);

    debug!(bucket = %bucket, key = %key, path = %path.display(), "Fetching object");

    let response = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| FetchError::Download(format!("get-object for '{key}' failed: {e}")))?;

    let bytes = response
        .body
        .collect()
        .await
        .map_err(|e| FetchError::Download(format!("Reading body of '{key}' failed: {e}")))?;

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            FetchError::Write(format!("Failed to create '{}': {}", parent.display(), e))
        })?;
    }

    tokio::fs::write(&path, bytes.into_bytes())
        .await
        .map_err(|e| FetchError::Write(format!("Failed to write '{}': {}", path.display(), e)))?;

    Ok(path)
}
