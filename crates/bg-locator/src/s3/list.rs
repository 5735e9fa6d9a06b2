//! S3 object listing with pagination support.

use async_stream::try_stream;
use aws_sdk_s3::Client;
use bg_error::{BgError, Result};
use chrono::{DateTime, Utc};
use futures::Stream;

/// An S3 object seen during listing.
#[derive(Debug, Clone)]
pub struct S3Object {
    /// The object key (full path within the bucket)
    pub key: String,

    /// Size of the object in bytes
    pub size: u64,

    /// Last modified timestamp
    pub last_modified: Option<DateTime<Utc>>,
}

/// List all objects in a bucket with optional prefix filtering.
///
/// Returns a lazy stream of [`S3Object`] items covering the entire bucket,
/// following `list-objects-v2` continuation tokens transparently.
/// Directory markers (keys ending with `/`) and empty keys are skipped.
/// Any listing error ends the stream with that error; there is no retry.
///
/// # Example
///
/// ```ignore
/// use futures::{StreamExt, pin_mut};
///
/// let stream = list_objects(&client, "my-bucket", Some("logs/"));
/// pin_mut!(stream);
///
/// while let Some(result) = stream.next().await {
///     let obj = result?;
///     println!("{} ({} bytes)", obj.key, obj.size);
/// }
/// ```
pub fn list_objects<'a>(
    client: &'a Client,
    bucket: &'a str,
    prefix: Option<&'a str>,
) -> impl Stream<Item = Result<S3Object>> + 'a {
    list_objects_paged(client, bucket, prefix, None)
}

/// List objects with an explicit page size.
///
/// Identical to [`list_objects`] except that `page_size` caps the number
/// of keys per listing request, which lets tests exercise pagination
/// without thousands of objects. `None` leaves the service default.
pub fn list_objects_paged<'a>(
    client: &'a Client,
    bucket: &'a str,
    prefix: Option<&'a str>,
    page_size: Option<i32>,
) -> impl Stream<Item = Result<S3Object>> + 'a {
    let bucket = bucket.to_string();
    let prefix = prefix.map(|s| s.to_string());

    try_stream! {
        let mut continuation_token: Option<String> = None;

        loop {
            let mut req = client.list_objects_v2().bucket(&bucket);

            if let Some(ref prefix) = prefix {
                req = req.prefix(prefix);
            }

            if let Some(page_size) = page_size {
                req = req.max_keys(page_size);
            }

            if let Some(ref token) = continuation_token {
                req = req.continuation_token(token);
            }

            let resp = req.send().await.map_err(|e| {
                BgError::List(format!("list-objects-v2 on '{bucket}' failed: {e}"))
            })?;

            if let Some(contents) = resp.contents {
                for obj in contents {
                    let key = obj.key.unwrap_or_default();

                    // Directory markers have no content to scan
                    if key.is_empty() || key.ends_with('/') {
                        continue;
                    }

                    let last_modified = obj
                        .last_modified
                        .and_then(|t| DateTime::from_timestamp(t.secs(), t.subsec_nanos()));

                    yield S3Object {
                        key,
                        size: obj.size.unwrap_or(0) as u64,
                        last_modified,
                    };
                }
            }

            if resp.is_truncated == Some(true) {
                continuation_token = resp.next_continuation_token;
                if continuation_token.is_none() {
                    break;
                }
            } else {
                break;
            }
        }
    }
}
