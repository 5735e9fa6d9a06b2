//! The locate pipeline: list, fetch, scan, keep or discard.

use aws_sdk_s3::Client;
use bg_error::{BgError, Result};
use futures::{StreamExt, pin_mut};
use tracing::debug;

use crate::LocatedFile;
use crate::config::LocateConfig;
use crate::fetch::fetch_object;
use crate::matcher::SubstringMatcher;
use crate::output::Output;
use crate::s3::list_objects;
use crate::stats::LocateStats;

/// Coordinates listing, fetching, matching, and output for one run.
///
/// Generic over the output sink so matches go to stdout in the CLI and to
/// collecting sinks in tests. The client is an explicit handle passed in
/// at construction; there is no process-wide singleton.
pub struct Locator<O: Output> {
    s3_client: Client,
    bucket: String,
    prefix: Option<String>,
    output: O,
    config: LocateConfig,
}

impl<O: Output> Locator<O> {
    /// Create a new Locator.
    ///
    /// # Arguments
    ///
    /// * `s3_client` - The S3 client for listing and downloads
    /// * `bucket` - The bucket to search
    /// * `prefix` - Optional key prefix restricting the scan
    /// * `output` - The sink that receives each match
    /// * `config` - Substring and staging area
    pub fn new(
        s3_client: Client,
        bucket: impl Into<String>,
        prefix: Option<String>,
        output: O,
        config: LocateConfig,
    ) -> Self {
        Self {
            s3_client,
            bucket: bucket.into(),
            prefix,
            output,
            config,
        }
    }

    /// Run the pipeline to completion.
    ///
    /// Fully sequential: each object is downloaded, scanned, and resolved
    /// (kept or deleted) before the next one is requested. The first error
    /// at any stage aborts the run and propagates; files already staged
    /// stay on disk, and matches already emitted have been written.
    pub async fn locate(&self) -> Result<LocateStats> {
        let mut stats = LocateStats::new();
        let matcher = SubstringMatcher::new(&self.config.substring);

        tokio::fs::create_dir_all(&self.config.staging_area)
            .await
            .map_err(|e| {
                BgError::Staging(format!(
                    "Failed to create '{}': {}",
                    self.config.staging_area.display(),
                    e
                ))
            })?;

        debug!(
            bucket = %self.bucket,
            prefix = ?self.prefix,
            substring = %matcher.needle(),
            staging_area = %self.config.staging_area.display(),
            "Starting locate run"
        );

        let stream = list_objects(&self.s3_client, &self.bucket, self.prefix.as_deref());
        pin_mut!(stream);

        while let Some(result) = stream.next().await {
            let obj = result?;

            let path = fetch_object(
                &self.s3_client,
                &self.bucket,
                &obj.key,
                &self.config.staging_area,
            )
            .await?;

            if matcher.matches_file(&path)? {
                let located = LocatedFile {
                    key: obj.key.clone(),
                    path,
                };
                self.output.output(&located).await?;
                stats.record_match(obj.size);
                debug!(key = %obj.key, "Match retained");
            } else {
                tokio::fs::remove_file(&path).await.map_err(|e| {
                    BgError::Staging(format!("Failed to remove '{}': {}", path.display(), e))
                })?;
                stats.record_discarded(obj.size);
                debug!(key = %obj.key, "No match, discarded");
            }
        }

        self.output.flush().await?;
        stats.complete();

        debug!(
            scanned = stats.objects_scanned,
            matched = stats.objects_matched,
            "Locate run complete"
        );

        Ok(stats)
    }
}
