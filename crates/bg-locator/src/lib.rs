//! bg-locator - substring search over S3 objects with local staging.
//!
//! This crate is the library behind the `bucketgrep` CLI. It:
//!
//! - Lists S3 objects with transparent pagination
//! - Downloads each object into a local staging directory
//! - Scans downloads line by line for a target substring
//! - Keeps matching files and deletes the rest
//! - Emits each match to a pluggable output sink as soon as it is found
//!
//! # Example
//!
//! ```ignore
//! use bg_locator::{LocateConfig, Locator, S3Config, StdoutOutput, create_s3_client};
//!
//! // Configure S3 access
//! let s3_config = S3Config::new()
//!     .with_region("us-east-1")
//!     .with_endpoint("http://localhost:4566");
//!
//! let client = create_s3_client(&s3_config).await?;
//!
//! // Configure and run the pipeline
//! let config = LocateConfig::new("needle", "/tmp/my-bucket");
//! let locator = Locator::new(client, "my-bucket", None, StdoutOutput::new(), config);
//!
//! let stats = locator.locate().await?;
//! eprintln!(
//!     "Matched {} of {} objects",
//!     stats.objects_matched, stats.objects_scanned
//! );
//! ```

use std::path::PathBuf;

pub mod config;
pub mod fetch;
pub mod locator;
pub mod matcher;
pub mod output;
pub mod s3;
pub mod stats;

pub use config::LocateConfig;
pub use fetch::{fetch_object, staging_path};
pub use locator::Locator;
pub use matcher::SubstringMatcher;
pub use output::{Output, StdoutOutput};
pub use s3::{S3Config, S3Object, create_s3_client, list_objects, list_objects_paged};
pub use stats::LocateStats;

/// A matching file retained in the staging area.
///
/// Emitted once per object whose content contained the target substring.
/// Transient report value; the CLI prints it and moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedFile {
    /// The object key within the bucket
    pub key: String,

    /// Local path of the retained download
    pub path: PathBuf,
}
