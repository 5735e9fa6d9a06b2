//! Pipeline configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for a locate run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocateConfig {
    /// Substring to search for (exact, case-sensitive)
    pub substring: String,

    /// Directory that receives downloads; matching files are retained here
    pub staging_area: PathBuf,
}

impl LocateConfig {
    /// Create a configuration for the given substring and staging area.
    pub fn new(substring: impl Into<String>, staging_area: impl Into<PathBuf>) -> Self {
        Self {
            substring: substring.into(),
            staging_area: staging_area.into(),
        }
    }

    /// Default staging area for a bucket: `<system-temp>/<bucket>`.
    pub fn default_staging_area(bucket: &str) -> PathBuf {
        std::env::temp_dir().join(bucket)
    }
}
