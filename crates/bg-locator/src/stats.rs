//! Statistics for locate runs.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Counters collected over a single locate run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocateStats {
    /// When the run started
    pub started_at: Option<DateTime<Utc>>,

    /// When the run completed
    pub completed_at: Option<DateTime<Utc>>,

    /// Objects downloaded and scanned (matched + discarded)
    pub objects_scanned: usize,

    /// Objects whose content contained the substring (retained on disk)
    pub objects_matched: usize,

    /// Objects without a match (downloaded then deleted)
    pub objects_discarded: usize,

    /// Total bytes downloaded, including discarded objects
    pub bytes_downloaded: u64,
}

impl LocateStats {
    /// Create a new stats tracker with the current time as start time.
    pub fn new() -> Self {
        Self {
            started_at: Some(Utc::now()),
            ..Default::default()
        }
    }

    /// Mark the run as complete with the current time.
    pub fn complete(&mut self) {
        self.completed_at = Some(Utc::now());
    }

    /// Record a scanned object that matched and was retained.
    pub fn record_match(&mut self, size_bytes: u64) {
        self.objects_scanned += 1;
        self.objects_matched += 1;
        self.bytes_downloaded += size_bytes;
    }

    /// Record a scanned object that did not match and was deleted.
    pub fn record_discarded(&mut self, size_bytes: u64) {
        self.objects_scanned += 1;
        self.objects_discarded += 1;
        self.bytes_downloaded += size_bytes;
    }

    /// Get the duration of the run.
    pub fn duration(&self) -> Option<Duration> {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    /// Objects scanned per second over the whole run.
    pub fn objects_per_second(&self) -> Option<f64> {
        let duration = self.duration()?;
        let secs = duration.num_milliseconds() as f64 / 1000.0;

        if secs <= 0.0 {
            return None;
        }

        Some(self.objects_scanned as f64 / secs)
    }
}
