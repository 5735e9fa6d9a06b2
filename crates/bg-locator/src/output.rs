//! Output sinks for located files.

use std::io::Write;

use async_trait::async_trait;
use bg_error::{BgError, Result};

use crate::LocatedFile;

/// Destination for match results.
///
/// The pipeline emits each located file as soon as it is found, so sinks
/// see matches incrementally rather than as a final batch. A mid-run
/// failure therefore never discards matches that were already emitted.
#[async_trait]
pub trait Output: Send + Sync {
    /// Emit a single located file.
    async fn output(&self, file: &LocatedFile) -> Result<()>;

    /// Flush any buffered output. Called once after the run completes.
    async fn flush(&self) -> Result<()>;
}

/// Prints one `<object-key> <local-path>` line per match to stdout.
///
/// Logging goes to stderr, so stdout carries nothing but match lines and
/// stays pipeable.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutOutput;

impl StdoutOutput {
    /// Create a new stdout sink.
    pub fn new() -> Self {
        Self
    }
}

fn render(file: &LocatedFile) -> String {
    format!("{} {}", file.key, file.path.display())
}

#[async_trait]
impl Output for StdoutOutput {
    async fn output(&self, file: &LocatedFile) -> Result<()> {
        println!("{}", render(file));
        Ok(())
    }

    async fn flush(&self) -> Result<()> {
        std::io::stdout()
            .flush()
            .map_err(|e| BgError::Output(format!("Failed to flush stdout: {e}")))?;
        Ok(())
    }
}
