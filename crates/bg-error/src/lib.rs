//! Error types for bucketgrep.
//!
//! This crate provides:
//! - [`BgError`] - Top-level error enum for all pipeline errors
//! - Domain-specific errors ([`FetchError`], [`ScanError`])
//! - The [`Result`] alias used throughout the workspace

use thiserror::Error;

/// Top-level error type for bucketgrep.
///
/// Nothing in the pipeline catches or retries these; the first error at
/// any stage aborts the run and surfaces through the CLI with a nonzero
/// exit status.
#[derive(Error, Debug)]
pub enum BgError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// S3 listing errors (bucket missing, access denied, network fault)
    #[error("S3 listing failed: {0}")]
    List(String),

    /// Download and local-write errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Text-scan errors (I/O, non-UTF-8 content)
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    /// Staging directory errors (create, remove)
    #[error("Staging area error: {0}")]
    Staging(String),

    /// Match-emission errors
    #[error("Output error: {0}")]
    Output(String),

    /// Generic errors (wrapped anyhow)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Errors while fetching an object into the staging area.
#[derive(Error, Debug)]
pub enum FetchError {
    /// S3 download failed (object missing, network fault)
    #[error("Download failed: {0}")]
    Download(String),

    /// Writing the downloaded bytes to disk failed
    #[error("Write failed: {0}")]
    Write(String),
}

/// Errors while scanning a staged file for the substring.
#[derive(Error, Debug)]
pub enum ScanError {
    /// I/O error opening or reading the file
    #[error("I/O error: {0}")]
    Io(String),

    /// File content is not valid UTF-8 text
    #[error("Decode failed: {0}")]
    Decode(String),
}

/// Result type alias using BgError.
pub type Result<T> = std::result::Result<T, BgError>;
