//! CLI argument definitions for bucketgrep.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Locate files in an S3 bucket whose content contains a substring.
///
/// Every object is downloaded into the staging area and scanned line by
/// line. Matching files are retained and reported as `<key> <path>` lines
/// on stdout; non-matching downloads are deleted immediately.
///
/// ## Examples
///
/// Basic usage:
///   bucketgrep "error code 42" my-bucket
///
/// With an explicit staging area and prefix:
///   bucketgrep -s /var/tmp/scan -p "logs/2026/" "error code 42" my-bucket
///
/// Against LocalStack:
///   bucketgrep --s3-endpoint http://localhost:4566 hello test-bucket
#[derive(Parser, Debug)]
#[command(name = "bucketgrep")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The substring to look for
    pub substring: String,

    /// The name of the bucket to look in
    pub bucket_name: String,

    /// Where to store matching files (defaults to <temp-dir>/<bucket_name>)
    #[arg(short = 's', long)]
    pub staging_area: Option<PathBuf>,

    /// Only scan keys under this prefix
    #[arg(short, long, env = "BG_S3_PREFIX")]
    pub prefix: Option<String>,

    // === S3 Configuration ===
    /// Custom S3 endpoint URL (for LocalStack)
    #[arg(long, env = "BG_S3_ENDPOINT")]
    pub s3_endpoint: Option<String>,

    /// AWS region
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,

    /// AWS access key ID
    #[arg(long, env = "AWS_ACCESS_KEY_ID")]
    pub access_key: Option<String>,

    /// AWS secret access key
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY")]
    pub secret_key: Option<String>,

    /// AWS profile name
    #[arg(long, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    // === Logging Options ===
    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

/// Log level argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    /// Trace level (most verbose)
    Trace,
    /// Debug level
    Debug,
    /// Info level (default)
    Info,
    /// Warning level
    Warn,
    /// Error level (least verbose)
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
