//! Main execution logic for the bucketgrep CLI.

use anyhow::Result;
use bg_locator::{LocateConfig, LocateStats, Locator, S3Config, StdoutOutput, create_s3_client};
use tracing::Level;
use tracing_subscriber::fmt;

use crate::args::{Cli, LogLevel};

/// Initialize logging.
pub fn init_logging(level: LogLevel) -> Result<()> {
    let level: Level = level.into();

    let subscriber = fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr); // Log to stderr so stdout is clean for match output

    subscriber.init();

    Ok(())
}

/// Execute the locator with the provided arguments.
pub async fn execute(args: Cli) -> Result<LocateStats> {
    // Build S3 connection settings
    let mut s3_config = S3Config::new().with_region(&args.region);

    if let Some(endpoint) = &args.s3_endpoint {
        s3_config = s3_config.with_endpoint(endpoint);
    }

    if let (Some(access_key), Some(secret_key)) = (&args.access_key, &args.secret_key) {
        s3_config = s3_config.with_credentials(access_key, secret_key);
    }

    if let Some(profile) = &args.profile {
        s3_config = s3_config.with_profile(profile);
    }

    // Create S3 client
    let s3_client = create_s3_client(&s3_config).await?;

    // Resolve the staging area
    let staging_area = args
        .staging_area
        .clone()
        .unwrap_or_else(|| LocateConfig::default_staging_area(&args.bucket_name));

    let config = LocateConfig::new(&args.substring, staging_area);

    // Run the pipeline, printing each match to stdout as it is found
    let locator = Locator::new(
        s3_client,
        &args.bucket_name,
        args.prefix.clone(),
        StdoutOutput::new(),
        config,
    );

    let stats = locator.locate().await?;
    Ok(stats)
}
