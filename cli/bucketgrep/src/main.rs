//! bucketgrep CLI
//!
//! Substring search over S3 objects with local staging.

use clap::Parser;

mod args;
mod run;

use args::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Initialize logging (to stderr, so stdout is clean for match lines)
    run::init_logging(args.log_level)?;

    // Run the locator
    let stats = run::execute(args).await?;

    // Report results to stderr
    eprintln!();
    eprintln!("Locate completed:");
    eprintln!("  Objects scanned:   {}", stats.objects_scanned);
    eprintln!("  Objects matched:   {}", stats.objects_matched);
    eprintln!("  Objects discarded: {}", stats.objects_discarded);
    eprintln!(
        "  Bytes downloaded:  {}",
        format_bytes(stats.bytes_downloaded)
    );

    if let Some(duration) = stats.duration() {
        eprintln!(
            "  Duration:          {:.2}s",
            duration.num_milliseconds() as f64 / 1000.0
        );

        if let Some(ops) = stats.objects_per_second() {
            eprintln!("  Throughput:        {:.1} objects/sec", ops);
        }
    }

    Ok(())
}

/// Format bytes as human-readable string.
fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.2} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
