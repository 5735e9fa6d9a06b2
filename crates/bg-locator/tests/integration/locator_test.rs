//! Locate pipeline integration tests using LocalStack.
//!
//! These verify the end-to-end list → download → scan → keep-or-discard
//! behavior against a real S3 API.

use std::sync::{Arc, Mutex};

use bg_error::{BgError, Result, ScanError};
use bg_locator::{
    LocateConfig, LocatedFile, Locator, Output, S3Config, create_s3_client, list_objects_paged,
};
use futures::{StreamExt, pin_mut};

use crate::common::LocalStackTestContext;

/// Collecting output that stores located files for verification.
#[derive(Default, Clone)]
struct CollectingOutput {
    files: Arc<Mutex<Vec<LocatedFile>>>,
}

impl CollectingOutput {
    fn new() -> Self {
        Self::default()
    }

    fn files(&self) -> Vec<LocatedFile> {
        self.files.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Output for CollectingOutput {
    async fn output(&self, file: &LocatedFile) -> Result<()> {
        self.files.lock().unwrap().push(file.clone());
        Ok(())
    }

    async fn flush(&self) -> Result<()> {
        Ok(())
    }
}

async fn localstack_client(ctx: &LocalStackTestContext) -> aws_sdk_s3::Client {
    let config = S3Config::new()
        .with_region(&ctx.region)
        .with_endpoint(&ctx.endpoint);

    create_s3_client(&config).await.unwrap()
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_locate_keeps_matches_and_discards_the_rest() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "test-locate-bucket";
    ctx.create_bucket(bucket).await.unwrap();
    ctx.upload_text(bucket, "a.txt", "hello world\n").await.unwrap();
    ctx.upload_text(bucket, "b.txt", "goodbye\n").await.unwrap();

    let client = localstack_client(&ctx).await;
    let staging = tempfile::tempdir().unwrap();
    let output = CollectingOutput::new();

    let locator = Locator::new(
        client,
        bucket,
        None,
        output.clone(),
        LocateConfig::new("hello", staging.path()),
    );

    let stats = locator.locate().await.unwrap();

    // Exactly one match, reported with its staging path
    let files = output.files();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].key, "a.txt");
    assert_eq!(files[0].path, staging.path().join("a.txt"));

    // The match is retained, the non-match was downloaded then deleted
    assert!(staging.path().join("a.txt").exists());
    assert!(!staging.path().join("b.txt").exists());

    assert_eq!(stats.objects_scanned, 2);
    assert_eq!(stats.objects_matched, 1);
    assert_eq!(stats.objects_discarded, 1);

    ctx.delete_object(bucket, "a.txt").await.ok();
    ctx.delete_object(bucket, "b.txt").await.ok();
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_locate_empty_bucket() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "test-locate-empty-bucket";
    ctx.create_bucket(bucket).await.unwrap();

    let client = localstack_client(&ctx).await;
    let staging = tempfile::tempdir().unwrap();
    let staging_area = staging.path().join("stage");
    let output = CollectingOutput::new();

    let locator = Locator::new(
        client,
        bucket,
        None,
        output.clone(),
        LocateConfig::new("anything", &staging_area),
    );

    let stats = locator.locate().await.unwrap();

    // No matches, but the staging directory was created and is empty
    assert!(output.files().is_empty());
    assert_eq!(stats.objects_scanned, 0);
    assert!(staging_area.is_dir());
    assert_eq!(std::fs::read_dir(&staging_area).unwrap().count(), 0);
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_locate_respects_prefix() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "test-locate-prefix-bucket";
    ctx.create_bucket(bucket).await.unwrap();
    ctx.upload_text(bucket, "data/in.txt", "needle here\n").await.unwrap();
    ctx.upload_text(bucket, "other/out.txt", "needle here\n").await.unwrap();

    let client = localstack_client(&ctx).await;
    let staging = tempfile::tempdir().unwrap();
    let output = CollectingOutput::new();

    let locator = Locator::new(
        client,
        bucket,
        Some("data/".to_string()),
        output.clone(),
        LocateConfig::new("needle", staging.path()),
    );

    locator.locate().await.unwrap();

    let files = output.files();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].key, "data/in.txt");

    ctx.delete_object(bucket, "data/in.txt").await.ok();
    ctx.delete_object(bucket, "other/out.txt").await.ok();
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_locate_is_idempotent_across_runs() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "test-locate-idempotent-bucket";
    ctx.create_bucket(bucket).await.unwrap();
    ctx.upload_text(bucket, "a.txt", "hello again\n").await.unwrap();
    ctx.upload_text(bucket, "b.txt", "nothing\n").await.unwrap();

    let client = localstack_client(&ctx).await;
    let staging = tempfile::tempdir().unwrap();

    let mut match_sets = Vec::new();
    for _ in 0..2 {
        let output = CollectingOutput::new();
        let locator = Locator::new(
            client.clone(),
            bucket,
            None,
            output.clone(),
            LocateConfig::new("hello", staging.path()),
        );

        let stats = locator.locate().await.unwrap();
        assert_eq!(stats.objects_scanned, 2);
        match_sets.push(output.files());
    }

    // Same match set both runs; the retained file was simply overwritten
    assert_eq!(match_sets[0], match_sets[1]);
    assert!(staging.path().join("a.txt").exists());

    ctx.delete_object(bucket, "a.txt").await.ok();
    ctx.delete_object(bucket, "b.txt").await.ok();
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_list_objects_follows_pagination() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "test-locate-paging-bucket";
    ctx.create_bucket(bucket).await.unwrap();

    let total = 25;
    for i in 0..total {
        ctx.upload_text(bucket, &format!("obj-{i:02}.txt"), "x\n")
            .await
            .unwrap();
    }

    let client = localstack_client(&ctx).await;

    // A page size of 10 forces three pages for 25 objects
    let stream = list_objects_paged(&client, bucket, None, Some(10));
    pin_mut!(stream);

    let mut keys = Vec::new();
    while let Some(result) = stream.next().await {
        keys.push(result.unwrap().key);
    }

    assert_eq!(keys.len(), total);

    // Every key exactly once
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), total);

    for i in 0..total {
        ctx.delete_object(bucket, &format!("obj-{i:02}.txt")).await.ok();
    }
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_non_utf8_object_aborts_the_run() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "test-locate-binary-bucket";
    ctx.create_bucket(bucket).await.unwrap();

    // Keys are listed lexicographically, so the match comes first
    ctx.upload_text(bucket, "a-match.txt", "needle here\n").await.unwrap();
    ctx.upload_bytes(bucket, "z-binary.bin", vec![0xff, 0xfe, 0x00, 0x41])
        .await
        .unwrap();

    let client = localstack_client(&ctx).await;
    let staging = tempfile::tempdir().unwrap();
    let output = CollectingOutput::new();

    let locator = Locator::new(
        client,
        bucket,
        None,
        output.clone(),
        LocateConfig::new("needle", staging.path()),
    );

    let err = locator.locate().await.unwrap_err();
    assert!(matches!(err, BgError::Scan(ScanError::Decode(_))));

    // The match found before the failure was already emitted, and files
    // staged before the failure stay on disk (no cleanup on abort)
    let files = output.files();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].key, "a-match.txt");
    assert!(staging.path().join("a-match.txt").exists());
    assert!(staging.path().join("z-binary.bin").exists());

    ctx.delete_object(bucket, "a-match.txt").await.ok();
    ctx.delete_object(bucket, "z-binary.bin").await.ok();
}
