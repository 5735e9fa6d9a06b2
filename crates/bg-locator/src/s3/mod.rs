//! S3 client and listing functionality.
//!
//! This module provides the S3 side of the pipeline:
//! - Client configuration with LocalStack support
//! - Paginated object listing as a lazy stream

mod client;
mod list;

pub use client::{S3Config, create_s3_client};
pub use list::{S3Object, list_objects, list_objects_paged};
