//! Shared application state.
//!
//! Everything a handler needs is carried here and injected through axum's
//! `State` extractor: the redaction service, the pooled HTTP client that
//! per-request storage clients are built over, and bucket names. There is
//! no process-wide mutable state.

use std::sync::Arc;

use crate::redaction::RedactionService;

/// Bucket names for the remote-redaction flow.
#[derive(Debug, Clone)]
pub struct BucketConfig {
    /// Bucket the source PDF is fetched from
    pub source: String,

    /// Bucket the redacted PDF is uploaded to
    pub output: String,
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self {
            source: "documents".to_string(),
            output: "redacted".to_string(),
        }
    }
}

pub struct AppState {
    pub service: Arc<RedactionService>,
    pub http: reqwest::Client,
    pub buckets: BucketConfig,
}

impl AppState {
    /// State for production use, backed by the MuPDF engine.
    pub fn new(buckets: BucketConfig) -> Self {
        Self::with_service(Arc::new(RedactionService::with_mupdf_engine()), buckets)
    }

    /// State over an explicit service, used by tests to substitute a fake
    /// engine.
    pub fn with_service(service: Arc<RedactionService>, buckets: BucketConfig) -> Self {
        Self {
            service,
            http: reqwest::Client::new(),
            buckets,
        }
    }
}
