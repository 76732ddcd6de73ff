//! Supabase Storage client.
//!
//! Thin wrapper over the Storage REST API: objects live under
//! `{base}/storage/v1/object/{bucket}/{path}` and authenticate with the
//! service key in both the `Authorization` and `apikey` headers.
//!
//! Credentials arrive with each request, so the store is constructed per
//! request over a shared connection pool rather than held as process
//! state.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::ObjectStore;
use crate::error::{RedactError, RedactResult};

/// Supabase Storage client scoped to one project URL and key.
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    http: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseStore {
    /// Creates a store over an existing HTTP client (connection pool).
    pub fn new(http: Client, base_url: &str, api_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn object_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url,
            bucket,
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl ObjectStore for SupabaseStore {
    async fn download(&self, bucket: &str, path: &str) -> RedactResult<Vec<u8>> {
        let url = self.object_url(bucket, path);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .header("apikey", &self.api_key)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.bytes().await?.to_vec()),
            StatusCode::NOT_FOUND | StatusCode::BAD_REQUEST => Err(RedactError::ObjectNotFound {
                bucket: bucket.to_string(),
                path: path.to_string(),
            }),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(RedactError::Storage {
                    operation: "download".to_string(),
                    message: format!("unexpected status {} for '{}': {}", status, url, body),
                    source: None,
                })
            }
        }
    }

    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> RedactResult<()> {
        let url = self.object_url(bucket, path);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("apikey", &self.api_key)
            .header("x-upsert", "true")
            .header("content-type", content_type.to_string())
            .body(bytes)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(RedactError::Storage {
                operation: "upload".to_string(),
                message: format!("unexpected status {} for '{}': {}", status, url, body),
                source: None,
            })
        }
    }
}
