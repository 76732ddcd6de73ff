//! Request and response DTOs for the HTTP surface.

use serde::{Deserialize, Serialize};

use crate::domain::{RedactionItem, TextSpan};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Response body for `POST /extract-text-with-positions`.
#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub success: bool,
    pub full_text: String,
    pub text_blocks: Vec<TextSpan>,
    pub total_pages: usize,
}

/// Request body for `POST /redact` (remote-storage flavor).
///
/// Storage credentials travel with the request; only bucket names come
/// from service configuration.
#[derive(Debug, Deserialize)]
pub struct RemoteRedactRequest {
    pub supabase_pdf_path: String,
    pub items: Vec<RedactionItem>,
    pub supabase_url: String,
    pub supabase_key: String,
    /// Caller-side correlation id, echoed back untouched
    #[serde(rename = "jobId", default)]
    pub job_id: Option<String>,
}

/// Response body for `POST /redact`.
#[derive(Debug, Serialize)]
pub struct RemoteRedactResponse {
    pub status: &'static str,
    pub redacted_file_path: String,
    #[serde(rename = "jobId", skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
}
