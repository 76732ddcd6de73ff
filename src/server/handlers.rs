//! HTTP handlers.
//!
//! Each handler is stateless between requests: the PDF buffer and engine
//! document live only for the duration of one request, and CPU-bound
//! engine work runs on the blocking pool so the async runtime stays
//! responsive.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::domain::parse_items;
use crate::error::RedactResult;
use crate::server::error::ApiError;
use crate::server::models::{
    ExtractResponse, HealthResponse, RemoteRedactRequest, RemoteRedactResponse,
};
use crate::server::state::AppState;
use crate::storage::{ObjectStore, SupabaseStore};

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// `POST /extract-text-with-positions`: multipart upload of `pdf_file`,
/// returns every text run with its top-left bounding box.
pub async fn extract_text_with_positions(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<ExtractResponse>, ApiError> {
    let upload = read_upload(multipart).await?;
    let pdf = upload
        .pdf
        .ok_or_else(|| ApiError::InvalidRequest("missing 'pdf_file' field".to_string()))?;

    let service = state.service.clone();
    let text = run_blocking(move || service.extract(&pdf)).await?;

    info!(
        pages = text.page_count,
        spans = text.spans.len(),
        "extracted text positions"
    );

    Ok(Json(ExtractResponse {
        success: true,
        full_text: text.full_text,
        text_blocks: text.spans,
        total_pages: text.page_count,
    }))
}

/// `POST /redact-pdf`: multipart upload of `pdf_file` plus a
/// `redaction_items` JSON form field, returns the redacted PDF as an
/// attachment.
pub async fn redact_pdf(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<(StatusCode, [(String, String); 2], Vec<u8>), ApiError> {
    let upload = read_upload(multipart).await?;
    let pdf = upload
        .pdf
        .ok_or_else(|| ApiError::InvalidRequest("missing 'pdf_file' field".to_string()))?;
    let raw_items = upload
        .items
        .ok_or_else(|| ApiError::InvalidRequest("missing 'redaction_items' field".to_string()))?;

    // Validation happens before any engine work.
    let items = parse_items(&raw_items)?;

    let service = state.service.clone();
    let outcome = run_blocking(move || service.redact(&pdf, items)).await?;

    info!(
        applied = outcome.items_applied,
        skipped = outcome.items_skipped,
        pages_modified = outcome.pages_modified,
        "redaction complete"
    );

    Ok((
        StatusCode::OK,
        [
            ("Content-Type".to_string(), "application/pdf".to_string()),
            (
                "Content-Disposition".to_string(),
                "attachment; filename=\"redacted.pdf\"".to_string(),
            ),
        ],
        outcome.bytes,
    ))
}

/// `POST /redact`: JSON body naming an object in remote storage; the
/// source PDF is downloaded, redacted, and the result uploaded next to it.
pub async fn redact_remote(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RemoteRedactRequest>, JsonRejection>,
) -> Result<Json<RemoteRedactResponse>, ApiError> {
    // A missing or mistyped field is a caller error, not an unprocessable
    // entity; fold the extractor rejection into the 400 path.
    let Json(req) = payload
        .map_err(|e| ApiError::InvalidRequest(format!("invalid JSON body: {}", e.body_text())))?;

    for (field, value) in [
        ("supabase_pdf_path", &req.supabase_pdf_path),
        ("supabase_url", &req.supabase_url),
        ("supabase_key", &req.supabase_key),
    ] {
        if value.trim().is_empty() {
            return Err(ApiError::InvalidRequest(format!(
                "missing required field '{}'",
                field
            )));
        }
    }

    // Per-request store over the shared connection pool; credentials are
    // never retained beyond this request.
    let store = SupabaseStore::new(state.http.clone(), &req.supabase_url, &req.supabase_key);
    let pdf = store
        .download(&state.buckets.source, &req.supabase_pdf_path)
        .await?;

    let service = state.service.clone();
    let items = req.items;
    let outcome = run_blocking(move || service.redact(&pdf, items)).await?;

    let object_name = redacted_object_name(&req.supabase_pdf_path);
    store
        .upload(
            &state.buckets.output,
            &object_name,
            outcome.bytes,
            "application/pdf",
        )
        .await?;

    let redacted_file_path = format!("{}/{}", state.buckets.output, object_name);
    info!(
        source = %req.supabase_pdf_path,
        destination = %redacted_file_path,
        applied = outcome.items_applied,
        skipped = outcome.items_skipped,
        "remote redaction complete"
    );

    Ok(Json(RemoteRedactResponse {
        status: "ok",
        redacted_file_path,
        job_id: req.job_id,
    }))
}

/// Fields pulled out of a multipart upload.
#[derive(Default)]
struct Upload {
    pdf: Option<Vec<u8>>,
    items: Option<String>,
}

async fn read_upload(mut multipart: Multipart) -> Result<Upload, ApiError> {
    let mut upload = Upload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidRequest(format!("malformed multipart body: {}", e)))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("pdf_file") => {
                let bytes = field.bytes().await.map_err(|e| {
                    ApiError::InvalidRequest(format!("failed to read 'pdf_file': {}", e))
                })?;
                upload.pdf = Some(bytes.to_vec());
            }
            Some("redaction_items") => {
                let text = field.text().await.map_err(|e| {
                    ApiError::InvalidRequest(format!("failed to read 'redaction_items': {}", e))
                })?;
                upload.items = Some(text);
            }
            // Unknown fields are drained and ignored.
            _ => {}
        }
    }

    Ok(upload)
}

/// Runs engine work on the blocking pool.
async fn run_blocking<T, F>(f: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce() -> RedactResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("blocking task failed: {}", e)))?
        .map_err(ApiError::from)
}

/// Output object name for a redacted copy: `uploads/a.pdf` becomes
/// `redacted-a.pdf`.
fn redacted_object_name(source_path: &str) -> String {
    let file_name = source_path
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("document.pdf");
    format!("redacted-{}", file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redacted_object_name() {
        assert_eq!(redacted_object_name("a.pdf"), "redacted-a.pdf");
        assert_eq!(redacted_object_name("uploads/q3/a.pdf"), "redacted-a.pdf");
        assert_eq!(redacted_object_name("trailing/"), "redacted-document.pdf");
    }
}
