//! Wire types for redaction requests and extraction responses.

use serde::{Deserialize, Serialize};

use super::geometry::BoundingBox;
use crate::error::{RedactError, RedactResult};

/// One rectangular region a caller wants blacked out.
///
/// `page` is 1-based and required; a payload without it fails validation
/// instead of being silently attributed to page 1. The bbox is in
/// top-left-origin coordinates, so extraction output can be fed back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedactionItem {
    pub page: u32,
    pub bbox: BoundingBox,
    /// Optional caller-side label ("email", "ssn", ...); carried through
    /// for logging, never interpreted.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// One extracted text run with its on-page position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    pub text: String,
    pub page: u32,
    pub bbox: BoundingBox,
}

/// Parses a JSON-encoded array of redaction items and validates it.
///
/// Used for the multipart form field, where the items arrive as a raw
/// string next to the uploaded file.
pub fn parse_items(raw: &str) -> RedactResult<Vec<RedactionItem>> {
    let items: Vec<RedactionItem> = serde_json::from_str(raw)?;
    validate_items(&items)?;
    Ok(items)
}

/// Validates an already-deserialized item list.
///
/// Rejects 0 page numbers (pages are 1-based) and boxes with negative or
/// non-finite extents. Out-of-range page numbers are deliberately *not*
/// rejected here; they are skipped at apply time against the real page
/// count.
pub fn validate_items(items: &[RedactionItem]) -> RedactResult<()> {
    for (idx, item) in items.iter().enumerate() {
        if item.page == 0 {
            return Err(RedactError::MalformedItems {
                reason: format!("item {}: page numbers are 1-based, got 0", idx),
            });
        }
        if !item.bbox.is_valid() {
            return Err(RedactError::MalformedItems {
                reason: format!(
                    "item {}: bbox must have finite fields and non-negative extents, got {:?}",
                    idx, item.bbox
                ),
            });
        }
    }
    Ok(())
}
