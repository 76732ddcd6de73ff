//! PDF engine trait and supporting types.
//!
//! This module defines the capability seam between the service and the
//! PDF-manipulation backend, allowing handlers to be exercised against a
//! fake engine in tests.

use crate::domain::{PdfRect, RedactionPlan};
use crate::error::RedactResult;

/// RGB fill applied to flattened redaction regions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl FillColor {
    pub const BLACK: FillColor = FillColor {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
}

impl Default for FillColor {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Statistics and output of one redaction pass.
#[derive(Debug, Clone, Default)]
pub struct RedactionOutcome {
    /// Resulting PDF bytes (the unchanged input when nothing applied)
    pub bytes: Vec<u8>,

    /// Pages in the document
    pub pages_processed: usize,

    /// Pages that had at least one region flattened
    pub pages_modified: usize,

    /// Regions marked and flattened
    pub items_applied: usize,

    /// Items skipped because their page index was out of range
    pub items_skipped: usize,
}

impl RedactionOutcome {
    /// Returns true if any regions were flattened.
    pub fn has_redactions(&self) -> bool {
        self.items_applied > 0
    }
}

/// One text run as reported by the engine, rect in PDF-native coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSpan {
    pub text: String,
    pub rect: PdfRect,
}

/// One page worth of structured text.
#[derive(Debug, Clone, Default)]
pub struct ExtractedPage {
    /// 1-based page number
    pub number: u32,

    /// Page height, needed to flip into top-left coordinates
    pub height: f32,

    /// Spans in reading order as the engine reports them
    pub spans: Vec<RawSpan>,
}

/// Structured text for a whole document.
#[derive(Debug, Clone, Default)]
pub struct ExtractedDocument {
    pub page_count: usize,
    pub pages: Vec<ExtractedPage>,
}

/// Capability interface over the external PDF engine.
///
/// Implementations own the whole open-operate-close lifecycle for a
/// single call; no document handle outlives a method invocation.
pub trait PdfEngine: Send + Sync {
    /// Marks every planned region for redaction and flattens them,
    /// returning the rewritten document bytes and statistics.
    ///
    /// Pages referenced past the end of the document are skipped with a
    /// warning, never an error.
    fn apply(
        &self,
        pdf: &[u8],
        plan: &RedactionPlan,
        fill: FillColor,
    ) -> RedactResult<RedactionOutcome>;

    /// Walks the document's structured text in reading order.
    ///
    /// Spans are emitted at line granularity: separate runs sharing a
    /// baseline come back as one span covering the whole line, and a
    /// single run is never split. Whitespace-only lines are dropped.
    fn extract(&self, pdf: &[u8]) -> RedactResult<ExtractedDocument>;

    /// Returns a human-readable name for this engine.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_has_redactions() {
        let outcome = RedactionOutcome::default();
        assert!(!outcome.has_redactions());

        let outcome = RedactionOutcome {
            items_applied: 2,
            ..Default::default()
        };
        assert!(outcome.has_redactions());
    }

    #[test]
    fn test_default_fill_is_black() {
        assert_eq!(FillColor::default(), FillColor::BLACK);
    }
}
