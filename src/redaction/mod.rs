//! Redaction orchestration over a pluggable PDF engine.
//!
//! The service owns the request-level flow for both operations: validate,
//! group, delegate to the engine, and shape the engine's output into wire
//! types. It holds no state beyond the boxed engine and is safe to share
//! across requests.

pub mod engine;
pub mod mupdf;

pub use engine::{
    ExtractedDocument, ExtractedPage, FillColor, PdfEngine, RawSpan, RedactionOutcome,
};
pub use self::mupdf::MupdfEngine;

use crate::domain::{validate_items, RedactionItem, RedactionPlan, TextSpan};
use crate::error::RedactResult;

/// Positioned text for a whole document, in caller coordinates.
#[derive(Debug, Clone, Default)]
pub struct DocumentText {
    /// All span texts joined with single spaces, in reading order
    pub full_text: String,

    /// Spans with top-left-origin bounding boxes
    pub spans: Vec<TextSpan>,

    /// Pages in the document
    pub page_count: usize,
}

/// Redaction service coordinating engine execution.
pub struct RedactionService {
    engine: Box<dyn PdfEngine>,
    fill: FillColor,
}

impl RedactionService {
    /// Creates a new service over the given engine.
    pub fn new(engine: Box<dyn PdfEngine>) -> Self {
        Self {
            engine,
            fill: FillColor::default(),
        }
    }

    /// Creates a service backed by MuPDF.
    pub fn with_mupdf_engine() -> Self {
        Self::new(Box::new(MupdfEngine::new()))
    }

    /// Overrides the fill color used for flattened regions.
    pub fn with_fill(mut self, fill: FillColor) -> Self {
        self.fill = fill;
        self
    }

    /// Blacks out the requested regions and returns the rewritten bytes.
    ///
    /// Items referencing pages past the end of the document are skipped
    /// and counted in the outcome; an empty item list returns the input
    /// unchanged. Malformed items fail before the engine is invoked.
    pub fn redact(&self, pdf: &[u8], items: Vec<RedactionItem>) -> RedactResult<RedactionOutcome> {
        validate_items(&items)?;

        let plan = RedactionPlan::from_items(items);
        if plan.is_empty() {
            return Ok(RedactionOutcome {
                bytes: pdf.to_vec(),
                ..Default::default()
            });
        }

        self.engine.apply(pdf, &plan, self.fill)
    }

    /// Extracts text runs with top-left-origin bounding boxes.
    pub fn extract(&self, pdf: &[u8]) -> RedactResult<DocumentText> {
        let extracted = self.engine.extract(pdf)?;

        let mut spans = Vec::new();
        let mut full_text = String::new();
        for page in &extracted.pages {
            for raw in &page.spans {
                if !full_text.is_empty() {
                    full_text.push(' ');
                }
                full_text.push_str(raw.text.trim());

                spans.push(TextSpan {
                    text: raw.text.clone(),
                    page: page.number,
                    bbox: raw.rect.to_top_left(page.height),
                });
            }
        }

        Ok(DocumentText {
            full_text,
            spans,
            page_count: extracted.page_count,
        })
    }

    /// Returns the name of the underlying engine.
    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }
}
