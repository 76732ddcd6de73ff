//! HTTP service for PDF region redaction and positioned text extraction.
//!
//! This crate blacks out caller-specified rectangles in PDF documents
//! using MuPDF's redaction API (physical removal, not a visual overlay)
//! and extracts text runs together with their on-page bounding boxes so a
//! caller can locate sensitive text before requesting redaction.
//!
//! # Architecture
//!
//! - [`domain`]: rectangle types, the coordinate-system normalizer, wire
//!   types, and the page grouper
//! - [`redaction`]: the [`redaction::PdfEngine`] capability trait, its
//!   MuPDF implementation, and the orchestrating service
//! - [`storage`]: object-storage interface for the remote-redaction flow
//! - [`server`]: axum router, handlers, and HTTP error mapping
//! - [`error`]: comprehensive error handling
//!
//! # Coordinate conventions
//!
//! Callers speak top-left-origin boxes (`{x, y, width, height}`, Y grows
//! downward); PDF content speaks bottom-left-origin rects (Y grows
//! upward). Extraction output is top-left, redaction items are top-left,
//! and the flip against the page height happens inside the service, so
//! extracted spans can be fed straight back as redaction items.
//!
//! # Quick Start
//!
//! ```no_run
//! use blackout::{RedactionService, RedactionItem, BoundingBox};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = RedactionService::with_mupdf_engine();
//! let pdf = std::fs::read("input.pdf")?;
//!
//! let items = vec![RedactionItem {
//!     page: 1,
//!     bbox: BoundingBox::new(50.0, 77.0, 100.0, 15.0),
//!     kind: None,
//! }];
//!
//! let outcome = service.redact(&pdf, items)?;
//! std::fs::write("output.pdf", outcome.bytes)?;
//! # Ok(())
//! # }
//! ```

// Public API
pub mod domain;
pub mod error;
pub mod redaction;
pub mod server;
pub mod storage;

// Re-exports for convenient access
pub use domain::{
    parse_items, validate_items, BoundingBox, PdfRect, RedactionItem, RedactionPlan, TextSpan,
};
pub use error::{RedactError, RedactResult};
pub use redaction::{
    DocumentText, ExtractedDocument, ExtractedPage, FillColor, MupdfEngine, PdfEngine, RawSpan,
    RedactionOutcome, RedactionService,
};
pub use storage::{ObjectStore, SupabaseStore};
