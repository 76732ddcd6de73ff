//! MuPDF-backed engine implementation.
//!
//! Applies redactions by creating PDF redaction annotations at the planned
//! rectangles and flattening them with `pdf_redact_page` (physical removal,
//! not a visual overlay), and extracts structured text with per-line
//! bounding boxes.
//!
//! The `mupdf` wrapper is driven through its path-based open/save API, so
//! in-memory buffers are staged through temp files that are released on
//! every exit path.

use std::io::Write;
use std::path::Path;

use mupdf::pdf::{PdfAnnotationType, PdfDocument, PdfPage};
use mupdf::{Page, Rect as MuRect, TextPageOptions};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::engine::{
    ExtractedDocument, ExtractedPage, FillColor, PdfEngine, RawSpan, RedactionOutcome,
};
use crate::domain::{PdfRect, RedactionPlan};
use crate::error::{RedactError, RedactResult};

/// PDF engine backed by MuPDF.
///
/// Each call opens its own document and drops it before returning;
/// nothing is shared between requests.
#[derive(Debug, Clone, Default)]
pub struct MupdfEngine;

impl MupdfEngine {
    pub fn new() -> Self {
        Self
    }

    fn open(&self, staged: &NamedTempFile) -> RedactResult<PdfDocument> {
        let path = path_str(staged.path())?;
        PdfDocument::open(path).map_err(|e| RedactError::PdfProcessing {
            message: "Failed to open PDF with MuPDF".to_string(),
            page: None,
            source: Some(Box::new(e)),
        })
    }

    fn load_page(&self, doc: &PdfDocument, page_idx: i32) -> RedactResult<Page> {
        doc.load_page(page_idx).map_err(|e| RedactError::PdfProcessing {
            message: format!("Failed to load page {}", page_idx + 1),
            page: Some(page_idx as usize + 1),
            source: Some(Box::new(e)),
        })
    }

    fn page_count(&self, doc: &PdfDocument) -> RedactResult<i32> {
        doc.page_count().map_err(|e| RedactError::BackendError {
            backend: "MuPDF".to_string(),
            message: format!("Failed to get page count: {}", e),
            source: Some(Box::new(e)),
        })
    }

    fn page_height(&self, page: &Page, page_idx: i32) -> RedactResult<f32> {
        let bounds = page.bounds().map_err(|e| RedactError::BackendError {
            backend: "MuPDF".to_string(),
            message: format!("Failed to get bounds for page {}", page_idx + 1),
            source: Some(Box::new(e)),
        })?;
        Ok(bounds.y1 - bounds.y0)
    }
}

impl PdfEngine for MupdfEngine {
    fn apply(
        &self,
        pdf: &[u8],
        plan: &RedactionPlan,
        fill: FillColor,
    ) -> RedactResult<RedactionOutcome> {
        let staged = stage_bytes(pdf)?;
        let doc = self.open(&staged)?;
        let page_count = self.page_count(&doc)?;

        let mut outcome = RedactionOutcome {
            pages_processed: page_count as usize,
            ..Default::default()
        };

        for (page_idx, items) in plan.pages() {
            if page_idx >= page_count as usize {
                warn!(
                    page = page_idx + 1,
                    pages = page_count,
                    skipped = items.len(),
                    "redaction items reference a page past the end of the document"
                );
                outcome.items_skipped += items.len();
                continue;
            }

            let page = self.load_page(&doc, page_idx as i32)?;
            let height = self.page_height(&page, page_idx as i32)?;

            // Only proper PDF pages support redaction annotations.
            let mut pdf_page = match PdfPage::try_from(page.clone()) {
                Ok(p) => p,
                Err(_) => {
                    warn!(page = page_idx + 1, "skipping non-PDF page");
                    outcome.items_skipped += items.len();
                    continue;
                }
            };

            let mut page_redactions = 0;
            for item in items {
                let rect = item.bbox.to_pdf(height).normalized();
                let annot = pdf_page
                    .create_annotation(PdfAnnotationType::Redact)
                    .map_err(|e| RedactError::PdfProcessing {
                        message: "Failed to create redaction annotation".to_string(),
                        page: Some(page_idx + 1),
                        source: Some(Box::new(e)),
                    })?;

                unsafe {
                    ffi::set_annotation_rect(&annot, pdf_to_page_space(rect, height));
                    ffi::set_annotation_fill_color(&annot, fill);
                }

                page_redactions += 1;
            }

            if page_redactions > 0 {
                pdf_page.redact().map_err(|e| RedactError::PdfProcessing {
                    message: format!("Failed to apply redactions on page {}", page_idx + 1),
                    page: Some(page_idx + 1),
                    source: Some(Box::new(e)),
                })?;

                outcome.items_applied += page_redactions;
                outcome.pages_modified += 1;
            }
        }

        if outcome.has_redactions() {
            let out_file = NamedTempFile::new().map_err(|e| RedactError::Io {
                path: std::env::temp_dir(),
                source: e,
            })?;
            let out_path = path_str(out_file.path())?;

            doc.save(out_path).map_err(|e| RedactError::PdfProcessing {
                message: "Failed to save redacted PDF".to_string(),
                page: None,
                source: Some(Box::new(e)),
            })?;

            outcome.bytes = std::fs::read(out_file.path()).map_err(|e| RedactError::Io {
                path: out_file.path().to_path_buf(),
                source: e,
            })?;
        } else {
            // Nothing flattened; the document is byte-for-byte unchanged.
            outcome.bytes = pdf.to_vec();
        }

        debug!(
            pages = outcome.pages_processed,
            modified = outcome.pages_modified,
            applied = outcome.items_applied,
            skipped = outcome.items_skipped,
            "redaction pass complete"
        );

        Ok(outcome)
    }

    fn extract(&self, pdf: &[u8]) -> RedactResult<ExtractedDocument> {
        let staged = stage_bytes(pdf)?;
        let doc = self.open(&staged)?;
        let page_count = self.page_count(&doc)?;

        let mut extracted = ExtractedDocument {
            page_count: page_count as usize,
            pages: Vec::with_capacity(page_count as usize),
        };

        for page_idx in 0..page_count {
            let page = self.load_page(&doc, page_idx)?;
            let height = self.page_height(&page, page_idx)?;

            let text_page = page
                .to_text_page(TextPageOptions::empty())
                .map_err(|e| RedactError::TextExtraction {
                    reason: format!("structured text failed on page {}", page_idx + 1),
                    source: Some(Box::new(e)),
                })?;

            let mut spans = Vec::new();
            for block in text_page.blocks() {
                for line in block.lines() {
                    let text: String = line.chars().filter_map(|c| c.char()).collect();
                    if text.trim().is_empty() {
                        continue;
                    }
                    spans.push(RawSpan {
                        text,
                        rect: page_space_to_pdf(line.bounds(), height),
                    });
                }
            }

            extracted.pages.push(ExtractedPage {
                number: page_idx as u32 + 1,
                height,
                spans,
            });
        }

        Ok(extracted)
    }

    fn name(&self) -> &str {
        "MuPDF"
    }
}

/// Writes a byte buffer to a temp file so MuPDF's path-based API can open
/// it. The file is removed when the handle drops, on success or error.
fn stage_bytes(pdf: &[u8]) -> RedactResult<NamedTempFile> {
    let mut staged = NamedTempFile::new().map_err(|e| RedactError::Io {
        path: std::env::temp_dir(),
        source: e,
    })?;
    staged.write_all(pdf).map_err(|e| RedactError::Io {
        path: staged.path().to_path_buf(),
        source: e,
    })?;
    staged.flush().map_err(|e| RedactError::Io {
        path: staged.path().to_path_buf(),
        source: e,
    })?;
    Ok(staged)
}

fn path_str(path: &Path) -> RedactResult<&str> {
    path.to_str().ok_or_else(|| RedactError::InvalidInput {
        parameter: "path".to_string(),
        reason: "Path contains invalid UTF-8".to_string(),
    })
}

/// MuPDF reports geometry in page space: origin at the top-left, Y down.
/// The planner speaks PDF-native bottom-left rects, so the Y axis flips
/// against the page height at this boundary in both directions.
fn page_space_to_pdf(rect: MuRect, page_height: f32) -> PdfRect {
    PdfRect {
        x0: rect.x0,
        y0: page_height - rect.y1,
        x1: rect.x1,
        y1: page_height - rect.y0,
    }
}

fn pdf_to_page_space(rect: PdfRect, page_height: f32) -> MuRect {
    MuRect {
        x0: rect.x0,
        y0: page_height - rect.y1,
        x1: rect.x1,
        y1: page_height - rect.y0,
    }
}

/// FFI helpers for MuPDF annotation operations.
mod ffi {
    use mupdf::pdf::PdfAnnotation;
    use mupdf::Rect;

    use super::FillColor;

    #[repr(C)]
    struct PdfAnnotRaw {
        inner: *mut mupdf_sys::pdf_annot,
    }

    /// Sets the rectangle for a PDF annotation via FFI.
    ///
    /// # Safety
    /// This function uses unsafe FFI calls to access MuPDF's C API.
    /// The annotation must be valid and the context properly initialized.
    pub unsafe fn set_annotation_rect(annot: &PdfAnnotation, rect: Rect) {
        let annot_raw = std::mem::transmute::<&PdfAnnotation, &PdfAnnotRaw>(annot);
        let ctx = mupdf_sys::mupdf_new_base_context();

        if !ctx.is_null() {
            let fz_rect = mupdf_sys::fz_rect {
                x0: rect.x0,
                y0: rect.y0,
                x1: rect.x1,
                y1: rect.y1,
            };

            mupdf_sys::pdf_set_annot_rect(ctx, annot_raw.inner, fz_rect);
            mupdf_sys::mupdf_drop_base_context(ctx);
        }
    }

    /// Sets the interior (fill) color used when the annotation is
    /// flattened into the page.
    ///
    /// # Safety
    /// Same contract as [`set_annotation_rect`].
    pub unsafe fn set_annotation_fill_color(annot: &PdfAnnotation, fill: FillColor) {
        let annot_raw = std::mem::transmute::<&PdfAnnotation, &PdfAnnotRaw>(annot);
        let ctx = mupdf_sys::mupdf_new_base_context();

        if !ctx.is_null() {
            let color = [fill.r, fill.g, fill.b];
            mupdf_sys::pdf_set_annot_interior_color(ctx, annot_raw.inner, 3, color.as_ptr());
            mupdf_sys::mupdf_drop_base_context(ctx);
        }
    }
}
