//! Test fixtures and PDF builders.
//!
//! Provides builders for creating test PDFs with text placed at known
//! positions, following the Builder pattern for clean test setup.

use anyhow::Result;
use printpdf::*;
use std::io::BufWriter;

/// One text run placed at explicit page coordinates (millimetres from the
/// bottom-left corner, printpdf's convention).
#[derive(Debug, Clone)]
struct PlacedText {
    text: String,
    x: Mm,
    y: Mm,
    size: f32,
}

/// Builder for creating test PDFs with positioned content.
///
/// # Example
///
/// ```no_run
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// let pdf = TestPdfBuilder::new()
///     .with_text_at("SECRET: 12345", 20.0, 250.0)
///     .with_text_at("public footer", 20.0, 30.0)
///     .build_bytes()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TestPdfBuilder {
    title: String,
    pages: Vec<Vec<PlacedText>>,
    page_width: Mm,
    page_height: Mm,
}

impl TestPdfBuilder {
    /// Creates a new builder with a single empty A4 page.
    pub fn new() -> Self {
        Self {
            title: "Test Document".to_string(),
            pages: vec![Vec::new()],
            page_width: Mm(210.0),  // A4 width
            page_height: Mm(297.0), // A4 height
        }
    }

    /// Sets the document title.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Places text on the current page at the given position (mm from the
    /// bottom-left corner).
    pub fn with_text_at(mut self, text: &str, x_mm: f32, y_mm: f32) -> Self {
        self.pages
            .last_mut()
            .expect("builder always has a page")
            .push(PlacedText {
                text: text.to_string(),
                x: Mm(x_mm),
                y: Mm(y_mm),
                size: 12.0,
            });
        self
    }

    /// Starts a new page; subsequent `with_text_at` calls land on it.
    pub fn with_page(mut self) -> Self {
        self.pages.push(Vec::new());
        self
    }

    /// Builds the PDF and returns its bytes.
    pub fn build_bytes(self) -> Result<Vec<u8>> {
        let (doc, page1, layer1) =
            PdfDocument::new(&self.title, self.page_width, self.page_height, "Layer 1");
        let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;

        let mut layers = vec![doc.get_page(page1).get_layer(layer1)];
        for _ in 1..self.pages.len() {
            let (page, layer) = doc.add_page(self.page_width, self.page_height, "Layer 1");
            layers.push(doc.get_page(page).get_layer(layer));
        }

        for (layer, texts) in layers.iter().zip(&self.pages) {
            for placed in texts {
                layer.use_text(&placed.text, placed.size, placed.x, placed.y, &font);
            }
        }

        let mut bytes = Vec::new();
        doc.save(&mut BufWriter::new(&mut bytes))?;
        Ok(bytes)
    }
}

impl Default for TestPdfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Quick helper: a one-page PDF with one secret line and one public line.
pub fn create_secret_document() -> Result<Vec<u8>> {
    TestPdfBuilder::new()
        .with_title("Account Statement")
        .with_text_at("SECRET: 12345", 20.0, 250.0)
        .with_text_at("This line is public.", 20.0, 200.0)
        .build_bytes()
}

/// Quick helper: a three-page PDF with one marker line per page.
pub fn create_three_page_document() -> Result<Vec<u8>> {
    TestPdfBuilder::new()
        .with_title("Multi Page")
        .with_text_at("PAGE-ONE-MARKER", 20.0, 250.0)
        .with_page()
        .with_text_at("PAGE-TWO-MARKER", 20.0, 250.0)
        .with_page()
        .with_text_at("PAGE-THREE-MARKER", 20.0, 250.0)
        .build_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_produces_pdf_bytes() {
        let bytes = TestPdfBuilder::new()
            .with_text_at("hello", 20.0, 100.0)
            .build_bytes()
            .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_builder_page_tracking() {
        let builder = TestPdfBuilder::new()
            .with_text_at("a", 1.0, 1.0)
            .with_page()
            .with_text_at("b", 1.0, 1.0);
        assert_eq!(builder.pages.len(), 2);
    }
}
