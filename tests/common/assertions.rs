//! Custom assertions for PDF redaction testing.
//!
//! Domain-specific assertions over in-memory PDF buffers that make tests
//! more readable and give better failure messages. Text checks go through
//! `pdf-extract`, an independent extractor from the engine under test.

/// Asserts that a pattern has been successfully redacted from a PDF.
///
/// # Panics
/// Panics if the pattern is still extractable from the PDF bytes.
pub fn assert_redacted(pdf: &[u8], pattern: &str) {
    let text = extract_text_or_panic(pdf);
    assert!(
        !text.contains(pattern),
        "Pattern '{}' should be redacted but was found in output PDF.\nExtracted text length: {} chars",
        pattern,
        text.len()
    );
}

/// Asserts that a pattern has been preserved (not redacted) in a PDF.
///
/// # Panics
/// Panics if the pattern is not found in the PDF.
pub fn assert_preserved(pdf: &[u8], pattern: &str) {
    let text = extract_text_or_panic(pdf);
    assert!(
        text.contains(pattern),
        "Pattern '{}' should be preserved but was not found in PDF",
        pattern
    );
}

/// Asserts that a buffer is a structurally valid PDF with the expected
/// page count.
///
/// # Panics
/// Panics if the buffer fails to load or the page count differs.
pub fn assert_valid_pdf(pdf: &[u8], expected_pages: usize) {
    assert!(!pdf.is_empty(), "PDF buffer should not be empty");
    let doc = ::lopdf::Document::load_mem(pdf)
        .unwrap_or_else(|e| panic!("output should be a loadable PDF: {}", e));
    assert_eq!(
        doc.get_pages().len(),
        expected_pages,
        "unexpected page count"
    );
}

fn extract_text_or_panic(pdf: &[u8]) -> String {
    pdf_extract::extract_text_from_mem(pdf)
        .unwrap_or_else(|e| panic!("Failed to extract text from PDF: {}", e))
}
