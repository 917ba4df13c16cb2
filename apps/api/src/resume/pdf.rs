//! PDF text extraction.
//!
//! `pdf-extract` gives the best full-document text; `lopdf` gives the page
//! count and per-page text for the first few pages, which is all the field
//! extractor needs.

use tracing::warn;

use crate::errors::AppError;

/// Pages fed to the field extractor.
pub const HEAD_PAGES: usize = 3;

#[derive(Debug, Clone)]
pub struct PdfText {
    pub full_text: String,
    /// Text of the first `HEAD_PAGES` pages.
    pub head_text: String,
    pub page_count: u32,
}

/// Accepts an upload if it carries the PDF magic bytes or a `.pdf` name.
pub fn looks_like_pdf(file_name: Option<&str>, bytes: &[u8]) -> bool {
    bytes.starts_with(b"%PDF")
        || file_name
            .map(|n| n.to_lowercase().ends_with(".pdf"))
            .unwrap_or(false)
}

/// Reads a PDF from memory. CPU-bound: call from `spawn_blocking`.
pub fn read_pdf(bytes: &[u8]) -> Result<PdfText, AppError> {
    let doc = lopdf::Document::load_mem(bytes).map_err(|e| AppError::Pdf(e.to_string()))?;

    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    let page_count = page_numbers.len() as u32;
    if page_count == 0 {
        return Err(AppError::Pdf("document has no pages".to_string()));
    }

    let head_pages = &page_numbers[..page_numbers.len().min(HEAD_PAGES)];
    let head_text = pages_text(&doc, head_pages);

    let full_text = match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            warn!("pdf-extract returned no text, falling back to per-page extraction");
            pages_text(&doc, &page_numbers)
        }
        Err(e) => {
            warn!("pdf-extract failed ({e}), falling back to per-page extraction");
            pages_text(&doc, &page_numbers)
        }
    };

    Ok(PdfText {
        full_text,
        head_text,
        page_count,
    })
}

/// Concatenates page text, skipping pages lopdf cannot decode.
fn pages_text(doc: &lopdf::Document, pages: &[u32]) -> String {
    let mut text = String::new();
    for &page in pages {
        match doc.extract_text(&[page]) {
            Ok(t) => {
                text.push_str(&t);
                text.push('\n');
            }
            Err(e) => warn!("Could not extract text from page {page}: {e}"),
        }
    }
    text
}
