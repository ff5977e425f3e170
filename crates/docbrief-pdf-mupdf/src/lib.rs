use mupdf::{Document, TextPageFlags};

use docbrief_core::{ExtractError, PdfExtractor};

/// MuPDF-based implementation of [`PdfExtractor`].
///
/// This crate is the sole AGPL island — it isolates the mupdf dependency
/// (which is AGPL-3.0) so that the core and web crates do not
/// transitively depend on it.
///
/// The document is opened directly from the uploaded bytes; no temp file
/// is written. Page texts are concatenated in document order with no
/// per-page markers, since downstream summarization treats the document
/// as one flat blob. The document handle is dropped on every exit path.
#[derive(Default)]
pub struct MupdfExtractor;

impl MupdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl PdfExtractor for MupdfExtractor {
    fn extract_text(&self, data: &[u8]) -> Result<String, ExtractError> {
        let document =
            Document::from_bytes(data, "pdf").map_err(|e| ExtractError::Open(e.to_string()))?;

        let mut pages_text = Vec::new();

        for page_result in document
            .pages()
            .map_err(|e| ExtractError::Extraction(e.to_string()))?
        {
            let page = page_result.map_err(|e| ExtractError::Extraction(e.to_string()))?;
            let text_page = page
                .to_text_page(TextPageFlags::empty())
                .map_err(|e| ExtractError::Extraction(e.to_string()))?;

            let mut page_text = String::new();
            for block in text_page.blocks() {
                for line in block.lines() {
                    let line_text: String = line
                        .chars()
                        .map(|c| c.char().unwrap_or('\u{FFFD}'))
                        .collect();
                    page_text.push_str(&line_text);
                    page_text.push('\n');
                }
            }
            pages_text.push(page_text);
        }

        Ok(pages_text.join("\n"))
    }
}
