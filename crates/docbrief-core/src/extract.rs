use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to open PDF: {0}")]
    Open(String),
    #[error("failed to extract text: {0}")]
    Extraction(String),
    #[error("no text found in PDF")]
    NoText,
}

/// Trait for PDF text extraction backends.
///
/// Implementors return the concatenated visible text of every page, in
/// page order, with no per-page boundary markers — downstream
/// summarization treats the document as one flat blob. Extraction is
/// synchronous; it runs inside the request task without suspending.
pub trait PdfExtractor: Send + Sync {
    /// Extract the full text content of a PDF held in memory.
    fn extract_text(&self, data: &[u8]) -> Result<String, ExtractError>;
}

/// Run `extractor` over `data` and normalize the result: surrounding
/// whitespace is trimmed, and a document that yields only whitespace
/// (image-only or blank pages) is an extraction failure, never an
/// empty-summary case.
pub fn extract_trimmed(extractor: &dyn PdfExtractor, data: &[u8]) -> Result<String, ExtractError> {
    let text = extractor.extract_text(data)?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ExtractError::NoText);
    }
    Ok(trimmed.to_string())
}
