use std::sync::Arc;

use thiserror::Error;

use crate::extract::{self, PdfExtractor};
use crate::forward::Forward;
use crate::summarize::Summarize;

/// Everything that can terminate a request, one variant per stage. The
/// web layer owns the mapping onto HTTP statuses; no stage catches or
/// downgrades another stage's error.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{0}")]
    Validation(String),
    #[error("failed to extract text from PDF: {0}")]
    Extraction(String),
    #[error("failed to summarize text: {0}")]
    Summarization(String),
    #[error("failed to forward summary: {0}")]
    Forwarding(String),
    #[error("internal server error: {0}")]
    Unexpected(String),
}

/// Gate an upload before any extraction work: the filename must carry a
/// case-insensitive `.pdf` extension and the body must be non-empty.
pub fn validate_upload(filename: &str, data: &[u8]) -> Result<(), PipelineError> {
    if !filename.to_lowercase().ends_with(".pdf") {
        return Err(PipelineError::Validation(
            "Only PDF files are supported".to_string(),
        ));
    }
    if data.is_empty() {
        return Err(PipelineError::Validation("Empty file uploaded".to_string()));
    }
    Ok(())
}

/// The extract → summarize → forward pipeline.
///
/// Collaborators are injected at construction so each stage can be
/// substituted in tests. The pipeline itself holds no mutable state;
/// concurrent requests share it behind an `Arc` without coordination.
pub struct Pipeline {
    extractor: Arc<dyn PdfExtractor>,
    summarizer: Arc<dyn Summarize>,
    forwarder: Arc<dyn Forward>,
}

impl Pipeline {
    pub fn new(
        extractor: Arc<dyn PdfExtractor>,
        summarizer: Arc<dyn Summarize>,
        forwarder: Arc<dyn Forward>,
    ) -> Self {
        Self {
            extractor,
            summarizer,
            forwarder,
        }
    }

    /// Run one document through all three stages.
    ///
    /// Strictly sequential with short-circuit failure: a stage runs only
    /// if every earlier stage succeeded, the first failure terminates the
    /// request, and nothing is retried or compensated. Extraction runs
    /// synchronously inside the task; summarize and forward suspend at
    /// the network call.
    pub async fn run(&self, filename: &str, data: &[u8]) -> Result<(), PipelineError> {
        validate_upload(filename, data)?;

        tracing::info!(filename, bytes = data.len(), "processing PDF");

        let text = extract::extract_trimmed(self.extractor.as_ref(), data).map_err(|e| {
            tracing::error!(filename, error = %e, "extraction failed");
            PipelineError::Extraction(e.to_string())
        })?;

        let summary = self.summarizer.summarize(&text).await.map_err(|e| {
            tracing::error!(filename, error = %e, "summarization failed");
            PipelineError::Summarization(e)
        })?;

        self.forwarder
            .forward(filename, &summary)
            .await
            .map_err(|e| {
                tracing::error!(filename, error = %e, "forwarding failed");
                PipelineError::Forwarding(e)
            })?;

        tracing::info!(filename, "summary forwarded");
        Ok(())
    }
}
