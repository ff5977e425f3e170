//! Core pipeline for the docbrief summarization relay.
//!
//! One document in, one summary out: PDF text extraction, a single
//! language-model completion call, and delivery of the result to a
//! downstream endpoint. Each stage is a trait seam so the web layer and
//! the tests can substitute collaborators independently.

pub mod config;
pub mod extract;
pub mod forward;
pub mod pipeline;
pub mod summarize;

// Re-export for convenience
pub use config::{Config, ConfigError};
pub use extract::{ExtractError, PdfExtractor};
pub use forward::{Forward, HttpForwarder};
pub use pipeline::{Pipeline, PipelineError, validate_upload};
pub use summarize::{OpenAiSummarizer, Summarize};
