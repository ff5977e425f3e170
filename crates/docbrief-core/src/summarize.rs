use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

/// Completion endpoint used when no override is configured.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

const MODEL: &str = "gpt-4";
const MAX_TOKENS: u32 = 1000;
const TEMPERATURE: f32 = 0.3;
const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that summarizes documents concisely and accurately.";

/// A summarization backend: extracted document text in, natural-language
/// summary out. Errors are opaque strings carrying the underlying cause;
/// the pipeline maps them onto its own taxonomy.
pub trait Summarize: Send + Sync {
    fn summarize<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, String>> + Send + 'a>>;
}

// ── Chat-completion wire types ──────────────────────────────────────────

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Summarizer backed by an OpenAI-compatible chat-completions endpoint.
///
/// Sends the full extracted text in a single request — no truncation or
/// chunking — with a fixed instruction pair and low-randomness sampling.
/// Only the first completion choice is consumed.
pub struct OpenAiSummarizer {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiSummarizer {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different completion service base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Summarize for OpenAiSummarizer {
    fn summarize<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, String>> + Send + 'a>> {
        Box::pin(async move {
            let request = ChatRequest {
                model: MODEL,
                messages: vec![
                    ChatMessage {
                        role: "system",
                        content: SYSTEM_PROMPT.to_string(),
                    },
                    ChatMessage {
                        role: "user",
                        content: format!("Summarize the following document in English: {text}"),
                    },
                ],
                max_tokens: MAX_TOKENS,
                temperature: TEMPERATURE,
            };

            tracing::debug!(chars = text.len(), model = MODEL, "requesting summary");

            // No per-request timeout here: the client default applies, so a
            // hung completion call hangs this request until the peer gives up.
            let resp = self
                .client
                .post(format!(
                    "{}/chat/completions",
                    self.base_url.trim_end_matches('/')
                ))
                .bearer_auth(&self.api_key)
                .json(&request)
                .send()
                .await
                .map_err(|e| e.to_string())?;

            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(format!("HTTP {}: {}", status.as_u16(), body));
            }

            let data: ChatResponse = resp.json().await.map_err(|e| e.to_string())?;
            let content = data
                .choices
                .into_iter()
                .next()
                .and_then(|c| c.message.content)
                .ok_or_else(|| "completion response contained no choices".to_string())?;

            Ok(content.trim().to_string())
        })
    }
}
