use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use serde::Serialize;

/// Hard deadline for the downstream delivery call.
pub const FORWARD_TIMEOUT: Duration = Duration::from_secs(30);

/// Body posted to the downstream endpoint. Two fields only; filename is
/// the sole correlation key the downstream receives.
#[derive(Debug, Serialize)]
pub struct ForwardPayload<'a> {
    pub filename: &'a str,
    pub summary: &'a str,
}

/// A delivery backend for finished summaries. Exactly one outbound call
/// per invocation; no retry on any failure category.
pub trait Forward: Send + Sync {
    fn forward<'a>(
        &'a self,
        filename: &'a str,
        summary: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), String>> + Send + 'a>>;
}

/// Forwarder that POSTs `{filename, summary}` as JSON with static bearer
/// auth to a single configured endpoint.
pub struct HttpForwarder {
    client: reqwest::Client,
    url: String,
    token: String,
}

impl HttpForwarder {
    pub fn new(
        client: reqwest::Client,
        url: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            url: url.into(),
            token: token.into(),
        }
    }
}

impl Forward for HttpForwarder {
    fn forward<'a>(
        &'a self,
        filename: &'a str,
        summary: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), String>> + Send + 'a>> {
        Box::pin(async move {
            let payload = ForwardPayload { filename, summary };

            tracing::debug!(filename, "forwarding summary downstream");

            let result = self
                .client
                .post(&self.url)
                .bearer_auth(&self.token)
                .json(&payload)
                .timeout(FORWARD_TIMEOUT)
                .send()
                .await;

            let resp = match result {
                Ok(resp) => resp,
                Err(e) if e.is_timeout() => {
                    return Err("timeout while forwarding summary".to_string());
                }
                Err(e) => return Err(e.to_string()),
            };

            // The downstream contract acknowledges with exactly 200. Other
            // 2xx codes are not acknowledgements and fail the request.
            let status = resp.status();
            if status.as_u16() != 200 {
                let body = resp.text().await.unwrap_or_default();
                return Err(format!(
                    "downstream endpoint returned HTTP {}: {}",
                    status.as_u16(),
                    body
                ));
            }

            Ok(())
        })
    }
}
