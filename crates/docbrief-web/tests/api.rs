//! End-to-end router tests with mocked pipeline stages. Requests are
//! driven through `tower::ServiceExt::oneshot`, so no socket is bound
//! and no network is touched.

use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use docbrief_core::{ExtractError, Forward, PdfExtractor, Pipeline, Summarize};
use docbrief_web::state::AppState;

const TOKEN: &str = "test-secret";
const BOUNDARY: &str = "X-DOCBRIEF-TEST-BOUNDARY";

// ── Mock stages ─────────────────────────────────────────────────────────

struct FixedExtractor {
    text: &'static str,
    calls: AtomicUsize,
}

impl PdfExtractor for FixedExtractor {
    fn extract_text(&self, _data: &[u8]) -> Result<String, ExtractError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.text.to_string())
    }
}

struct FixedSummarizer {
    response: Result<&'static str, &'static str>,
}

impl Summarize for FixedSummarizer {
    fn summarize<'a>(
        &'a self,
        _text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, String>> + Send + 'a>> {
        let response = self.response;
        Box::pin(async move {
            match response {
                Ok(summary) => Ok(summary.to_string()),
                Err(msg) => Err(msg.to_string()),
            }
        })
    }
}

struct RecordingForwarder {
    response: Result<(), &'static str>,
    calls: Mutex<Vec<(String, String)>>,
}

impl RecordingForwarder {
    fn new(response: Result<(), &'static str>) -> Self {
        Self {
            response,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Forward for RecordingForwarder {
    fn forward<'a>(
        &'a self,
        filename: &'a str,
        summary: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), String>> + Send + 'a>> {
        self.calls
            .lock()
            .unwrap()
            .push((filename.to_string(), summary.to_string()));
        let response = self.response;
        Box::pin(async move { response.map_err(|msg| msg.to_string()) })
    }
}

// ── Harness ─────────────────────────────────────────────────────────────

struct TestApp {
    router: Router,
    extractor: Arc<FixedExtractor>,
    forwarder: Arc<RecordingForwarder>,
}

fn test_app(
    summarizer_response: Result<&'static str, &'static str>,
    forwarder_response: Result<(), &'static str>,
) -> TestApp {
    let extractor = Arc::new(FixedExtractor {
        text: "the extracted document text",
        calls: AtomicUsize::new(0),
    });
    let forwarder = Arc::new(RecordingForwarder::new(forwarder_response));

    let pipeline = Pipeline::new(
        extractor.clone(),
        Arc::new(FixedSummarizer {
            response: summarizer_response,
        }),
        forwarder.clone(),
    );

    let state = Arc::new(AppState {
        auth_token: TOKEN.to_string(),
        pipeline,
    });

    TestApp {
        router: docbrief_web::router(state),
        extractor,
        forwarder,
    }
}

fn multipart_body(filename: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
             Content-Type: application/pdf\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(token: Option<&str>, filename: &str, data: &[u8]) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder
        .body(Body::from(multipart_body(filename, data)))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ── Tests ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn health_check_reports_running() {
    let app = test_app(Ok("summary"), Ok(()));
    let response = app
        .router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "PDF summarization service is running");
}

#[tokio::test]
async fn missing_token_is_rejected_before_any_stage() {
    let app = test_app(Ok("summary"), Ok(()));
    let response = app
        .router
        .oneshot(upload_request(None, "paper.pdf", b"%PDF-1.4"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(app.extractor.calls.load(Ordering::SeqCst), 0);
    assert!(app.forwarder.calls().is_empty());
}

#[tokio::test]
async fn wrong_token_is_rejected_before_any_stage() {
    let app = test_app(Ok("summary"), Ok(()));
    let response = app
        .router
        .oneshot(upload_request(Some("not-the-secret"), "paper.pdf", b"%PDF-1.4"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["detail"], "Invalid authentication token");
    assert_eq!(app.extractor.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn non_pdf_filename_is_rejected_without_extraction() {
    let app = test_app(Ok("summary"), Ok(()));
    let response = app
        .router
        .oneshot(upload_request(Some(TOKEN), "notes.txt", b"%PDF-1.4"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["detail"], "Only PDF files are supported");
    assert_eq!(app.extractor.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn empty_file_is_rejected_regardless_of_filename() {
    let app = test_app(Ok("summary"), Ok(()));
    let response = app
        .router
        .oneshot(upload_request(Some(TOKEN), "paper.pdf", b""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["detail"], "Empty file uploaded");
}

#[tokio::test]
async fn valid_upload_forwards_summary_exactly_once() {
    let app = test_app(Ok("a concise summary"), Ok(()));
    let response = app
        .router
        .oneshot(upload_request(Some(TOKEN), "paper.pdf", b"%PDF-1.4"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["filename"], "paper.pdf");

    assert_eq!(
        app.forwarder.calls(),
        vec![("paper.pdf".to_string(), "a concise summary".to_string())]
    );
}

#[tokio::test]
async fn summarization_failure_returns_500_without_forwarding() {
    let app = test_app(Err("API Error"), Ok(()));
    let response = app
        .router
        .oneshot(upload_request(Some(TOKEN), "paper.pdf", b"%PDF-1.4"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    let detail = json["detail"].as_str().unwrap();
    assert!(detail.contains("failed to summarize"), "detail: {detail}");
    assert!(app.forwarder.calls().is_empty());
}

#[tokio::test]
async fn forwarding_failure_returns_500_after_summarization() {
    let app = test_app(Ok("a concise summary"), Err("downstream endpoint returned HTTP 500"));
    let response = app
        .router
        .oneshot(upload_request(Some(TOKEN), "paper.pdf", b"%PDF-1.4"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    let detail = json["detail"].as_str().unwrap();
    assert!(detail.contains("failed to forward"), "detail: {detail}");
    assert_eq!(app.forwarder.calls().len(), 1);
}

#[tokio::test]
async fn upload_without_file_field_is_rejected() {
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"other\"\r\n\r\n\
         value\r\n\
         --{BOUNDARY}--\r\n"
    );
    let request = Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header("authorization", format!("Bearer {TOKEN}"))
        .body(Body::from(body))
        .unwrap();

    let app = test_app(Ok("summary"), Ok(()));
    let response = app.router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["detail"], "No file uploaded");
}
