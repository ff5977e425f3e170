use std::net::SocketAddr;
use std::sync::Arc;

use docbrief_core::{Config, HttpForwarder, OpenAiSummarizer, Pipeline};
use docbrief_pdf_mupdf::MupdfExtractor;
use docbrief_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let client = reqwest::Client::new();
    let mut summarizer = OpenAiSummarizer::new(client.clone(), &config.openai_api_key);
    if let Some(ref base_url) = config.openai_base_url {
        summarizer = summarizer.with_base_url(base_url);
    }
    let forwarder = HttpForwarder::new(
        client,
        &config.external_api_url,
        &config.external_api_token,
    );

    let pipeline = Pipeline::new(
        Arc::new(MupdfExtractor::new()),
        Arc::new(summarizer),
        Arc::new(forwarder),
    );

    let state = Arc::new(AppState {
        auth_token: config.auth_token,
        pipeline,
    });

    let app = docbrief_web::router(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let addr: SocketAddr = format!("{host}:{port}").parse()?;

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
