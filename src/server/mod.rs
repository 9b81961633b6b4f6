//! HTTP boundary for the sentiment scorer.
//!
//! A two-route axum service: a health message at `/` and scoring at
//! `POST /analyze`. All origins are allowed, matching the blanket
//! cross-origin policy of the frontend this service was built for.

pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::analyzer::SentimentIntensityAnalyzer;
use crate::config::ServerConfig;

/// Shared, read-only analyzer handed to every request handler.
pub type AppState = Arc<SentimentIntensityAnalyzer>;

/// Build the application router.
pub fn router(analyzer: SentimentIntensityAnalyzer) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/analyze", post(handlers::analyze))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(analyzer))
}

/// Bind the configured address and serve until interrupted.
pub async fn serve(
    config: &ServerConfig,
    analyzer: SentimentIntensityAnalyzer,
) -> anyhow::Result<()> {
    let app = router(analyzer);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "sentiment analysis api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutdown signal received");
    }
}
