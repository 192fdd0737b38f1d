//! Router construction and the serve loop.

use crate::api::handlers;
use crate::core::reading::ReadingOrchestrator;
use crate::domain::model::STATIC_ROUTE;
use crate::domain::ports::ImageStore;
use crate::utils::error::{Result, TarotError};
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared state handed to every handler.
pub struct AppState<S: ImageStore> {
    pub orchestrator: Arc<ReadingOrchestrator<S>>,
    pub static_dir: String,
}

impl<S: ImageStore> AppState<S> {
    pub fn new(orchestrator: ReadingOrchestrator<S>, static_dir: impl Into<String>) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            static_dir: static_dir.into(),
        }
    }
}

// 手動實作，避免 derive 要求 S: Clone
impl<S: ImageStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            orchestrator: Arc::clone(&self.orchestrator),
            static_dir: self.static_dir.clone(),
        }
    }
}

pub fn build_router<S: ImageStore + 'static>(state: AppState<S>) -> Router {
    let assets = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(handlers::index::<S>))
        .route("/draw_cards", get(handlers::draw_cards::<S>))
        .route("/health", get(handlers::health))
        .nest_service(STATIC_ROUTE, assets)
        .with_state(state)
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Binds `host:port` and serves until Ctrl-C.
pub async fn run<S: ImageStore + 'static>(
    host: &str,
    port: u16,
    state: AppState<S>,
) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| TarotError::InvalidConfigValueError {
            field: "host".to_string(),
            value: host.to_string(),
            reason: format!("Invalid bind address: {}", e),
        })?;

    let app = build_router(state);

    info!("Starting HTTP server on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| TarotError::ServerError {
            message: format!("Failed to bind to {}: {}", addr, e),
        })?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| TarotError::ServerError {
            message: format!("Server error: {}", e),
        })?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
