//! Request handlers. Business decisions live in the orchestrator; these only
//! translate its outcome to HTTP.

use crate::api::server::AppState;
use crate::domain::ports::ImageStore;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::path::Path;

/// Served when `<static_dir>/index.html` is absent.
pub const BUILTIN_LANDING_PAGE: &str = include_str!("../../static/index.html");

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// GET /
pub async fn index<S: ImageStore + 'static>(State(state): State<AppState<S>>) -> Html<String> {
    let path = Path::new(&state.static_dir).join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Html(page),
        Err(e) => {
            tracing::debug!("Using built-in landing page ({}): {}", path.display(), e);
            Html(BUILTIN_LANDING_PAGE.to_string())
        }
    }
}

/// GET /draw_cards
pub async fn draw_cards<S: ImageStore + 'static>(State(state): State<AppState<S>>) -> Response {
    let outcome = state.orchestrator.respond().await;
    (outcome.status, Json(outcome.body)).into_response()
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
