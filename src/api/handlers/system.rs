use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::AppState;

/// GET /health — liveness plus whether an analysis has run yet.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let has_analysis = state.latest.read().await.is_some();
    Json(json!({ "status": "healthy", "has_analysis": has_analysis }))
}

/// GET /metrics — Prometheus scrape payload.
pub async fn render_metrics(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics_handle.render(),
    )
}
