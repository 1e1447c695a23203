use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::auth::require_auth;
use super::handlers;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    // Public routes — no authentication required
    let public = Router::new()
        .route("/health", get(handlers::system::health_check))
        .route("/metrics", get(handlers::system::render_metrics));

    // Protected API routes — require Bearer token when API_TOKEN is set
    let protected = Router::new()
        .route("/api/analyze", post(handlers::analysis::analyze))
        .route("/api/analysis/latest", get(handlers::analysis::latest))
        .route("/api/sentiment/score", post(handlers::sentiment::score))
        .route("/api/sentiment/classify", get(handlers::sentiment::classify_score))
        .route("/ws", get(handlers::ws::handler))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    public
        .merge(protected)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
