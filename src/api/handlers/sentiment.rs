use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::sentiment::{classify, SentimentLabel};
use crate::AppState;

use super::ApiResponse;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct ScoreRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    pub text: String,
    pub score: f64,
    pub label: SentimentLabel,
}

#[derive(Deserialize)]
pub struct ClassifyQuery {
    pub score: f64,
}

#[derive(Serialize)]
pub struct ClassifyResponse {
    pub score: f64,
    pub label: SentimentLabel,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/sentiment/score — score arbitrary text with the active scorer.
pub async fn score(
    State(state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> Json<ApiResponse<ScoreResponse>> {
    let score = state.analysis.scorer().score(&req.text);

    Json(ApiResponse::ok(ScoreResponse {
        text: req.text,
        score,
        label: classify(score),
    }))
}

/// GET /api/sentiment/classify?score=x
pub async fn classify_score(
    Query(query): Query<ClassifyQuery>,
) -> Result<Json<ApiResponse<ClassifyResponse>>, AppError> {
    if !query.score.is_finite() {
        return Err(AppError::BadRequest("score must be a finite number".into()));
    }

    Ok(Json(ApiResponse::ok(ClassifyResponse {
        score: query.score,
        label: classify(query.score),
    })))
}
