use axum::extract::State;
use axum::Json;

use crate::api::ws_types::WsMessage;
use crate::errors::AppError;
use crate::models::AnalysisReport;
use crate::services::AnalysisRequest;
use crate::AppState;

use super::ApiResponse;

/// POST /api/analyze — fetch, score and aggregate headlines for a company.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<ApiResponse<AnalysisReport>>, AppError> {
    if request.company.trim().is_empty() {
        return Err(AppError::BadRequest("company must not be empty".into()));
    }

    let report = state.analysis.run(&request).await;

    // No subscribers is not an error.
    let _ = state.ws_tx.send(WsMessage::AnalysisComplete(report.summary()));
    *state.latest.write().await = Some(report.clone());

    Ok(Json(ApiResponse::ok(report)))
}

/// GET /api/analysis/latest — most recent report produced by this process.
pub async fn latest(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<AnalysisReport>>, AppError> {
    let report = state
        .latest
        .read()
        .await
        .clone()
        .ok_or_else(|| AppError::NotFound("no analysis has been run yet".into()))?;

    Ok(Json(ApiResponse::ok(report)))
}
