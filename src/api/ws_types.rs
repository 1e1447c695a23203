use serde::Serialize;

use crate::models::AnalysisSummary;

/// Messages broadcast to all connected WebSocket clients.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum WsMessage {
    #[serde(rename = "analysis_complete")]
    AnalysisComplete(AnalysisSummary),
}
