pub mod api;
pub mod config;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod providers;
pub mod sentiment;
pub mod services;

use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use crate::api::ws_types::WsMessage;
use crate::config::AppConfig;
use crate::models::AnalysisReport;
use crate::services::AnalysisService;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub analysis: AnalysisService,
    /// Last report produced by this process; not persisted.
    pub latest: Arc<RwLock<Option<AnalysisReport>>>,
    pub ws_tx: broadcast::Sender<WsMessage>,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        analysis: AnalysisService,
        metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
    ) -> Self {
        let (ws_tx, _) = broadcast::channel::<WsMessage>(256);
        Self {
            config,
            analysis,
            latest: Arc::new(RwLock::new(None)),
            ws_tx,
            metrics_handle,
        }
    }
}
