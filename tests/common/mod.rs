use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_decimal::Decimal;

use headline_sentiment::api::router::create_router;
use headline_sentiment::config::AppConfig;
use headline_sentiment::models::Quote;
use headline_sentiment::providers::{NewsProvider, PriceProvider, ProviderError};
use headline_sentiment::sentiment::LexiconScorer;
use headline_sentiment::services::{AnalysisService, AnalysisSettings};
use headline_sentiment::AppState;

/// News provider returning a canned headline list.
#[allow(dead_code)]
pub struct StubNews {
    pub headlines: Vec<String>,
    pub fail: bool,
}

#[async_trait]
impl NewsProvider for StubNews {
    async fn fetch_headlines(&self, _company: &str) -> Result<Vec<String>, ProviderError> {
        if self.fail {
            return Err(ProviderError::Unavailable("stub news down".into()));
        }
        Ok(self.headlines.clone())
    }
}

/// Price provider returning a fixed price and recording requested symbols.
#[derive(Default)]
pub struct StubPrices {
    pub requested: Mutex<Vec<String>>,
}

#[async_trait]
impl PriceProvider for StubPrices {
    async fn latest_price(&self, symbol: &str) -> Result<Quote, ProviderError> {
        self.requested.lock().unwrap().push(symbol.to_string());
        Ok(Quote {
            symbol: symbol.to_string(),
            price: Decimal::new(17750, 2),
            as_of: "2024-05-01 16:00:00".into(),
        })
    }
}

#[allow(dead_code)]
pub fn sample_headlines() -> Vec<String> {
    vec![
        "Company beats earnings expectations".into(),
        "Company faces major lawsuit".into(),
        "Company holds steady quarter".into(),
    ]
}

pub fn test_config(api_token: Option<&str>) -> AppConfig {
    AppConfig {
        host: "127.0.0.1".into(),
        port: 0,
        news_api_key: "test-news-key".into(),
        news_api_url: "http://127.0.0.1:1".into(),
        alpha_vantage_api_key: "test-av-key".into(),
        alpha_vantage_url: "http://127.0.0.1:1".into(),
        http_timeout_secs: 1,
        default_symbol: "TSLA".into(),
        histogram_bins: 10,
        top_words: 20,
        api_token: api_token.map(Into::into),
    }
}

/// Build the router around stub providers. The Prometheus recorder is built
/// but not installed globally, so tests can create as many apps as they like.
#[allow(dead_code)]
pub fn build_test_app(
    news: StubNews,
    prices: Arc<StubPrices>,
    api_token: Option<&str>,
) -> (axum::Router, AppState) {
    let config = test_config(api_token);
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .build_recorder()
        .handle();

    let analysis = AnalysisService::new(
        Arc::new(news),
        prices,
        Arc::new(LexiconScorer::new()),
        AnalysisSettings {
            default_symbol: config.default_symbol.clone(),
            histogram_bins: config.histogram_bins,
            top_words: config.top_words,
        },
    );

    let state = AppState::new(config, analysis, metrics_handle);
    (create_router(state.clone()), state)
}
