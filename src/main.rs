use std::sync::Arc;

use headline_sentiment::api::router::create_router;
use headline_sentiment::config::AppConfig;
use headline_sentiment::metrics::init_metrics;
use headline_sentiment::providers::{AlphaVantageClient, NewsApiClient};
use headline_sentiment::sentiment::LexiconScorer;
use headline_sentiment::services::{AnalysisService, AnalysisSettings};
use headline_sentiment::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = format!("{}:{}", config.host, config.port);
    let metrics_handle = init_metrics()?;

    let http = reqwest::Client::builder()
        .timeout(config.http_timeout())
        .build()?;

    let news = NewsApiClient::new(http.clone(), config.news_api_key.clone())
        .with_base_url(config.news_api_url.clone());
    let prices = AlphaVantageClient::new(http, config.alpha_vantage_api_key.clone())
        .with_base_url(config.alpha_vantage_url.clone());

    let analysis = AnalysisService::new(
        Arc::new(news),
        Arc::new(prices),
        Arc::new(LexiconScorer::new()),
        AnalysisSettings {
            default_symbol: config.default_symbol.clone(),
            histogram_bins: config.histogram_bins,
            top_words: config.top_words,
        },
    );

    if !config.auth_enabled() {
        tracing::warn!("API_TOKEN not set — API authentication disabled");
    }
    tracing::info!(
        default_symbol = %config.default_symbol,
        histogram_bins = config.histogram_bins,
        "Sentiment service configured"
    );

    let state = AppState::new(config, analysis, metrics_handle);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());

    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
