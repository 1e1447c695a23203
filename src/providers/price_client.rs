use std::str::FromStr;

use async_trait::async_trait;
use reqwest::{Client, Url};
use rust_decimal::Decimal;
use thiserror::Error;

use super::types::IntradayResponse;
use super::{PriceProvider, ProviderError};
use crate::models::Quote;

const ALPHA_VANTAGE_BASE: &str = "https://www.alphavantage.co";
const INTRADAY_INTERVAL: &str = "5min";

#[derive(Debug, Error)]
pub enum PriceClientError {
    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("Alpha Vantage error: {0}")]
    Api(String),

    #[error("no intraday data for {0}")]
    NoData(String),

    #[error("unparseable close price {value:?} for {symbol}")]
    InvalidPrice { symbol: String, value: String },
}

impl From<reqwest::Error> for PriceClientError {
    fn from(e: reqwest::Error) -> Self {
        // The key is a query parameter; never let it reach error text.
        Self::Http(e.without_url())
    }
}

/// Alpha Vantage intraday time-series client.
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl AlphaVantageClient {
    pub fn new(http: Client, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: ALPHA_VANTAGE_BASE.into(),
            api_key: api_key.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn intraday_url(&self, symbol: &str) -> Result<Url, PriceClientError> {
        let url = format!("{}/query", self.base_url);
        Url::parse_with_params(
            &url,
            &[
                ("function", "TIME_SERIES_INTRADAY"),
                ("symbol", symbol),
                ("interval", INTRADAY_INTERVAL),
                ("outputsize", "compact"),
                ("apikey", self.api_key.as_str()),
            ],
        )
        .map_err(|e| PriceClientError::InvalidUrl(e.to_string()))
    }

    /// Close of the most recent 5-minute bar for `symbol`.
    pub async fn get_latest_close(&self, symbol: &str) -> Result<Quote, PriceClientError> {
        let resp = self
            .http
            .get(self.intraday_url(symbol)?)
            .send()
            .await?
            .error_for_status()?;

        let body: IntradayResponse = resp.json().await?;
        latest_close(symbol, body)
    }
}

/// Pick the newest bar out of an intraday response.
///
/// Alpha Vantage answers HTTP 200 for errors and throttling, so the
/// message fields are checked before the series.
pub fn latest_close(symbol: &str, body: IntradayResponse) -> Result<Quote, PriceClientError> {
    if let Some(msg) = body.error_message.or(body.note).or(body.information) {
        return Err(PriceClientError::Api(msg));
    }

    let series = body
        .series
        .ok_or_else(|| PriceClientError::NoData(symbol.to_string()))?;
    let (as_of, bar) = series
        .into_iter()
        .next_back()
        .ok_or_else(|| PriceClientError::NoData(symbol.to_string()))?;

    let price = Decimal::from_str(bar.close.trim()).map_err(|_| PriceClientError::InvalidPrice {
        symbol: symbol.to_string(),
        value: bar.close.clone(),
    })?;

    Ok(Quote {
        symbol: symbol.to_string(),
        price,
        as_of,
    })
}

#[async_trait]
impl PriceProvider for AlphaVantageClient {
    async fn latest_price(&self, symbol: &str) -> Result<Quote, ProviderError> {
        let quote = self.get_latest_close(symbol).await?;
        tracing::debug!(quote = %quote, "Fetched latest price");
        Ok(quote)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
