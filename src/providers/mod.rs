pub mod news_client;
pub mod price_client;
pub mod types;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Quote;

pub use news_client::{NewsApiClient, NewsClientError};
pub use price_client::{AlphaVantageClient, PriceClientError};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error(transparent)]
    News(#[from] NewsClientError),

    #[error(transparent)]
    Price(#[from] PriceClientError),

    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

/// Source of news headlines for a company.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Headlines mentioning `company`, newest first. May be empty.
    async fn fetch_headlines(&self, company: &str) -> Result<Vec<String>, ProviderError>;
}

/// Source of the current price for a ticker.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    async fn latest_price(&self, symbol: &str) -> Result<Quote, ProviderError>;
}
