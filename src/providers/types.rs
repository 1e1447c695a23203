use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// NewsAPI (/v2/everything)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewsApiResponse {
    pub status: String,
    #[serde(default, alias = "totalResults")]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub articles: Vec<NewsArticle>,
    /// Present when `status == "error"`.
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewsSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewsArticle {
    #[serde(default)]
    pub source: Option<NewsSource>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, alias = "publishedAt")]
    pub published_at: Option<String>,
}

impl NewsArticle {
    /// Trimmed, non-empty title.
    pub fn headline(&self) -> Option<&str> {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Alpha Vantage (TIME_SERIES_INTRADAY)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntradayResponse {
    /// Keyed by "YYYY-MM-DD HH:MM:SS", so map order is time order.
    #[serde(default, rename = "Time Series (5min)")]
    pub series: Option<BTreeMap<String, IntradayBar>>,
    #[serde(default, rename = "Error Message")]
    pub error_message: Option<String>,
    /// Rate-limit notice.
    #[serde(default, rename = "Note")]
    pub note: Option<String>,
    #[serde(default, rename = "Information")]
    pub information: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntradayBar {
    #[serde(rename = "4. close")]
    pub close: String,
}
