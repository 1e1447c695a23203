use async_trait::async_trait;
use reqwest::{Client, Url};
use thiserror::Error;

use super::types::{NewsApiResponse, NewsArticle};
use super::{NewsProvider, ProviderError};

const NEWS_API_BASE: &str = "https://newsapi.org";
const API_KEY_HEADER: &str = "X-Api-Key";

#[derive(Debug, Error)]
pub enum NewsClientError {
    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("news API error ({code}): {message}")]
    Api { code: String, message: String },
}

impl From<reqwest::Error> for NewsClientError {
    fn from(e: reqwest::Error) -> Self {
        // Request URLs may carry credentials; keep them out of error text.
        Self::Http(e.without_url())
    }
}

impl From<NewsApiResponse> for NewsClientError {
    fn from(body: NewsApiResponse) -> Self {
        Self::Api {
            code: body.code.unwrap_or_else(|| body.status.clone()),
            message: body.message.unwrap_or_default(),
        }
    }
}

/// NewsAPI `/v2/everything` client. The key travels in the `X-Api-Key` header.
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl NewsApiClient {
    pub fn new(http: Client, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: NEWS_API_BASE.into(),
            api_key: api_key.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn everything_url(&self, query: &str) -> Result<Url, NewsClientError> {
        let url = format!("{}/v2/everything", self.base_url);
        Url::parse_with_params(
            &url,
            &[("q", query), ("sortBy", "publishedAt")],
        )
        .map_err(|e| NewsClientError::InvalidUrl(e.to_string()))
    }

    /// Fetch articles mentioning `query`, newest first.
    ///
    /// NewsAPI reports bad keys and rate limits as 4xx responses with an
    /// error body; those surface as [`NewsClientError::Api`].
    pub async fn get_articles(&self, query: &str) -> Result<Vec<NewsArticle>, NewsClientError> {
        let resp = self
            .http
            .get(self.everything_url(query)?)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .send()
            .await?;

        let status_error = resp.error_for_status_ref().err();
        if let Some(err) = status_error {
            return Err(match resp.json::<NewsApiResponse>().await {
                Ok(body) if body.status == "error" => body.into(),
                _ => err.into(),
            });
        }

        let body: NewsApiResponse = resp.json().await?;
        if body.status != "ok" {
            return Err(body.into());
        }

        Ok(body.articles)
    }
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    async fn fetch_headlines(&self, company: &str) -> Result<Vec<String>, ProviderError> {
        let articles = self.get_articles(company).await?;
        let headlines: Vec<String> = articles
            .iter()
            .filter_map(NewsArticle::headline)
            .map(str::to_string)
            .collect();

        tracing::debug!(
            company,
            articles = articles.len(),
            headlines = headlines.len(),
            "Fetched news headlines"
        );

        Ok(headlines)
    }
}
