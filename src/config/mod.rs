use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;

use crate::sentiment::DEFAULT_BINS;

const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org";
const DEFAULT_ALPHA_VANTAGE_URL: &str = "https://www.alphavantage.co";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,

    // Providers
    pub news_api_key: String,
    pub news_api_url: String,
    pub alpha_vantage_api_key: String,
    pub alpha_vantage_url: String,
    pub http_timeout_secs: u64,

    // Analysis
    pub default_symbol: String,
    pub histogram_bins: usize,
    pub top_words: usize,

    // API auth (optional — disabled when unset)
    pub api_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,

            news_api_key: env::var("NEWS_API_KEY")
                .map_err(|_| anyhow::anyhow!("NEWS_API_KEY must be set"))?,
            news_api_url: env::var("NEWS_API_URL")
                .unwrap_or_else(|_| DEFAULT_NEWS_API_URL.into()),
            alpha_vantage_api_key: env::var("ALPHA_VANTAGE_API_KEY")
                .map_err(|_| anyhow::anyhow!("ALPHA_VANTAGE_API_KEY must be set"))?,
            alpha_vantage_url: env::var("ALPHA_VANTAGE_URL")
                .unwrap_or_else(|_| DEFAULT_ALPHA_VANTAGE_URL.into()),
            http_timeout_secs: env_or("HTTP_TIMEOUT_SECS", 10)?,

            default_symbol: env::var("DEFAULT_SYMBOL")
                .map(|s| s.trim().to_uppercase())
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "TSLA".into()),
            histogram_bins: match env_or("HISTOGRAM_BINS", DEFAULT_BINS)? {
                0 => anyhow::bail!("HISTOGRAM_BINS must be at least 1"),
                n => n,
            },
            top_words: env_or("TOP_WORDS", 50)?,

            api_token: env::var("API_TOKEN").ok().filter(|t| !t.is_empty()),
        })
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Returns true if requests must carry a bearer token.
    pub fn auth_enabled(&self) -> bool {
        self.api_token.is_some()
    }
}

/// Read `name` from the environment, falling back to `default` when unset.
fn env_or<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_or(name, env::var(name).ok(), default)
}

fn parse_or<T>(name: &str, raw: Option<String>, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("invalid {name}: {value:?}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_uses_default_when_unset() {
        assert_eq!(parse_or::<u64>("HTTP_TIMEOUT_SECS", None, 10).unwrap(), 10);
    }

    #[test]
    fn test_parse_or_reads_value() {
        assert_eq!(parse_or::<u64>("HTTP_TIMEOUT_SECS", Some(" 25 ".into()), 10).unwrap(), 25);
    }

    #[test]
    fn test_parse_or_rejects_malformed_value() {
        let err = parse_or::<u64>("HTTP_TIMEOUT_SECS", Some("ten".into()), 10).unwrap_err();
        assert!(err.to_string().contains("HTTP_TIMEOUT_SECS"));
    }
}
