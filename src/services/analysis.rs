use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use metrics::{counter, gauge, histogram};
use serde::Deserialize;
use uuid::Uuid;

use crate::models::{AnalysisReport, Quote};
use crate::providers::{NewsProvider, PriceProvider};
use crate::sentiment::{Analysis, SentimentScorer};

/// A user-triggered "analyze" action.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    pub company: String,
    /// Ticker for the price lookup. Optional; see [`AnalysisService::resolve_symbol`].
    #[serde(default)]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AnalysisSettings {
    pub default_symbol: String,
    pub histogram_bins: usize,
    pub top_words: usize,
}

/// Runs the fetch → score → aggregate flow against pluggable collaborators.
#[derive(Clone)]
pub struct AnalysisService {
    news: Arc<dyn NewsProvider>,
    prices: Arc<dyn PriceProvider>,
    scorer: Arc<dyn SentimentScorer>,
    settings: AnalysisSettings,
}

impl AnalysisService {
    pub fn new(
        news: Arc<dyn NewsProvider>,
        prices: Arc<dyn PriceProvider>,
        scorer: Arc<dyn SentimentScorer>,
        settings: AnalysisSettings,
    ) -> Self {
        Self {
            news,
            prices,
            scorer,
            settings,
        }
    }

    pub fn scorer(&self) -> &dyn SentimentScorer {
        self.scorer.as_ref()
    }

    /// Ticker whose price accompanies the analysis.
    ///
    /// An explicit symbol wins; otherwise a company input that already looks
    /// like a ticker ("AAPL", "BRK.B") is used; otherwise the configured
    /// default symbol.
    pub fn resolve_symbol(&self, company: &str, symbol: Option<&str>) -> String {
        if let Some(s) = symbol.map(str::trim).filter(|s| !s.is_empty()) {
            return s.to_uppercase();
        }
        let company = company.trim();
        if looks_like_ticker(company) {
            return company.to_string();
        }
        self.settings.default_symbol.clone()
    }

    /// Fetch headlines and price, score them, and build the report.
    ///
    /// Never fails: a failed news fetch is treated as "no headlines" and a
    /// failed price fetch leaves the quote empty.
    pub async fn run(&self, request: &AnalysisRequest) -> AnalysisReport {
        let started = Instant::now();
        let company = request.company.trim().to_string();
        let symbol = self.resolve_symbol(&company, request.symbol.as_deref());

        let headlines = self.fetch_headlines(&company).await;

        let (analysis, quote) = if headlines.is_empty() {
            tracing::info!(company = %company, "No news articles found, skipping price lookup");
            (Analysis::default(), None)
        } else {
            let quote = self.fetch_quote(&symbol).await;
            (Analysis::run(self.scorer.as_ref(), &headlines), quote)
        };

        let report = self.build_report(company, symbol, quote, analysis);

        counter!("analyses_total").increment(1);
        counter!("headlines_scored_total").increment(report.records.len() as u64);
        if let Some(mean) = report.mean_score {
            gauge!("last_mean_sentiment").set(mean);
        }
        histogram!("analysis_latency_seconds").record(started.elapsed().as_secs_f64());

        tracing::info!(
            company = %report.company,
            symbol = %report.symbol,
            headlines = report.records.len(),
            positive = report.label_counts.positive,
            negative = report.label_counts.negative,
            neutral = report.label_counts.neutral,
            "Analysis complete"
        );

        report
    }

    async fn fetch_headlines(&self, company: &str) -> Vec<String> {
        match self.news.fetch_headlines(company).await {
            Ok(headlines) => headlines,
            Err(e) => {
                counter!("news_fetch_failures_total").increment(1);
                tracing::warn!(error = %e, company, "News fetch failed, continuing with no headlines");
                Vec::new()
            }
        }
    }

    async fn fetch_quote(&self, symbol: &str) -> Option<Quote> {
        match self.prices.latest_price(symbol).await {
            Ok(quote) => Some(quote),
            Err(e) => {
                counter!("price_fetch_failures_total").increment(1);
                tracing::warn!(error = %e, symbol, "Price fetch failed");
                None
            }
        }
    }

    fn build_report(
        &self,
        company: String,
        symbol: String,
        quote: Option<Quote>,
        analysis: Analysis,
    ) -> AnalysisReport {
        let label_counts = analysis.label_counts();
        let mean_score = analysis.mean_score();
        let histogram = analysis.histogram(self.settings.histogram_bins);
        let combined_text = analysis.combined_text();
        let top_words = analysis.top_words(self.settings.top_words);

        AnalysisReport {
            id: Uuid::new_v4(),
            company,
            symbol,
            quote,
            records: analysis.into_records(),
            label_counts,
            mean_score,
            histogram,
            combined_text,
            top_words,
            generated_at: Utc::now(),
        }
    }
}

/// 1-5 uppercase ASCII letters, optionally followed by a `.` share class.
fn looks_like_ticker(input: &str) -> bool {
    let (root, class) = match input.split_once('.') {
        Some((root, class)) => (root, Some(class)),
        None => (input, None),
    };

    let root_ok = (1..=5).contains(&root.len()) && root.chars().all(|c| c.is_ascii_uppercase());
    let class_ok = class.map_or(true, |c| {
        (1..=2).contains(&c.len()) && c.chars().all(|ch| ch.is_ascii_uppercase())
    });

    root_ok && class_ok
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
