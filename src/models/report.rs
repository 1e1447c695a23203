use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AnalysisRecord, LabelCounts, Quote};
use crate::sentiment::{ScoreHistogram, WordFrequency};

/// Everything produced by one "analyze company" action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub id: Uuid,
    pub company: String,
    /// Ticker the quote was requested for.
    pub symbol: String,
    /// `None` when no headlines were found or the price lookup failed.
    pub quote: Option<Quote>,
    pub records: Vec<AnalysisRecord>,
    pub label_counts: LabelCounts,
    pub mean_score: Option<f64>,
    pub histogram: Option<ScoreHistogram>,
    /// All headlines joined by spaces, for word-cloud style rendering.
    pub combined_text: String,
    pub top_words: Vec<WordFrequency>,
    pub generated_at: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn has_headlines(&self) -> bool {
        !self.records.is_empty()
    }

    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary {
            id: self.id,
            company: self.company.clone(),
            symbol: self.symbol.clone(),
            headlines: self.records.len(),
            label_counts: self.label_counts,
            mean_score: self.mean_score,
            price: self.quote.as_ref().map(|q| q.price.to_string()),
            generated_at: self.generated_at,
        }
    }
}

/// Compact view of a report, pushed to dashboard WebSocket clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub id: Uuid,
    pub company: String,
    pub symbol: String,
    pub headlines: usize,
    pub label_counts: LabelCounts,
    pub mean_score: Option<f64>,
    pub price: Option<String>,
    pub generated_at: DateTime<Utc>,
}
