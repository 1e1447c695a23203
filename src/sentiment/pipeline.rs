use crate::models::{AnalysisRecord, LabelCounts};

use super::classifier::classify;
use super::histogram::ScoreHistogram;
use super::scorer::SentimentScorer;
use super::words::{word_frequencies, WordFrequency};

/// Score and classify a single headline.
///
/// Scores from any scorer are clamped to [-1, 1]; non-finite scores become 0.0.
pub fn analyze_headline<S>(scorer: &S, headline: &str) -> AnalysisRecord
where
    S: SentimentScorer + ?Sized,
{
    let score = normalize_score(scorer.score(headline));
    AnalysisRecord {
        headline: headline.to_string(),
        score,
        label: classify(score),
    }
}

fn normalize_score(score: f64) -> f64 {
    if score.is_finite() {
        score.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Score and classify every headline, preserving input order.
pub fn analyze<S, H>(scorer: &S, headlines: &[H]) -> Vec<AnalysisRecord>
where
    S: SentimentScorer + ?Sized,
    H: AsRef<str>,
{
    headlines
        .iter()
        .map(|h| analyze_headline(scorer, h.as_ref()))
        .collect()
}

/// Scored headlines plus the derived views used for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    records: Vec<AnalysisRecord>,
}

impl Analysis {
    pub fn run<S, H>(scorer: &S, headlines: &[H]) -> Self
    where
        S: SentimentScorer + ?Sized,
        H: AsRef<str>,
    {
        Self {
            records: analyze(scorer, headlines),
        }
    }

    pub fn records(&self) -> &[AnalysisRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<AnalysisRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn scores(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.score).collect()
    }

    /// Distribution of scores; `None` for an empty analysis.
    pub fn histogram(&self, bins: usize) -> Option<ScoreHistogram> {
        ScoreHistogram::from_scores(&self.scores(), bins)
    }

    /// Every headline joined by a single space, in input order.
    pub fn combined_text(&self) -> String {
        self.records
            .iter()
            .map(|r| r.headline.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn label_counts(&self) -> LabelCounts {
        self.records.iter().collect()
    }

    pub fn top_words(&self, limit: usize) -> Vec<WordFrequency> {
        word_frequencies(&self.combined_text(), limit)
    }

    pub fn mean_score(&self) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        Some(self.records.iter().map(|r| r.score).sum::<f64>() / self.records.len() as f64)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
