use serde::{Deserialize, Serialize};

use crate::sentiment::SentimentLabel;

/// One scored headline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub headline: String,
    pub score: f64,
    pub label: SentimentLabel,
}

/// Number of records per sentiment label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl LabelCounts {
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

impl<'a> FromIterator<&'a AnalysisRecord> for LabelCounts {
    fn from_iter<I: IntoIterator<Item = &'a AnalysisRecord>>(iter: I) -> Self {
        let mut counts = LabelCounts::default();
        for record in iter {
            counts.record(record.label);
        }
        counts
    }
}
