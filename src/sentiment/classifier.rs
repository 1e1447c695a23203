use std::fmt;

use serde::{Deserialize, Serialize};

/// Scores strictly above this are Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Scores strictly below this are Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Discrete sentiment categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a polarity score.
///
/// Rules:
/// - **Positive**: score > 0.05
/// - **Negative**: score < -0.05
/// - **Neutral**: everything else, including both thresholds and NaN.
pub fn classify(score: f64) -> SentimentLabel {
    if score > POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score < NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
