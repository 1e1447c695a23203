use serde::{Deserialize, Serialize};

/// Bin count used when the caller has no preference.
pub const DEFAULT_BINS: usize = 10;

/// One bucket of a score histogram. Covers `[lower, upper)`, except the last
/// bin of a histogram, which also includes `upper`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width histogram spanning the observed score range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreHistogram {
    pub bins: Vec<HistogramBin>,
}

impl ScoreHistogram {
    /// Bucket `scores` into `bin_count` equal-width bins over
    /// `[min, max]`. A degenerate range (all scores equal) is widened to
    /// `[v - 0.5, v + 0.5]`. Non-finite scores are ignored.
    ///
    /// Returns `None` when there is nothing to bucket or `bin_count == 0`.
    pub fn from_scores(scores: &[f64], bin_count: usize) -> Option<Self> {
        let finite: Vec<f64> = scores.iter().copied().filter(|s| s.is_finite()).collect();
        if finite.is_empty() || bin_count == 0 {
            return None;
        }

        let mut min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let mut max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if min == max {
            min -= 0.5;
            max += 0.5;
        }

        let width = (max - min) / bin_count as f64;
        let mut bins: Vec<HistogramBin> = (0..bin_count)
            .map(|i| HistogramBin {
                lower: min + width * i as f64,
                upper: if i + 1 == bin_count {
                    max
                } else {
                    min + width * (i + 1) as f64
                },
                count: 0,
            })
            .collect();

        for score in finite {
            let index = (((score - min) / width).floor() as usize).min(bin_count - 1);
            bins[index].count += 1;
        }

        Some(Self { bins })
    }

    /// Total number of scores across all bins.
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}
