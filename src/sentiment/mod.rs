pub mod classifier;
pub mod histogram;
pub mod lexicon;
pub mod pipeline;
pub mod scorer;
pub mod words;

pub use classifier::{classify, SentimentLabel, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use histogram::{HistogramBin, ScoreHistogram, DEFAULT_BINS};
pub use lexicon::Lexicon;
pub use pipeline::{analyze, analyze_headline, Analysis};
pub use scorer::{score, LexiconScorer, SentimentScorer};
pub use words::{tokenize, word_frequencies, WordFrequency};
