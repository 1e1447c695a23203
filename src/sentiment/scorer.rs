use std::sync::OnceLock;

use super::lexicon::Lexicon;
use super::words::tokenize;

/// Factor applied to a negated polar word ("not good" is mildly negative,
/// not the mirror image of "good").
const NEGATION_FACTOR: f64 = -0.5;

/// Anything that maps text to a polarity score in [-1.0, 1.0].
///
/// Implementations must be deterministic and side-effect free; the
/// classifier and the aggregation pipeline only rely on this contract.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> f64;
}

/// Dictionary-driven scorer: averages the polarity of every polar word in
/// the text after applying negations and intensifiers.
#[derive(Debug, Clone, Default)]
pub struct LexiconScorer {
    lexicon: Lexicon,
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Add or override a single word's polarity.
    pub fn with_word(mut self, word: &str, polarity: f64) -> Self {
        self.lexicon.insert(word, polarity);
        self
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        let mut total = 0.0;
        let mut hits = 0usize;

        let mut negated = false;
        let mut multiplier = 1.0;

        for token in tokenize(text) {
            if self.lexicon.is_negation(&token) {
                negated = true;
                continue;
            }

            if let Some(mult) = self.lexicon.intensifier(&token) {
                multiplier = mult;
                continue;
            }

            if let Some(polarity) = self.lexicon.polarity(&token) {
                let mut value = polarity * multiplier;
                if negated {
                    value *= NEGATION_FACTOR;
                }
                total += value;
                hits += 1;
            }

            // Modifiers only reach the word right after them.
            negated = false;
            multiplier = 1.0;
        }

        if hits == 0 {
            return 0.0;
        }

        let mean = total / hits as f64;
        if !mean.is_finite() {
            return 0.0;
        }
        mean.clamp(-1.0, 1.0)
    }
}

/// Score `text` with the built-in lexicon.
pub fn score(text: &str) -> f64 {
    static DEFAULT: OnceLock<LexiconScorer> = OnceLock::new();
    DEFAULT.get_or_init(LexiconScorer::new).score(text)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
