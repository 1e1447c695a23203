use std::collections::{HashMap, HashSet};

/// Polarity of positive-leaning words, in (0, 1].
const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("best", 1.0),
    ("better", 0.5),
    ("positive", 0.23),
    ("strong", 0.43),
    ("stronger", 0.5),
    ("strongest", 0.6),
    ("success", 0.6),
    ("successful", 0.75),
    ("win", 0.8),
    ("wins", 0.8),
    ("won", 0.6),
    ("beat", 0.4),
    ("beats", 0.4),
    ("exceed", 0.5),
    ("exceeded", 0.5),
    ("exceeds", 0.5),
    ("gain", 0.4),
    ("gained", 0.4),
    ("gains", 0.4),
    ("profit", 0.5),
    ("profitable", 0.6),
    ("growth", 0.4),
    ("grow", 0.3),
    ("growing", 0.3),
    ("surge", 0.6),
    ("surged", 0.6),
    ("soar", 0.7),
    ("soared", 0.7),
    ("soaring", 0.7),
    ("rally", 0.5),
    ("rallied", 0.5),
    ("rallies", 0.5),
    ("jump", 0.4),
    ("jumped", 0.4),
    ("rise", 0.3),
    ("rising", 0.3),
    ("rose", 0.3),
    ("record", 0.4),
    ("upgrade", 0.5),
    ("upgraded", 0.5),
    ("bullish", 0.7),
    ("optimistic", 0.6),
    ("optimism", 0.5),
    ("confident", 0.5),
    ("boost", 0.4),
    ("boosted", 0.4),
    ("improve", 0.4),
    ("improved", 0.4),
    ("improvement", 0.4),
    ("recovery", 0.3),
    ("rebound", 0.3),
    ("outperform", 0.6),
    ("breakthrough", 0.6),
    ("innovative", 0.5),
    ("impressive", 1.0),
    ("happy", 0.8),
    ("love", 0.5),
    ("upbeat", 0.6),
    ("top", 0.5),
    ("high", 0.16),
    ("higher", 0.25),
    ("approve", 0.4),
    ("approved", 0.4),
    ("approval", 0.4),
    ("award", 0.5),
    ("launch", 0.2),
    ("expand", 0.3),
    ("expansion", 0.3),
    ("partnership", 0.3),
    ("dividend", 0.2),
];

/// Polarity of negative-leaning words, in [-1, 0).
const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("poor", -0.4),
    ("weak", -0.38),
    ("weaker", -0.45),
    ("negative", -0.3),
    ("loss", -0.5),
    ("losses", -0.5),
    ("lose", -0.5),
    ("lost", -0.5),
    ("miss", -0.4),
    ("missed", -0.4),
    ("misses", -0.4),
    ("fall", -0.4),
    ("fell", -0.4),
    ("falling", -0.4),
    ("drop", -0.4),
    ("dropped", -0.4),
    ("decline", -0.4),
    ("declined", -0.4),
    ("plunge", -0.7),
    ("plunged", -0.7),
    ("plummet", -0.8),
    ("plummeted", -0.8),
    ("crash", -0.8),
    ("crashed", -0.8),
    ("slump", -0.5),
    ("sink", -0.4),
    ("sank", -0.4),
    ("tumble", -0.5),
    ("tumbled", -0.5),
    ("lawsuit", -0.5),
    ("sue", -0.4),
    ("sued", -0.4),
    ("fraud", -0.9),
    ("scandal", -0.7),
    ("probe", -0.3),
    ("investigation", -0.3),
    ("recall", -0.4),
    ("fined", -0.5),
    ("penalty", -0.5),
    ("layoff", -0.5),
    ("layoffs", -0.5),
    ("cut", -0.3),
    ("cuts", -0.3),
    ("downgrade", -0.5),
    ("downgraded", -0.5),
    ("bearish", -0.7),
    ("pessimistic", -0.6),
    ("fear", -0.6),
    ("fears", -0.6),
    ("worry", -0.5),
    ("worries", -0.5),
    ("concern", -0.3),
    ("concerns", -0.3),
    ("risk", -0.3),
    ("risky", -0.5),
    ("warning", -0.4),
    ("warn", -0.4),
    ("warns", -0.4),
    ("crisis", -0.7),
    ("bankruptcy", -0.9),
    ("bankrupt", -0.9),
    ("default", -0.4),
    ("debt", -0.2),
    ("fail", -0.5),
    ("failed", -0.5),
    ("failure", -0.6),
    ("trouble", -0.5),
    ("problem", -0.4),
    ("problems", -0.4),
    ("delay", -0.3),
    ("delayed", -0.3),
    ("low", -0.1),
    ("lower", -0.2),
    ("volatile", -0.3),
    ("uncertain", -0.3),
    ("uncertainty", -0.3),
    ("sad", -0.5),
    ("angry", -0.5),
    ("hate", -0.8),
];

/// Multipliers applied to the next polar word.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("really", 1.2),
    ("hugely", 1.5),
    ("massively", 1.5),
    ("significantly", 1.3),
    ("sharply", 1.4),
    ("dramatically", 1.5),
    ("incredibly", 1.5),
    ("slightly", 0.5),
    ("somewhat", 0.7),
    ("marginally", 0.5),
    ("modestly", 0.7),
    ("barely", 0.4),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "none", "nothing", "nobody", "without", "cannot",
    "cant", "dont", "doesnt", "didnt", "isnt", "arent", "wasnt", "werent", "wont", "wouldnt",
    "shouldnt", "couldnt", "hasnt", "havent", "hadnt",
];

/// Word-level sentiment dictionary: polar words, intensifiers and negations.
///
/// Keys are lowercase. Lookups expect tokens produced by
/// [`super::words::tokenize`].
#[derive(Debug, Clone)]
pub struct Lexicon {
    polarity: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    /// Lexicon seeded with general and financial-news vocabulary.
    pub fn new() -> Self {
        let polarity = POSITIVE_WORDS
            .iter()
            .chain(NEGATIVE_WORDS.iter())
            .map(|&(word, score)| (word.to_string(), score))
            .collect();

        let intensifiers = INTENSIFIERS
            .iter()
            .map(|&(word, mult)| (word.to_string(), mult))
            .collect();

        let negations = NEGATIONS.iter().map(|w| w.to_string()).collect();

        Self {
            polarity,
            intensifiers,
            negations,
        }
    }

    /// An empty lexicon; every text scores 0.0 until words are added.
    pub fn empty() -> Self {
        Self {
            polarity: HashMap::new(),
            intensifiers: HashMap::new(),
            negations: HashSet::new(),
        }
    }

    /// Add or replace a polar word. Polarity is clamped to [-1, 1];
    /// non-finite values are ignored.
    pub fn insert(&mut self, word: &str, polarity: f64) {
        if !polarity.is_finite() {
            return;
        }
        self.polarity
            .insert(word.to_lowercase(), polarity.clamp(-1.0, 1.0));
    }

    /// Polarity of `word`, falling back to the form without a trailing
    /// `s` or `es` ("beats" → "beat", "crashes" → "crash").
    pub fn polarity(&self, word: &str) -> Option<f64> {
        if let Some(score) = self.polarity.get(word) {
            return Some(*score);
        }

        [word.strip_suffix('s'), word.strip_suffix("es")]
            .into_iter()
            .flatten()
            .filter(|stem| stem.len() > 1)
            .find_map(|stem| self.polarity.get(stem).copied())
    }

    pub fn intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    /// True for negation words, including any contraction ending in `n't`.
    pub fn is_negation(&self, word: &str) -> bool {
        word.ends_with("n't") || self.negations.contains(word)
    }

    pub fn len(&self) -> usize {
        self.polarity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polarity.is_empty()
    }
}
