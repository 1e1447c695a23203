use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// English function words dropped from word-frequency views.
const STOPWORDS: &[&str] = &[
    "a", "about", "after", "again", "against", "all", "also", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "between", "both", "but", "by",
    "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him",
    "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me", "more",
    "most", "my", "new", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or",
    "other", "our", "ours", "out", "over", "own", "same", "says", "she", "should", "so",
    "some", "such", "than", "that", "the", "their", "theirs", "them", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "under", "until", "up", "very",
    "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "would", "you", "your", "yours",
];

/// How often a word appears across a body of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

/// Split text into lowercase word tokens.
///
/// Letters, digits and apostrophes form words; everything else separates
/// them. Typographic apostrophes are folded to `'` and apostrophes at either
/// end of a token are trimmed.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '\u{2019}'))
        .map(|raw| raw.replace('\u{2019}', "'"))
        .map(|raw| raw.trim_matches('\'').to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

/// Count content words in `text`, most frequent first.
///
/// Stopwords, single-character tokens and bare numbers are skipped and a
/// trailing possessive `'s` is folded into the base word. Ties are broken
/// alphabetically so the output is stable. At most `limit` entries are
/// returned.
pub fn word_frequencies(text: &str, limit: usize) -> Vec<WordFrequency> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for token in tokenize(text) {
        let word = token.strip_suffix("'s").unwrap_or(&token);
        if word.chars().count() < 2
            || is_stopword(word)
            || word.chars().all(|c| c.is_ascii_digit())
        {
            continue;
        }
        *counts.entry(word.to_string()).or_insert(0) += 1;
    }

    let mut frequencies: Vec<WordFrequency> = counts
        .into_iter()
        .map(|(word, count)| WordFrequency { word, count })
        .collect();

    frequencies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    frequencies.truncate(limit);
    frequencies
}
