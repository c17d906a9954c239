//! Text normalization for scoring and for similarity comparison.
//!
//! The two modes differ only in which characters survive: scoring keeps
//! letters, whitespace, and periods so sentence structure stays visible;
//! similarity keeps all word characters (digits included) because the
//! TF-IDF vectorizer wants every content token.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::stopwords::StopWords;

/// Wire-service boilerplate markers and copyright glyphs.
static BOILERPLATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(CNN\)|\(Reuters\)|\(AP\)|[©®™]").unwrap());

/// Everything outside letters, whitespace, and periods.
static NON_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z\s.]").unwrap());

/// Everything outside word characters and whitespace.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Lowercase word tokens of already-cleaned text.
pub(crate) fn word_tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase())
        .collect()
}

/// Lowercase content tokens for the term-importance scorer.
///
/// Strips boilerplate, then every character outside letters/whitespace/
/// periods, collapses whitespace, tokenizes, and drops stop words. Empty
/// input yields an empty vector.
pub fn scoring_tokens(text: &str, stop_words: &StopWords) -> Vec<String> {
    let cleaned = BOILERPLATE.replace_all(text, "");
    let cleaned = NON_LETTER.replace_all(&cleaned, "");
    let collapsed = WHITESPACE.replace_all(&cleaned, " ");
    word_tokens(collapsed.trim())
        .into_iter()
        .filter(|t| !stop_words.contains(t))
        .collect()
}

/// Space-joined lowercase content words for the TF-IDF vectorizer.
///
/// Strips boilerplate and punctuation (word characters survive, so digits
/// are kept), collapses whitespace, lowercases, and drops stop words. The
/// vectorizer re-tokenizes the returned string.
pub fn similarity_text(text: &str, stop_words: &StopWords) -> String {
    let cleaned = BOILERPLATE.replace_all(text, "");
    let cleaned = NON_WORD.replace_all(&cleaned, "");
    let collapsed = WHITESPACE.replace_all(&cleaned, " ");
    collapsed
        .trim()
        .to_lowercase()
        .split_whitespace()
        .filter(|t| !stop_words.contains(t))
        .collect::<Vec<_>>()
        .join(" ")
}
