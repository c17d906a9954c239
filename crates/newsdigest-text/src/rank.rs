//! Sentence scoring and top-K selection.

use std::collections::{HashMap, HashSet};

use crate::normalize::word_tokens;

/// Score of the sentence at `index` in the segmented document.
///
/// Keyed by position rather than sentence text, so repeated literal
/// sentences score independently.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceScore {
    pub index: usize,
    pub score: f64,
}

/// Score every sentence from term weights, entity mentions, and position.
///
/// For sentence `idx` of `total`:
/// `score = base * (1 + 1.5 * entity_mentions + position_boost)` where
/// `base` sums the weights of the sentence's word tokens, entity mentions
/// count distinct entities appearing (case-insensitively) in the sentence,
/// and the boost is 0.5 for positions strictly inside the leading or
/// trailing tenth of the document.
pub fn score_sentences(
    sentences: &[&str],
    weights: &HashMap<String, f64>,
    entities: &HashSet<String>,
) -> Vec<SentenceScore> {
    let total = sentences.len() as f64;
    sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| {
            let base: f64 = word_tokens(sentence)
                .iter()
                .map(|t| weights.get(t).copied().unwrap_or(0.0))
                .sum();

            let lowered = sentence.to_lowercase();
            let mentions = entities
                .iter()
                .filter(|e| lowered.contains(&e.to_lowercase()))
                .count();
            let entity_boost = 1.5 * mentions as f64;

            let idx = index as f64;
            let position_boost = if idx < total * 0.1 || idx > total * 0.9 {
                0.5
            } else {
                0.0
            };

            SentenceScore {
                index,
                score: base * (1.0 + entity_boost + position_boost),
            }
        })
        .collect()
}

/// Indices of the `k` best-scoring sentences, ascending.
///
/// Equal scores break toward the earlier sentence and `k` is clamped to the
/// sentence count. Ascending order means callers reassemble summaries in
/// original document order.
pub fn select_top(scores: &[SentenceScore], k: usize) -> Vec<usize> {
    let mut ranked: Vec<&SentenceScore> = scores.iter().collect();
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.index.cmp(&b.index))
    });

    let mut selected: Vec<usize> = ranked
        .iter()
        .take(k.min(scores.len()))
        .map(|s| s.index)
        .collect();
    selected.sort_unstable();
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(entries: &[(&str, f64)]) -> HashMap<String, f64> {
        entries.iter().map(|(t, w)| (t.to_string(), *w)).collect()
    }

    fn entity_set(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_base_score_sums_token_weights() {
        let sentences = vec!["Storm floods city", "Calm day"];
        let w = weights(&[("storm", 1.0), ("floods", 0.5), ("city", 0.25)]);
        let scores = score_sentences(&sentences, &w, &HashSet::new());
        // total = 2: index 0 is < 0.2 and boosted; index 1 is not > 1.8.
        assert_eq!(scores[0].score, 1.75 * 1.5);
        assert_eq!(scores[1].score, 0.0);
    }

    #[test]
    fn test_entity_mentions_multiply_base() {
        let sentences = vec!["Apple sued Google over patents"];
        let w = weights(&[("patents", 1.0)]);
        let entities = entity_set(&["Apple", "Google", "Microsoft"]);
        let scores = score_sentences(&sentences, &w, &entities);
        // base 1.0, two distinct mentions, single sentence is also
        // position-boosted: 1.0 * (1 + 3.0 + 0.5).
        assert_eq!(scores[0].score, 4.5);
    }

    #[test]
    fn test_position_boost_boundaries_are_strict() {
        let sentences: Vec<&str> = vec!["alpha one"; 10];
        let w = weights(&[("alpha", 1.0)]);
        let scores = score_sentences(&sentences, &w, &HashSet::new());
        // total = 10: only idx 0 is < 1.0; idx 9 is not > 9.0.
        assert_eq!(scores[0].score, 1.5);
        assert_eq!(scores[1].score, 1.0);
        assert_eq!(scores[8].score, 1.0);
        assert_eq!(scores[9].score, 1.0);
    }

    #[test]
    fn test_trailing_tenth_gets_boost() {
        let sentences: Vec<&str> = vec!["alpha one"; 11];
        let w = weights(&[("alpha", 1.0)]);
        let scores = score_sentences(&sentences, &w, &HashSet::new());
        // total = 11: indices 0 and 1 fall under 1.1, index 10 exceeds 9.9.
        assert_eq!(scores[0].score, 1.5);
        assert_eq!(scores[1].score, 1.5);
        assert_eq!(scores[10].score, 1.5);
        assert_eq!(scores[5].score, 1.0);
    }

    #[test]
    fn test_select_top_returns_document_order() {
        let scores = vec![
            SentenceScore { index: 0, score: 0.1 },
            SentenceScore { index: 1, score: 0.9 },
            SentenceScore { index: 2, score: 0.5 },
            SentenceScore { index: 3, score: 0.8 },
        ];
        assert_eq!(select_top(&scores, 2), vec![1, 3]);
    }

    #[test]
    fn test_select_top_ties_prefer_earlier_sentence() {
        let scores = vec![
            SentenceScore { index: 0, score: 0.5 },
            SentenceScore { index: 1, score: 0.5 },
            SentenceScore { index: 2, score: 0.5 },
        ];
        assert_eq!(select_top(&scores, 2), vec![0, 1]);
    }

    #[test]
    fn test_select_top_clamps_k() {
        let scores = vec![SentenceScore { index: 0, score: 1.0 }];
        assert_eq!(select_top(&scores, 5), vec![0]);
        assert!(select_top(&scores, 0).is_empty());
    }
}
