//! Per-document term importance.

use std::collections::{HashMap, HashSet};

use crate::stopwords::StopWords;

/// Normalized, entity-boosted term weights for one document.
///
/// Frequencies are counted per distinct lowercase token, entries matching a
/// lowercased entity surface form are doubled (once per distinct form), and
/// the table is scaled by its maximum so the top weight is exactly 1.0.
/// An empty token stream yields an empty table. The result depends only on
/// the token multiset and the entity set, never on iteration order.
pub fn term_weights(
    tokens: &[String],
    entities: &HashSet<String>,
    stop_words: &StopWords,
) -> HashMap<String, f64> {
    let mut weights: HashMap<String, f64> = HashMap::new();
    for token in tokens {
        let token = token.to_lowercase();
        if stop_words.contains(&token) {
            continue;
        }
        *weights.entry(token).or_insert(0.0) += 1.0;
    }

    for entity in entities {
        if let Some(weight) = weights.get_mut(&entity.to_lowercase()) {
            *weight *= 2.0;
        }
    }

    let max = weights.values().copied().fold(0.0_f64, f64::max);
    if max > 0.0 {
        for weight in weights.values_mut() {
            *weight /= max;
        }
    }
    weights
}
