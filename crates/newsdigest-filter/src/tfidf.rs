//! TF-IDF vectors over a batch vocabulary.

use std::collections::{BTreeSet, HashMap, HashSet};

use ndarray::Array1;

/// Tokens shorter than this never enter the vocabulary; single characters
/// carry no signal for similarity.
const MIN_TOKEN_CHARS: usize = 2;

/// Word-character runs of the normalized text, at least two characters long.
fn tokens(text: &str) -> Vec<&str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
        .collect()
}

/// L2-normalized TF-IDF vectors for `texts` over their union vocabulary.
///
/// Inputs are expected to be similarity-normalized already. IDF is smoothed,
/// `ln((1 + n) / (1 + df)) + 1`, so terms present in every document still
/// score above zero. The vocabulary is ordered lexicographically, which
/// makes vector layout deterministic across runs. A document with no
/// admissible tokens becomes the zero vector.
pub fn tfidf_vectors(texts: &[String]) -> Vec<Array1<f64>> {
    let tokenized: Vec<Vec<&str>> = texts.iter().map(|t| tokens(t)).collect();

    let vocabulary: HashMap<&str, usize> = tokenized
        .iter()
        .flatten()
        .copied()
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .enumerate()
        .map(|(i, term)| (term, i))
        .collect();

    let mut document_frequency = vec![0usize; vocabulary.len()];
    for doc in &tokenized {
        let distinct: HashSet<&str> = doc.iter().copied().collect();
        for term in distinct {
            document_frequency[vocabulary[term]] += 1;
        }
    }

    let n = texts.len() as f64;
    let idf: Vec<f64> = document_frequency
        .iter()
        .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
        .collect();

    tokenized
        .iter()
        .map(|doc| {
            let mut vector = Array1::<f64>::zeros(vocabulary.len());
            for term in doc {
                vector[vocabulary[term]] += 1.0;
            }
            for (weight, factor) in vector.iter_mut().zip(&idf) {
                *weight *= factor;
            }
            let norm = vector.dot(&vector).sqrt();
            if norm > 0.0 {
                vector /= norm;
            }
            vector
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_vectors_are_unit_length() {
        let vectors = tfidf_vectors(&texts(&[
            "storm floods coastal city",
            "markets rally on earnings",
        ]));
        for vector in &vectors {
            let norm = vector.dot(vector).sqrt();
            assert!((norm - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_identical_documents_get_identical_vectors() {
        let vectors = tfidf_vectors(&texts(&["storm floods city", "storm floods city"]));
        assert!((vectors[0].dot(&vectors[1]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_documents_are_orthogonal() {
        let vectors = tfidf_vectors(&texts(&["storm floods city", "markets rally earnings"]));
        assert_eq!(vectors[0].dot(&vectors[1]), 0.0);
    }

    #[test]
    fn test_single_characters_never_enter_vocabulary() {
        let vectors = tfidf_vectors(&texts(&["a b storm", "c d storm"]));
        // Vocabulary is just "storm".
        assert_eq!(vectors[0].len(), 1);
        assert!((vectors[0].dot(&vectors[1]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tokenless_document_becomes_zero_vector() {
        let vectors = tfidf_vectors(&texts(&["storm floods city", ""]));
        assert_eq!(vectors[1].dot(&vectors[1]), 0.0);
        assert_eq!(vectors[0].dot(&vectors[1]), 0.0);
    }

    #[test]
    fn test_empty_batch() {
        assert!(tfidf_vectors(&[]).is_empty());
    }
}
