//! Near-duplicate removal over an article batch.

use ndarray::{Array1, Array2};

use newsdigest_core::types::ArticleBatch;
use newsdigest_text::normalize::similarity_text;
use newsdigest_text::StopWords;

use crate::tfidf::tfidf_vectors;

/// Pairwise cosine similarity for L2-normalized vectors.
///
/// Symmetric, with the diagonal forced to 1.0 so self-similarity holds even
/// for zero vectors. Zero vectors score 0 against everything else.
pub fn similarity_matrix(vectors: &[Array1<f64>]) -> Array2<f64> {
    let n = vectors.len();
    let mut matrix = Array2::<f64>::zeros((n, n));
    for i in 0..n {
        matrix[[i, i]] = 1.0;
        for j in (i + 1)..n {
            let sim = vectors[i].dot(&vectors[j]);
            matrix[[i, j]] = sim;
            matrix[[j, i]] = sim;
        }
    }
    matrix
}

/// Drop articles that near-duplicate an earlier one.
///
/// Greedy single pass in input order: each uncovered article becomes the
/// representative of every article whose similarity to it exceeds
/// `threshold`. Coverage is measured against the representative only, so a
/// chain A~B~C where A and C are themselves dissimilar keeps both A and C;
/// B is absorbed by A and never anchors a cluster of its own. Survivors
/// keep their input order.
pub fn dedupe(articles: ArticleBatch, stop_words: &StopWords, threshold: f64) -> ArticleBatch {
    if articles.len() < 2 {
        return articles;
    }

    let texts: Vec<String> = articles
        .iter()
        .map(|article| {
            format!(
                "{} {}",
                similarity_text(&article.title, stop_words),
                similarity_text(&article.content, stop_words)
            )
        })
        .collect();

    let vectors = tfidf_vectors(&texts);
    let matrix = similarity_matrix(&vectors);

    let n = articles.len();
    let mut covered = vec![false; n];
    let mut keep = vec![false; n];
    for i in 0..n {
        if covered[i] {
            continue;
        }
        keep[i] = true;
        for j in 0..n {
            if matrix[[i, j]] > threshold {
                covered[j] = true;
            }
        }
    }

    articles
        .into_iter()
        .zip(keep)
        .filter_map(|(article, kept)| kept.then_some(article))
        .collect()
}
