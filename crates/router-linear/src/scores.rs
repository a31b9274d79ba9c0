//! Corpus scoring and top-k selection.

use std::cmp::Ordering;

use crate::metric::Metric;

/// Score a query vector against every row of the corpus.
///
/// Returns one score per corpus row, in corpus order. O(N×D) for a
/// corpus of N rows of dimension D.
pub fn similarity_matrix(query: &[f32], corpus: &[Vec<f32>], metric: &dyn Metric) -> Vec<f32> {
    corpus.iter().map(|row| metric.score(query, row)).collect()
}

/// Select the `top_k` highest scores and their positions.
///
/// Scores come back in descending order; ties break by ascending
/// position so selection is deterministic. `top_k` larger than the
/// score count clamps to the available count.
pub fn top_scores(scores: &[f32], top_k: usize) -> (Vec<f32>, Vec<usize>) {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    // Stable sort keeps equal scores in position order.
    order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));
    order.truncate(top_k);

    let top = order.iter().map(|&i| scores[i]).collect();
    (top, order)
}
