//! Vector similarity metrics.

/// Scoring strategy for comparing two vectors of equal dimension.
///
/// Implementations may assume both slices have the same length; the
/// index validates dimensions before scoring.
pub trait Metric: Send + Sync {
    /// Compute the similarity score between `a` and `b`.
    /// Higher means more similar.
    fn score(&self, a: &[f32], b: &[f32]) -> f32;
}

/// Cosine similarity.
///
/// Returns a value in [-1.0, 1.0] where 1.0 = identical direction.
/// Returns 0.0 when either vector has zero norm.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cosine;

impl Metric for Cosine {
    fn score(&self, a: &[f32], b: &[f32]) -> f32 {
        let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        dot / (norm_a * norm_b)
    }
}

/// Raw dot product.
///
/// Equivalent to cosine similarity when vectors are pre-normalized to
/// unit length.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotProduct;

impl Metric for DotProduct {
    fn score(&self, a: &[f32], b: &[f32]) -> f32 {
        a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_identical() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![1.0, 0.0, 0.0];
        assert!((Cosine.score(&a, &b) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_cosine_orthogonal() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert!(Cosine.score(&a, &b).abs() < 0.001);
    }

    #[test]
    fn test_cosine_opposite() {
        let a = vec![1.0, 0.0];
        let b = vec![-1.0, 0.0];
        assert!((Cosine.score(&a, &b) + 1.0).abs() < 0.001);
    }

    #[test]
    fn test_cosine_ignores_magnitude() {
        let a = vec![0.5, 0.0];
        let b = vec![8.0, 0.0];
        assert!((Cosine.score(&a, &b) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_cosine_zero_vector() {
        let a = vec![0.0, 0.0];
        let b = vec![1.0, 0.0];
        assert!(Cosine.score(&a, &b).abs() < 0.001);
    }

    #[test]
    fn test_dot_product() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![4.0, 5.0, 6.0];
        assert!((DotProduct.score(&a, &b) - 32.0).abs() < 0.001);
    }

    #[test]
    fn test_dot_matches_cosine_for_unit_vectors() {
        let a = vec![0.6, 0.8];
        let b = vec![0.8, 0.6];
        let dot = DotProduct.score(&a, &b);
        let cos = Cosine.score(&a, &b);
        assert!((dot - cos).abs() < 0.001);
    }
}
