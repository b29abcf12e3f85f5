//! Sparse term-weight vectors with cached norms.

use crate::index::vocabulary::TermId;

/// A sparse vector of term weights, sorted by term id.
///
/// The Euclidean norm is computed once at construction. Two vectors
/// built from the same weights compare equal entry for entry.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedVector {
    /// Term id and weight pairs, ascending by term id.
    weights: Vec<(TermId, f32)>,
    /// Cached Euclidean norm of the weights.
    norm: f32,
}

impl WeightedVector {
    /// Build a vector from unordered term weights.
    ///
    /// Term ids must be distinct. The pairs are sorted by id and the
    /// norm is taken over the sorted order, so the result does not
    /// depend on the order the weights arrived in.
    pub fn from_weights(mut weights: Vec<(TermId, f32)>) -> Self {
        weights.sort_unstable_by_key(|&(id, _)| id);
        let norm = weights
            .iter()
            .map(|&(_, weight)| weight * weight)
            .sum::<f32>()
            .sqrt();
        WeightedVector { weights, norm }
    }

    /// The empty vector.
    pub fn empty() -> Self {
        WeightedVector {
            weights: Vec::new(),
            norm: 0.0,
        }
    }

    /// The weight pairs, ascending by term id.
    pub fn weights(&self) -> &[(TermId, f32)] {
        &self.weights
    }

    /// The cached Euclidean norm.
    pub fn norm(&self) -> f32 {
        self.norm
    }

    /// Number of non-zero terms.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check if the vector has no terms.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Check if the vector has no magnitude.
    pub fn is_zero(&self) -> bool {
        self.norm == 0.0
    }

    /// Dot product with another vector, merging the sorted pairs.
    pub fn dot(&self, other: &WeightedVector) -> f32 {
        let mut sum = 0.0;
        let mut left = self.weights.iter().peekable();
        let mut right = other.weights.iter().peekable();

        while let (Some(&&(left_id, left_weight)), Some(&&(right_id, right_weight))) =
            (left.peek(), right.peek())
        {
            match left_id.cmp(&right_id) {
                std::cmp::Ordering::Less => {
                    left.next();
                }
                std::cmp::Ordering::Greater => {
                    right.next();
                }
                std::cmp::Ordering::Equal => {
                    sum += left_weight * right_weight;
                    left.next();
                    right.next();
                }
            }
        }

        sum
    }

    /// Cosine similarity with another vector.
    ///
    /// A vector with no magnitude is similar to nothing: the result is
    /// 0 rather than a division by zero.
    pub fn cosine(&self, other: &WeightedVector) -> f32 {
        let norm_product = self.norm * other.norm;
        if norm_product == 0.0 {
            return 0.0;
        }
        self.dot(other) / norm_product
    }
}
