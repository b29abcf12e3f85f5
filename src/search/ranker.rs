//! Cosine ranking over the inverted postings.

use std::cmp::Ordering;

use crate::index::{TfIdfIndex, WeightedVector};

/// A document scored against a query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoredDoc {
    /// Index of the document in corpus order.
    pub doc: u32,
    /// Cosine similarity between the document and the query.
    pub score: f32,
}

/// Scores documents by cosine similarity and keeps the best few.
///
/// Only documents sharing at least one term with the query are ever
/// touched. Everything else keeps an implicit score of zero, which can
/// never clear the floor.
#[derive(Clone, Copy, Debug)]
pub struct SimilarityRanker {
    /// Scores must exceed this floor to be returned.
    min_similarity: f32,
    /// At most this many documents are returned.
    max_results: usize,
}

impl SimilarityRanker {
    /// Create a ranker with the given floor and result cap.
    pub fn new(min_similarity: f32, max_results: usize) -> Self {
        SimilarityRanker {
            min_similarity,
            max_results,
        }
    }

    /// The score floor.
    pub fn min_similarity(&self) -> f32 {
        self.min_similarity
    }

    /// The result cap.
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Rank the indexed documents against a query vector.
    ///
    /// Results come back in descending score order. Documents tying on
    /// score keep their corpus order, and a zero query vector matches
    /// nothing at all.
    pub fn rank(&self, index: &TfIdfIndex, query: &WeightedVector) -> Vec<ScoredDoc> {
        if query.is_zero() {
            return Vec::new();
        }

        // Accumulate dot products through the postings of the query's
        // terms only.
        let mut dots = vec![0.0f32; index.doc_count()];
        for &(term, weight) in query.weights() {
            for posting in index.postings(term) {
                dots[posting.doc as usize] += weight * posting.weight;
            }
        }

        let mut scored: Vec<ScoredDoc> = dots
            .iter()
            .enumerate()
            .filter_map(|(doc, &dot)| {
                if dot == 0.0 {
                    return None;
                }
                let doc = doc as u32;
                let norm_product = query.norm() * index.doc_vector(doc).norm();
                if norm_product == 0.0 {
                    return None;
                }
                let score = dot / norm_product;
                (score > self.min_similarity).then_some(ScoredDoc { doc, score })
            })
            .collect();

        // Stable sort keeps corpus order among equal scores.
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored.truncate(self.max_results);
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn tokens(words: &[&str]) -> Vec<Token> {
        words
            .iter()
            .enumerate()
            .map(|(position, word)| Token::new(*word, position))
            .collect()
    }

    fn sample_index() -> TfIdfIndex {
        TfIdfIndex::build(&[
            tokens(&["paella", "rice", "saffron"]),
            tokens(&["couscous", "semolina", "butter"]),
            tokens(&["rice", "pudding", "milk"]),
            tokens(&["saffron", "rice", "paella", "seafood"]),
        ])
    }

    #[test]
    fn test_rank_orders_by_score_descending() {
        let index = sample_index();
        let ranker = SimilarityRanker::new(0.0, 10);

        let query = index.vectorize(&tokens(&["paella", "saffron"]));
        let results = ranker.rank(&index, &query);

        assert!(!results.is_empty());
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        // Documents without "paella" or "saffron" are not scored.
        assert!(results.iter().all(|scored| scored.doc != 1));
        assert!(results.iter().all(|scored| scored.doc != 2));
    }

    #[test]
    fn test_identical_document_scores_highest() {
        let index = sample_index();
        let ranker = SimilarityRanker::new(0.0, 10);

        let query = index.vectorize(&tokens(&["couscous", "semolina", "butter"]));
        let results = ranker.rank(&index, &query);

        assert_eq!(results[0].doc, 1);
        assert!((results[0].score - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_zero_query_matches_nothing() {
        let index = sample_index();
        let ranker = SimilarityRanker::new(0.0, 10);

        let results = ranker.rank(&index, &WeightedVector::empty());
        assert!(results.is_empty());
    }

    #[test]
    fn test_floor_is_strict() {
        let index = sample_index();

        let query = index.vectorize(&tokens(&["rice"]));
        let permissive = SimilarityRanker::new(0.0, 10).rank(&index, &query);
        assert!(!permissive.is_empty());

        // A floor at the top score excludes even the best document.
        let top = permissive[0].score;
        let strict = SimilarityRanker::new(top, 10).rank(&index, &query);
        assert!(strict.iter().all(|scored| scored.score > top));
    }

    #[test]
    fn test_result_cap() {
        let index = sample_index();
        let ranker = SimilarityRanker::new(0.0, 2);

        let query = index.vectorize(&tokens(&["rice"]));
        let results = ranker.rank(&index, &query);

        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_ties_keep_corpus_order() {
        let index = TfIdfIndex::build(&[
            tokens(&["rice", "saffron"]),
            tokens(&["rice", "saffron"]),
            tokens(&["rice", "saffron"]),
        ]);
        let ranker = SimilarityRanker::new(0.0, 10);

        let query = index.vectorize(&tokens(&["rice"]));
        let results = ranker.rank(&index, &query);

        let docs: Vec<u32> = results.iter().map(|scored| scored.doc).collect();
        assert_eq!(docs, vec![0, 1, 2]);
    }
}
