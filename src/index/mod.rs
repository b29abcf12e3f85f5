//! Term-weighting index: vocabulary, document vectors, and postings.
//!
//! The index is built once from the analyzed corpus and never mutated.
//! Every document becomes a sparse tf-idf vector, and an inverted
//! posting list per term records which documents carry it, so scoring a
//! query only touches documents sharing at least one term with it.

pub mod vector;
pub mod vocabulary;

pub use vector::WeightedVector;
pub use vocabulary::{TermId, Vocabulary};

use ahash::AHashMap;

use crate::analysis::token::Token;

/// One document's weight for a term.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Posting {
    /// Index of the document in corpus order.
    pub doc: u32,
    /// The document's tf-idf weight for the term.
    pub weight: f32,
}

/// The corpus-wide tf-idf index.
#[derive(Clone, Debug, Default)]
pub struct TfIdfIndex {
    vocabulary: Vocabulary,
    doc_vectors: Vec<WeightedVector>,
    /// Term id to the documents carrying that term, in document order.
    postings: Vec<Vec<Posting>>,
}

impl TfIdfIndex {
    /// Build an index from per-document token sequences.
    ///
    /// Documents are vectorized with the same weighting later applied
    /// to queries: raw term counts scaled by smoothed inverse document
    /// frequency.
    pub fn build(documents: &[Vec<Token>]) -> Self {
        let vocabulary = Vocabulary::build(documents);
        let mut doc_vectors = Vec::with_capacity(documents.len());
        let mut postings: Vec<Vec<Posting>> = vec![Vec::new(); vocabulary.len()];

        for (doc, tokens) in documents.iter().enumerate() {
            let vector = project(&vocabulary, tokens);
            for &(term, weight) in vector.weights() {
                postings[term as usize].push(Posting {
                    doc: doc as u32,
                    weight,
                });
            }
            doc_vectors.push(vector);
        }

        TfIdfIndex {
            vocabulary,
            doc_vectors,
            postings,
        }
    }

    /// Project a token sequence into this index's vector space.
    ///
    /// Terms absent from the vocabulary are dropped, never added: the
    /// corpus alone defines the space.
    pub fn vectorize(&self, tokens: &[Token]) -> WeightedVector {
        project(&self.vocabulary, tokens)
    }

    /// The vocabulary the index was built over.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The vector of one document.
    pub fn doc_vector(&self, doc: u32) -> &WeightedVector {
        &self.doc_vectors[doc as usize]
    }

    /// The posting list of one term.
    pub fn postings(&self, term: TermId) -> &[Posting] {
        &self.postings[term as usize]
    }

    /// Number of documents in the index.
    pub fn doc_count(&self) -> usize {
        self.doc_vectors.len()
    }
}

/// Count terms known to the vocabulary and scale the counts by idf.
fn project(vocabulary: &Vocabulary, tokens: &[Token]) -> WeightedVector {
    let mut counts: AHashMap<TermId, u32> = AHashMap::new();
    for token in tokens {
        if let Some(id) = vocabulary.term_id(&token.text) {
            *counts.entry(id).or_insert(0) += 1;
        }
    }

    let weights = counts
        .into_iter()
        .map(|(id, count)| (id, count as f32 * vocabulary.idf(id)))
        .collect();
    WeightedVector::from_weights(weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<Token> {
        words
            .iter()
            .enumerate()
            .map(|(position, word)| Token::new(*word, position))
            .collect()
    }

    fn sample_index() -> TfIdfIndex {
        TfIdfIndex::build(&[
            tokens(&["paella", "rice", "saffron", "rice"]),
            tokens(&["couscous", "semolina"]),
            tokens(&["rice", "pudding"]),
        ])
    }

    #[test]
    fn test_build_assigns_one_vector_per_document() {
        let index = sample_index();

        assert_eq!(index.doc_count(), 3);
        assert_eq!(index.vocabulary().len(), 6);
        assert_eq!(index.doc_vector(0).len(), 3);
        assert_eq!(index.doc_vector(1).len(), 2);
    }

    #[test]
    fn test_repeated_terms_raise_weight() {
        let index = sample_index();
        let rice = index.vocabulary().term_id("rice").unwrap();
        let idf = index.vocabulary().idf(rice);

        let weight_in_first = index
            .doc_vector(0)
            .weights()
            .iter()
            .find(|&&(id, _)| id == rice)
            .map(|&(_, weight)| weight)
            .unwrap();

        // "rice" occurs twice in the first document.
        assert!((weight_in_first - 2.0 * idf).abs() < 1e-6);
    }

    #[test]
    fn test_postings_list_documents_in_order() {
        let index = sample_index();
        let rice = index.vocabulary().term_id("rice").unwrap();

        let docs: Vec<u32> = index.postings(rice).iter().map(|p| p.doc).collect();
        assert_eq!(docs, vec![0, 2]);

        let couscous = index.vocabulary().term_id("couscous").unwrap();
        let docs: Vec<u32> = index.postings(couscous).iter().map(|p| p.doc).collect();
        assert_eq!(docs, vec![1]);
    }

    #[test]
    fn test_postings_mirror_doc_vectors() {
        let index = sample_index();

        for doc in 0..index.doc_count() as u32 {
            for &(term, weight) in index.doc_vector(doc).weights() {
                let posting = index
                    .postings(term)
                    .iter()
                    .find(|p| p.doc == doc)
                    .expect("every vector entry has a posting");
                assert_eq!(posting.weight.to_bits(), weight.to_bits());
            }
        }
    }

    #[test]
    fn test_vectorize_drops_unknown_terms() {
        let index = sample_index();

        let vector = index.vectorize(&tokens(&["rice", "zanzibar"]));
        assert_eq!(vector.len(), 1);

        let vector = index.vectorize(&tokens(&["zanzibar"]));
        assert!(vector.is_zero());

        // The vocabulary is unchanged by queries.
        assert_eq!(index.vocabulary().term_id("zanzibar"), None);
    }

    #[test]
    fn test_vectorize_matches_document_weighting() {
        let index = sample_index();

        let query = index.vectorize(&tokens(&["couscous", "semolina"]));
        assert_eq!(query, index.doc_vector(1).clone());
    }

    #[test]
    fn test_rebuild_is_identical() {
        let documents = vec![
            tokens(&["paella", "rice", "saffron", "rice"]),
            tokens(&["couscous", "semolina"]),
            tokens(&["rice", "pudding"]),
        ];

        let first = TfIdfIndex::build(&documents);
        let second = TfIdfIndex::build(&documents);

        assert_eq!(first.doc_count(), second.doc_count());
        for doc in 0..first.doc_count() as u32 {
            assert_eq!(first.doc_vector(doc), second.doc_vector(doc));
            assert_eq!(
                first.doc_vector(doc).norm().to_bits(),
                second.doc_vector(doc).norm().to_bits()
            );
        }
        for term in 0..first.vocabulary().len() as TermId {
            assert_eq!(first.postings(term), second.postings(term));
        }
    }

    #[test]
    fn test_empty_corpus_builds_empty_index() {
        let index = TfIdfIndex::build(&[]);

        assert_eq!(index.doc_count(), 0);
        assert!(index.vocabulary().is_empty());
        assert!(index.vectorize(&tokens(&["rice"])).is_zero());
    }
}
