//! Vocabulary construction and document-frequency statistics.

use ahash::{AHashMap, AHashSet};

use crate::analysis::token::Token;

/// Identifier assigned to a distinct term.
pub type TermId = u32;

/// The set of distinct terms observed in a corpus, with per-term
/// document frequencies and inverse document frequency weights.
///
/// Term ids are assigned in first-encounter order over the corpus, so
/// building twice from the same documents yields identical ids.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    /// Term text to term id.
    term_ids: AHashMap<String, TermId>,
    /// Term id to term text.
    terms: Vec<String>,
    /// Term id to the number of documents containing the term.
    doc_freqs: Vec<u32>,
    /// Term id to smoothed inverse document frequency.
    idfs: Vec<f32>,
}

impl Vocabulary {
    /// Build a vocabulary from per-document token sequences.
    pub fn build(documents: &[Vec<Token>]) -> Self {
        let mut vocabulary = Vocabulary::default();

        for tokens in documents {
            let mut seen: AHashSet<TermId> = AHashSet::new();
            for token in tokens {
                let id = vocabulary.intern(&token.text);
                if seen.insert(id) {
                    vocabulary.doc_freqs[id as usize] += 1;
                }
            }
        }

        let doc_count = documents.len();
        vocabulary.idfs = vocabulary
            .doc_freqs
            .iter()
            .map(|&df| smooth_idf(doc_count, df))
            .collect();

        vocabulary
    }

    /// Intern a term, assigning the next free id on first encounter.
    fn intern(&mut self, term: &str) -> TermId {
        if let Some(&id) = self.term_ids.get(term) {
            return id;
        }
        let id = self.terms.len() as TermId;
        self.term_ids.insert(term.to_string(), id);
        self.terms.push(term.to_string());
        self.doc_freqs.push(0);
        id
    }

    /// Look up the id of a term, if it was observed during the build.
    pub fn term_id(&self, term: &str) -> Option<TermId> {
        self.term_ids.get(term).copied()
    }

    /// The text of a term id.
    pub fn term(&self, id: TermId) -> &str {
        &self.terms[id as usize]
    }

    /// Number of documents the term occurs in.
    pub fn doc_freq(&self, id: TermId) -> u32 {
        self.doc_freqs[id as usize]
    }

    /// Inverse document frequency weight of the term.
    pub fn idf(&self, id: TermId) -> f32 {
        self.idfs[id as usize]
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over terms in id order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

/// Smoothed inverse document frequency: `ln((1 + n) / (1 + df)) + 1`.
///
/// The +1 in numerator and denominator behaves as if one extra document
/// contained every term, so no observed term ever gets a zero weight.
fn smooth_idf(doc_count: usize, doc_freq: u32) -> f32 {
    let n = (1 + doc_count) as f32;
    let df = (1 + doc_freq) as f32;
    (n / df).ln() + 1.0
}
