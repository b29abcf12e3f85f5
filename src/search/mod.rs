//! The search engine: correction, analysis, vectorization, ranking.
//!
//! [`SearchEngine`] owns the corpus records, the analyzer, the query
//! corrector, and the tf-idf index. It is built once and then queried
//! through `&self`, so sharing it across threads needs no locks.

pub mod ranker;

pub use ranker::{ScoredDoc, SimilarityRanker};

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer};
use crate::analysis::token::Token;
use crate::corpus::{Document, Record};
use crate::error::Result;
use crate::index::TfIdfIndex;
use crate::spelling::corrector::QueryCorrector;

/// Configuration for search operations.
#[derive(Clone, Copy, Debug)]
pub struct SearchConfig {
    /// Scores must exceed this floor to be returned.
    pub min_similarity: f32,
    /// Maximum number of hits to return.
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            min_similarity: 0.1,
            max_results: 3,
        }
    }
}

/// One search hit: a record id and its similarity to the query.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Identifier of the matching record.
    pub record_id: u64,
    /// Cosine similarity between the record and the query.
    pub score: f32,
}

/// A retrieval engine over a fixed corpus of records.
pub struct SearchEngine {
    records: Vec<Record>,
    analyzer: Box<dyn Analyzer>,
    corrector: QueryCorrector,
    index: TfIdfIndex,
    ranker: SimilarityRanker,
}

impl SearchEngine {
    /// Build an engine with the default configuration and correction
    /// disabled.
    pub fn new(records: Vec<Record>) -> Result<Self> {
        SearchEngine::with_corrector(records, SearchConfig::default(), QueryCorrector::disabled())
    }

    /// Build an engine with the given configuration and correction
    /// disabled.
    pub fn with_config(records: Vec<Record>, config: SearchConfig) -> Result<Self> {
        SearchEngine::with_corrector(records, config, QueryCorrector::disabled())
    }

    /// Build an engine with a query corrector.
    ///
    /// Every record is validated, analyzed, and indexed up front.
    /// Queries afterwards only read.
    pub fn with_corrector(
        records: Vec<Record>,
        config: SearchConfig,
        corrector: QueryCorrector,
    ) -> Result<Self> {
        let analyzer: Box<dyn Analyzer> = Box::new(EnglishAnalyzer::new()?);

        let mut token_docs = Vec::with_capacity(records.len());
        for record in &records {
            record.validate()?;
            let document = Document::for_record(record);
            let tokens: Vec<Token> = analyzer.analyze(&document.text)?.collect();
            token_docs.push(tokens);
        }

        let index = TfIdfIndex::build(&token_docs);
        let ranker = SimilarityRanker::new(config.min_similarity, config.max_results);

        Ok(SearchEngine {
            records,
            analyzer,
            corrector,
            index,
            ranker,
        })
    }

    /// Run a query against the corpus.
    ///
    /// The raw query is corrected, analyzed with the same pipeline the
    /// documents went through, vectorized, and ranked. Degenerate input
    /// yields an empty hit list, never an error: an empty query, a
    /// query of nothing but stop words, or a query whose terms never
    /// occur in the corpus all return no hits.
    pub fn search(&self, raw_query: &str) -> Vec<SearchHit> {
        let corrected = self.corrector.correct(raw_query);

        let Ok(stream) = self.analyzer.analyze(&corrected) else {
            return Vec::new();
        };
        let tokens: Vec<Token> = stream.collect();
        let query_vector = self.index.vectorize(&tokens);

        self.ranker
            .rank(&self.index, &query_vector)
            .into_iter()
            .map(|scored| SearchHit {
                record_id: self.records[scored.doc as usize].id,
                score: scored.score,
            })
            .collect()
    }

    /// Look up a record by its identifier.
    pub fn record(&self, record_id: u64) -> Option<&Record> {
        self.records.iter().find(|record| record.id == record_id)
    }

    /// All records, in corpus order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The tf-idf index built over the corpus.
    pub fn index(&self) -> &TfIdfIndex {
        &self.index
    }

    /// The analyzer shared by documents and queries.
    pub fn analyzer(&self) -> &dyn Analyzer {
        self.analyzer.as_ref()
    }

    /// The query corrector.
    pub fn corrector(&self) -> &QueryCorrector {
        &self.corrector
    }
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("records", &self.records.len())
            .field("analyzer", &self.analyzer.name())
            .field("corrector", &self.corrector)
            .field("terms", &self.index.vocabulary().len())
            .finish()
    }
}
