//! # Sapor
//!
//! A compact tf-idf search engine for dish and cuisine records.
//!
//! Sapor indexes a small corpus of records (dish, country of origin,
//! description) and answers free-text queries with the most similar
//! records, tolerating misspelled queries through fuzzy correction
//! against a configurable candidate list.
//!
//! ## Features
//!
//! - English analysis pipeline: case folding, punctuation stripping,
//!   stopword removal, Porter stemming
//! - Tf-idf weighting with smoothed inverse document frequency
//! - Cosine ranking over inverted posting lists
//! - Whole-query fuzzy correction with a pluggable matcher
//!
//! ## Example
//!
//! ```
//! use sapor::corpus::Record;
//! use sapor::search::SearchEngine;
//!
//! # fn main() -> sapor::error::Result<()> {
//! let records = vec![
//!     Record::new(0, "Paella", "Spain", "A rice dish with saffron"),
//!     Record::new(1, "Gazpacho", "Spain", "A cold tomato soup"),
//! ];
//! let engine = SearchEngine::new(records)?;
//!
//! let hits = engine.search("saffron rice");
//! assert_eq!(hits[0].record_id, 0);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod index;
pub mod search;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
