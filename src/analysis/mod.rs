//! Text analysis module for Sapor.
//!
//! Everything needed to turn raw record or query text into normalized
//! tokens: char filters, tokenizers, token filters, stemming, and the
//! analyzers that chain them together.

pub mod analyzer;
pub mod char_filter;
pub mod stemmer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use char_filter::*;
pub use stemmer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
