//! Spelling correction for user queries.
//!
//! Queries are corrected as whole strings against a configured
//! candidate list before analysis, so a close misspelling of a known
//! domain term still reaches the index as that term.

pub mod corrector;
pub mod levenshtein;

// Re-export commonly used types
pub use corrector::{
    DEFAULT_SCORE_THRESHOLD, FuzzyMatch, FuzzyMatcher, QueryCorrector, RatioMatcher,
};
pub use levenshtein::{fuzzy_ratio, indel_distance, levenshtein_distance};
