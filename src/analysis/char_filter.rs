//! Char filter implementations for text normalization.
//!
//! Char filters transform the raw text string before it reaches the
//! tokenizer. They run in the order they were added to the pipeline, and
//! they may merge words (removing a separator joins its neighbors) but
//! never reorder text.
//!
//! # Available Filters
//!
//! - [`LowercaseCharFilter`] - Case-folds the whole text
//! - [`PatternReplaceCharFilter`] - Regex-based replacement
//!
//! # Examples
//!
//! ```
//! use sapor::analysis::char_filter::{CharFilter, PatternReplaceCharFilter};
//!
//! let filter = PatternReplaceCharFilter::new(r"[^\w\s]", "").unwrap();
//! assert_eq!(filter.filter("tom yum, goong!"), "tom yum goong");
//! ```

use regex::Regex;

use crate::error::{Result, SaporError};

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text, returning the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

/// A char filter that case-folds the entire text to lowercase.
///
/// Runs before tokenization so that later character-class decisions (such
/// as punctuation stripping) see the lowercased form.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        input.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

/// A char filter that replaces regex pattern matches with a fixed string.
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    ///
    /// Returns an error if the pattern is not a valid regular expression.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)
                .map_err(|e| SaporError::analysis(format!("invalid pattern: {e}")))?,
            replacement: replacement.to_string(),
        })
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}
