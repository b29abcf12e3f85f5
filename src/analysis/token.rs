//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows through the analysis pipeline: the
//! tokenizer emits one per word, and filters drop or rewrite them. Position
//! reflects the token's place in the stream as tokenized, so downstream
//! consumers see a deterministic order even after filters remove entries.
//!
//! # Examples
//!
//! ```
//! use sapor::analysis::token::Token;
//!
//! let token = Token::new("paella", 0);
//! assert_eq!(token.text, "paella");
//! assert_eq!(token.position, 0);
//! ```

use std::fmt;

/// A single unit of text produced by tokenization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The text content of the token.
    pub text: String,

    /// The position of the token in the original token stream (0-based).
    pub position: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }

    /// Return this token with its text replaced, keeping the position.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }

    /// Check if the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.text, self.position)
    }
}

/// A stream of tokens, as produced by tokenizers and transformed by filters.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 3);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 3);
        assert!(!token.is_empty());
    }

    #[test]
    fn test_token_with_text() {
        let token = Token::new("Running", 1).with_text("run");
        assert_eq!(token.text, "run");
        assert_eq!(token.position, 1);
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("rice", 2);
        assert_eq!(token.to_string(), "rice@2");
    }

    #[test]
    fn test_empty_token() {
        let token = Token::new("", 0);
        assert!(token.is_empty());
    }
}
