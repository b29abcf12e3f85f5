//! Error types for the Sapor library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`SaporError`] enum. Build-time problems (a malformed corpus, an invalid
//! analyzer pattern) surface here; query-time operations are infallible by
//! design and return plain values.
//!
//! # Examples
//!
//! ```
//! use sapor::error::{Result, SaporError};
//!
//! fn check_name(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(SaporError::corpus("record has an empty dish name"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_name("paella").is_ok());
//! assert!(check_name("").is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Sapor operations.
#[derive(Error, Debug)]
pub enum SaporError {
    /// I/O errors (reading a corpus file, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Corpus errors (missing columns, empty required fields)
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Analysis errors (tokenization, filtering)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SaporError {
    /// Create a corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        SaporError::Corpus(msg.into())
    }

    /// Create an analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SaporError::Analysis(msg.into())
    }
}

/// A specialized Result type for Sapor operations.
pub type Result<T> = std::result::Result<T, SaporError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SaporError::corpus("row 3 is missing a description");
        assert_eq!(
            err.to_string(),
            "Corpus error: row 3 is missing a description"
        );

        let err = SaporError::analysis("bad pattern");
        assert_eq!(err.to_string(), "Analysis error: bad pattern");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err: SaporError = io_err.into();
        assert!(matches!(err, SaporError::Io(_)));
    }
}
