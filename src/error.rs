//! Error types for the morphodict library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`MorphodictError`] enum. Lookups that are expected to miss on ordinary
//! lexicon data (lemma extraction, relabelling, affix search) do not use this
//! type at all: they return `Option` or an empty `Vec` instead.
//!
//! # Examples
//!
//! ```
//! use morphodict::error::{MorphodictError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(MorphodictError::parse("not+a+valid+analysis"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for morphodict operations.
#[derive(Error, Debug)]
pub enum MorphodictError {
    /// I/O errors (reading label tables, wordform lists, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The analysis string has no recognizable lexical category marker.
    #[error("analysis not parsable: {0}")]
    Parse(String),

    /// Relabelling table could not be loaded
    #[error("Relabelling error: {0}")]
    Relabelling(String),

    /// Invalid configuration or label setting
    #[error("Configuration error: {0}")]
    Config(String),

    /// Wordform list could not be read
    #[error("Wordform list error: {0}")]
    Wordforms(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Tab-separated input errors
    #[error("TSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with MorphodictError.
pub type Result<T> = std::result::Result<T, MorphodictError>;

impl MorphodictError {
    /// Create a new parse error for the given analysis string.
    pub fn parse<S: Into<String>>(analysis: S) -> Self {
        MorphodictError::Parse(analysis.into())
    }

    /// Create a new relabelling error.
    pub fn relabelling<S: Into<String>>(msg: S) -> Self {
        MorphodictError::Relabelling(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        MorphodictError::Config(msg.into())
    }

    /// Create a new wordform list error.
    pub fn wordforms<S: Into<String>>(msg: S) -> Self {
        MorphodictError::Wordforms(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        MorphodictError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        MorphodictError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Whether this error comes from an unparsable analysis string.
    pub fn is_parse(&self) -> bool {
        matches!(self, MorphodictError::Parse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = MorphodictError::parse("not+a+valid+analysis");
        assert_eq!(
            error.to_string(),
            "analysis not parsable: not+a+valid+analysis"
        );
        assert!(error.is_parse());

        let error = MorphodictError::relabelling("missing table");
        assert_eq!(error.to_string(), "Relabelling error: missing table");
        assert!(!error.is_parse());

        let error = MorphodictError::config("bad setting");
        assert_eq!(error.to_string(), "Configuration error: bad setting");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = MorphodictError::from(io_error);

        match error {
            MorphodictError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
