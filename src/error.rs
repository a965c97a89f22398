//! Error handling for BondGrid-RS
//!
//! The table engine itself never fails: bad input is clamped or coerced.
//! Errors only come from the edges, i.e. loading configuration and
//! reading datasets from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for BondGrid-RS operations
#[derive(Error, Debug)]
pub enum BondGridError {
    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors raised by a record source
    #[error("Source error: {0}")]
    Source(String),

    /// A dataset file could not be decoded
    #[error("Failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<BondGridError>,
    },
}

impl BondGridError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        BondGridError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<serde_json::Error> for BondGridError {
    fn from(err: serde_json::Error) -> Self {
        BondGridError::Serialization(err.to_string())
    }
}

/// Result type alias for BondGrid-RS operations
pub type Result<T> = std::result::Result<T, BondGridError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| BondGridError::Io(e).with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| BondGridError::Io(e).with_context(f()))
    }
}
