//! Error types and error handling for pmlens.
//!
//! This module defines the error type used throughout the
//! application. Errors fall into two groups: batch-level errors that
//! stop an analysis run, and per-document errors that only cause the
//! affected document to be skipped.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pmlens operations
pub type Result<T> = std::result::Result<T, PmlensError>;

/// Main error type for pmlens
#[derive(Error, Debug)]
pub enum PmlensError {
    #[error("Source directory not found: {}", .0.display())]
    MissingSourceDirectory(PathBuf),

    #[error("Failed to read document {path}: {reason}")]
    DocumentReadFailure { path: String, reason: String },

    #[error("No text extracted from document: {0}")]
    EmptyExtraction(String),

    #[error("Failed to persist analysis results: {0}")]
    PersistenceFailure(String),

    #[error("Analysis results not found: {0}")]
    ResultsNotFound(String),

    #[error("Unknown topic: {0}")]
    UnknownTopic(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl PmlensError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error only affects a single document.
    ///
    /// Such errors are logged and the document is skipped; the batch
    /// continues.
    pub fn is_document_skip(&self) -> bool {
        matches!(
            self,
            PmlensError::DocumentReadFailure { .. } | PmlensError::EmptyExtraction(_)
        )
    }

    /// Check if this error aborts an analysis run
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            PmlensError::MissingSourceDirectory(_)
                | PmlensError::PersistenceFailure(_)
                | PmlensError::ConfigError(_)
        )
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PmlensError::MissingSourceDirectory(_)
                | PmlensError::ResultsNotFound(_)
                | PmlensError::UnknownTopic(_)
        )
    }
}
