//! Error types for dictionary loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while loading a [`Dictionary`](super::Dictionary).
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a dictionary file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON.
    #[error("invalid JSON in '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document has no top-level entry for the language being loaded.
    #[error("'{path}' has no top-level '{language}' object")]
    MissingLanguage { path: PathBuf, language: String },

    /// A value that cannot be used as a label.
    #[error("{path}: entry '{key}' {message}")]
    InvalidEntry {
        path: PathBuf,
        key: String,
        message: String,
    },

    /// Attempted to reload a language that was loaded from a string.
    #[error("cannot reload '{language}': was loaded from string, not file")]
    NoPathForReload { language: String },
}
