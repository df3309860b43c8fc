//! Error types for schema loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while loading or validating a [`Schema`](super::Schema).
#[derive(Debug, Error)]
pub enum SchemaError {
    /// File I/O error when reading a schema file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The schema document is not valid JSON or has the wrong shape.
    #[error("invalid schema '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A model name was declared twice.
    #[error("model '{name}' is declared more than once")]
    DuplicateModel { name: String },

    /// A model name was referenced but never declared.
    #[error("unknown model '{name}'")]
    UnknownModel { name: String },

    /// A parent reference points at an undeclared model.
    #[error("model '{model}' has unknown parent '{parent}'")]
    UnknownParent { model: String, parent: String },

    /// An association points at an undeclared model.
    #[error("association '{model}.{association}' targets unknown model '{target}'")]
    UnknownAssociationTarget {
        model: String,
        association: String,
        target: String,
    },

    /// Following parent references loops back to a model already visited.
    #[error("parent chain of '{model}' is cyclic: {}", chain.join(" -> "))]
    ParentCycle { model: String, chain: Vec<String> },
}
