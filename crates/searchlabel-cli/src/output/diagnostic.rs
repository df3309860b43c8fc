//! Miette diagnostics for dictionary and schema files.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::fs::read_to_string;
use std::path::Path;

use miette::{Diagnostic, NamedSource, Report, SourceSpan, miette};
use searchlabel::{LoadError, SchemaError};
use thiserror::Error;

/// A miette-compatible diagnostic for malformed JSON input.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid JSON: {message}")]
#[diagnostic(code(searchlabel::json))]
pub struct JsonDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl JsonDiagnostic {
    /// Create a diagnostic from a serde_json error with source context.
    pub fn new(path: &Path, content: &str, err: &serde_json::Error, help: Option<String>) -> Self {
        // Sum of (line_length + 1) for lines before the error line, plus column.
        let offset = content
            .lines()
            .take(err.line().saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + err.column().saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        JsonDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message: err.to_string(),
            help,
        }
    }
}

/// Report for a JSON error, with source context when the file is readable.
fn json_report(path: &Path, err: &serde_json::Error, help: &str) -> Report {
    match read_to_string(path) {
        Ok(content) => JsonDiagnostic::new(path, &content, err, Some(help.to_string())).into(),
        Err(_) => miette!(help = help.to_string(), "invalid JSON in '{}': {err}", path.display()),
    }
}

/// Turn a dictionary load error into a report.
pub fn load_error_report(err: LoadError) -> Report {
    match &err {
        LoadError::Json { path, source } => json_report(
            path,
            source,
            "dictionaries are JSON objects rooted at the language code",
        ),
        LoadError::MissingLanguage { language, .. } => miette!(
            help = format!("wrap the entries in a top-level \"{language}\" object"),
            "{err}"
        ),
        LoadError::Io { .. } | LoadError::InvalidEntry { .. } | LoadError::NoPathForReload { .. } => {
            miette!("{err}")
        }
    }
}

/// Turn a schema load error into a report.
pub fn schema_error_report(err: SchemaError) -> Report {
    match &err {
        SchemaError::Json { path, source } => json_report(
            path,
            source,
            "a schema is a JSON object with a \"models\" list",
        ),
        SchemaError::UnknownModel { .. } => {
            miette!(help = "--model must name a model declared in the schema", "{err}")
        }
        _ => miette!("{err}"),
    }
}
