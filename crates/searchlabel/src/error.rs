//! Error types for label resolution.

use thiserror::Error;

/// An error raised by a [`Translator`](crate::Translator) entry point.
///
/// Label lookups themselves never fail: every fallback chain ends in a
/// literal. The only error is a caller omitting the type context that scopes
/// attribute and association keys.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    /// `attribute` or `association` was called without a context.
    #[error("a context is required to translate {subject}")]
    MissingContext { subject: &'static str },
}
