//! The localized-string seam and its reference implementations.
//!
//! The resolver hands every fallback chain to a [`LookupService`]. This module
//! defines that trait and ships [`Dictionary`], an in-memory multi-language
//! backend, and [`RecordingLookup`], a decorator that keeps every request for
//! inspection.

mod dictionary;
mod error;
mod interpolate;
mod plural;
mod recording;

pub use dictionary::{Dictionary, Entry};
pub use error::LoadError;
pub use interpolate::interpolate;
pub use plural::plural_category;
pub use recording::{LookupRequest, RecordingLookup};

use crate::types::{FallbackChain, Interpolations};

/// A localized-string store that resolves fallback chains.
///
/// Implementations must try the candidates in order, treat a
/// [`Fallback::Literal`](crate::Fallback::Literal) as an unconditional match,
/// and substitute `%{name}` placeholders from `interpolations`. `count` is
/// passed through for plural-aware backends.
pub trait LookupService {
    fn resolve(
        &self,
        chain: &FallbackChain,
        interpolations: &Interpolations,
        count: Option<i64>,
    ) -> String;
}

impl<T: LookupService + ?Sized> LookupService for &T {
    fn resolve(
        &self,
        chain: &FallbackChain,
        interpolations: &Interpolations,
        count: Option<i64>,
    ) -> String {
        (**self).resolve(chain, interpolations, count)
    }
}
