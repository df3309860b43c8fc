//! A [`LookupService`] decorator that records every request.

use std::mem;
use std::sync::{Mutex, PoisonError};

use super::LookupService;
use crate::types::{FallbackChain, Interpolations};

/// One resolved request, in the order it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub chain: FallbackChain,
    pub interpolations: Interpolations,
    pub count: Option<i64>,
    pub result: String,
}

/// Forwards to an inner [`LookupService`] and keeps every request.
///
/// Inner lookups (attribute names, predicate words) are recorded before the
/// outer lookup that interpolates them.
///
/// # Example
///
/// ```
/// use searchlabel::{Dictionary, RecordingLookup, Translator};
///
/// let translator = Translator::new(RecordingLookup::new(Dictionary::default()));
/// assert_eq!(translator.predicate("cont"), "contains");
///
/// let requests = translator.lookup().requests();
/// assert_eq!(requests.len(), 1);
/// assert_eq!(requests[0].chain.to_string(), r#"ransack.predicates.cont -> "cont""#);
/// ```
#[derive(Debug, Default)]
pub struct RecordingLookup<L> {
    inner: L,
    requests: Mutex<Vec<LookupRequest>>,
}

impl<L> RecordingLookup<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    /// A copy of every request recorded so far.
    pub fn requests(&self) -> Vec<LookupRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain the recorded requests.
    pub fn take_requests(&self) -> Vec<LookupRequest> {
        mem::take(
            &mut *self
                .requests
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }
}

impl<L: LookupService> LookupService for RecordingLookup<L> {
    fn resolve(
        &self,
        chain: &FallbackChain,
        interpolations: &Interpolations,
        count: Option<i64>,
    ) -> String {
        let result = self.inner.resolve(chain, interpolations, count);
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(LookupRequest {
                chain: chain.clone(),
                interpolations: interpolations.clone(),
                count,
                result: result.clone(),
            });
        result
    }
}
