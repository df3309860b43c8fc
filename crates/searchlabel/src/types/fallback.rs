use std::fmt::{Display, Formatter, Result as FmtResult};
use std::slice::Iter;

use serde::{Deserialize, Serialize};

use super::LookupKey;

/// One candidate in a fallback chain.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Fallback {
    /// A dictionary key, used only if the dictionary has an entry for it.
    Key(LookupKey),
    /// A template that always resolves; `%{name}` placeholders are
    /// interpolated.
    Literal(String),
}

impl Fallback {
    pub fn literal(text: impl Into<String>) -> Self {
        Fallback::Literal(text.into())
    }

    pub fn as_key(&self) -> Option<&LookupKey> {
        match self {
            Fallback::Key(key) => Some(key),
            Fallback::Literal(_) => None,
        }
    }
}

impl From<LookupKey> for Fallback {
    fn from(key: LookupKey) -> Self {
        Fallback::Key(key)
    }
}

impl Display for Fallback {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Fallback::Key(key) => write!(f, "{key}"),
            Fallback::Literal(text) => write!(f, "{text:?}"),
        }
    }
}

/// An ordered list of candidates; the first one that resolves wins.
///
/// # Example
///
/// ```
/// use searchlabel::{Fallback, FallbackChain, LookupKey};
///
/// let chain: FallbackChain = [
///     Fallback::from(LookupKey::ransack(["or"])),
///     Fallback::literal("or"),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(chain.to_string(), r#"ransack.or -> "or""#);
/// assert!(chain.ends_with_literal());
/// ```
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct FallbackChain(Vec<Fallback>);

impl FallbackChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, candidate: impl Into<Fallback>) {
        self.0.push(candidate.into());
    }

    pub fn iter(&self) -> Iter<'_, Fallback> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The dictionary keys in this chain, in order.
    pub fn keys(&self) -> impl Iterator<Item = &LookupKey> {
        self.0.iter().filter_map(Fallback::as_key)
    }

    /// Whether resolution of this chain is guaranteed to succeed.
    pub fn ends_with_literal(&self) -> bool {
        matches!(self.0.last(), Some(Fallback::Literal(_)))
    }
}

impl FromIterator<Fallback> for FallbackChain {
    fn from_iter<I: IntoIterator<Item = Fallback>>(candidates: I) -> Self {
        Self(candidates.into_iter().collect())
    }
}

impl From<Vec<Fallback>> for FallbackChain {
    fn from(candidates: Vec<Fallback>) -> Self {
        Self(candidates)
    }
}

impl<'a> IntoIterator for &'a FallbackChain {
    type Item = &'a Fallback;
    type IntoIter = Iter<'a, Fallback>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for FallbackChain {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (index, candidate) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{candidate}")?;
        }
        Ok(())
    }
}
