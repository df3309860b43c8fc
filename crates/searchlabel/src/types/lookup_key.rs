use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// The namespace a [`LookupKey`] lives under.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum KeyScope {
    /// The search-label namespace, serialized as `ransack`.
    Ransack,
    /// A model i18n scope such as `activerecord` or `mongoid`.
    Model(String),
    /// No scope qualifier; serialized without a leading separator.
    Relative,
}

/// A structured dictionary key.
///
/// Keys are built from a scope and a list of segments and only become a dotted
/// string when they reach a [`LookupService`](crate::LookupService), so key
/// construction can be inspected and tested without string parsing.
///
/// # Example
///
/// ```
/// use searchlabel::{KeyScope, LookupKey};
///
/// let key = LookupKey::ransack(["attributes", "person", "name"]);
/// assert_eq!(key.to_string(), "ransack.attributes.person.name");
///
/// let key = LookupKey::relative(["attributes", "name"]);
/// assert_eq!(key.scope(), &KeyScope::Relative);
/// assert_eq!(key.to_string(), "attributes.name");
/// ```
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct LookupKey {
    scope: KeyScope,
    segments: Vec<String>,
}

impl LookupKey {
    /// Create a key from a scope and its segments.
    pub fn new<I, S>(scope: KeyScope, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            scope,
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// A key under the `ransack` namespace.
    pub fn ransack<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(KeyScope::Ransack, segments)
    }

    /// A key under a model i18n scope.
    pub fn model_scope<I, S>(scope: impl Into<String>, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(KeyScope::Model(scope.into()), segments)
    }

    /// A key with no scope qualifier.
    pub fn relative<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(KeyScope::Relative, segments)
    }

    pub fn scope(&self) -> &KeyScope {
        &self.scope
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl Display for LookupKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut needs_separator = match &self.scope {
            KeyScope::Ransack => {
                f.write_str("ransack")?;
                true
            }
            KeyScope::Model(scope) if !scope.is_empty() => {
                f.write_str(scope)?;
                true
            }
            KeyScope::Model(_) | KeyScope::Relative => false,
        };
        for segment in self.segments.iter().filter(|s| !s.is_empty()) {
            if needs_separator {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
            needs_separator = true;
        }
        Ok(())
    }
}
