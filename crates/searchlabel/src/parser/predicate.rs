//! Registered predicate suffixes.

use searchlabel_vocabulary::{default_predicate_names, has_predicate_suffix};

/// An ordered catalog of predicate names.
///
/// Detection returns the first registered predicate whose `_<name>` suffix
/// matches, so registration order decides between overlapping names such as
/// `not_eq` and `eq`. The default catalog is seeded from
/// [`searchlabel_vocabulary::DEFAULT_PREDICATES`].
///
/// # Example
///
/// ```
/// use searchlabel::parser::PredicateCatalog;
///
/// let catalog = PredicateCatalog::default();
/// assert_eq!(catalog.detect("name_not_eq"), (Some("not_eq"), "name"));
/// assert_eq!(catalog.detect("name"), (None, "name"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateCatalog {
    names: Vec<String>,
}

impl Default for PredicateCatalog {
    fn default() -> Self {
        Self {
            names: default_predicate_names().map(str::to_string).collect(),
        }
    }
}

impl PredicateCatalog {
    /// Create a catalog seeded with the default predicates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with no registered predicates.
    pub fn empty() -> Self {
        Self { names: Vec::new() }
    }

    /// Register a predicate after every existing one.
    ///
    /// Re-registering a known name keeps its original position.
    pub fn register(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        if !name.is_empty() && !self.contains(&name) {
            self.names.push(name);
        }
        self
    }

    /// Register a predicate ahead of every existing one.
    ///
    /// Use this for a custom predicate that ends with a registered name, such
    /// as `not_cont_ci` over `cont_ci`.
    pub fn register_first(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        if name.is_empty() {
            return self;
        }
        self.names.retain(|existing| *existing != name);
        self.names.insert(0, name);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    /// Registered names in detection order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Find the predicate a compound name ends with and strip it.
    ///
    /// Exactly one trailing `_<predicate>` is removed. Without a match the
    /// name is returned unchanged.
    pub fn detect<'n>(&self, name: &'n str) -> (Option<&str>, &'n str) {
        let Some(predicate) = self
            .names
            .iter()
            .find(|predicate| has_predicate_suffix(name, predicate))
        else {
            return (None, name);
        };
        let remainder = &name[..name.len() - predicate.len() - 1];
        (Some(predicate.as_str()), remainder)
    }
}
