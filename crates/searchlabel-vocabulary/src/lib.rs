//! Shared search-label vocabulary tables used by both the runtime and the CLI.
//!
//! This crate centralizes the default predicate catalog and the bundled English
//! words so the suffix-matching rule and the registration order cannot drift
//! between consumers.

/// Default predicates in registration order, paired with their English words.
///
/// Detection picks the first registered predicate whose `_<name>` suffix
/// matches, so every compound form is registered before any shorter predicate
/// it ends with (`not_eq_any` before `eq_any` before `not_eq` before `eq`).
pub const DEFAULT_PREDICATES: &[(&str, &str)] = &[
    ("not_eq_any", "not equal to any"),
    ("not_eq_all", "not equal to all"),
    ("eq_any", "equals any"),
    ("eq_all", "equals all"),
    ("does_not_match_any", "doesn't match any"),
    ("does_not_match_all", "doesn't match all"),
    ("matches_any", "matches any"),
    ("matches_all", "matches all"),
    ("lteq_any", "less than or equal to any"),
    ("lteq_all", "less than or equal to all"),
    ("lt_any", "less than any"),
    ("lt_all", "less than all"),
    ("gteq_any", "greater than or equal to any"),
    ("gteq_all", "greater than or equal to all"),
    ("gt_any", "greater than any"),
    ("gt_all", "greater than all"),
    ("not_in_any", "not in any"),
    ("not_in_all", "not in all"),
    ("in_any", "in any"),
    ("in_all", "in all"),
    ("not_cont_any", "doesn't contain any"),
    ("not_cont_all", "doesn't contain all"),
    ("cont_any", "contains any"),
    ("cont_all", "contains all"),
    ("not_start_any", "doesn't start with any"),
    ("not_start_all", "doesn't start with all"),
    ("start_any", "starts with any"),
    ("start_all", "starts with all"),
    ("not_end_any", "doesn't end with any"),
    ("not_end_all", "doesn't end with all"),
    ("end_any", "ends with any"),
    ("end_all", "ends with all"),
    ("not_eq", "not equal to"),
    ("eq", "equals"),
    ("does_not_match", "doesn't match"),
    ("matches", "matches"),
    ("lteq", "less than or equal to"),
    ("lt", "less than"),
    ("gteq", "greater than or equal to"),
    ("gt", "greater than"),
    ("not_in", "not in"),
    ("in", "in"),
    ("not_cont", "doesn't contain"),
    ("cont", "contains"),
    ("not_start", "doesn't start with"),
    ("start", "starts with"),
    ("not_end", "doesn't end with"),
    ("end", "ends with"),
    ("not_true", "is not true"),
    ("true", "is true"),
    ("not_false", "is not false"),
    ("false", "is false"),
    ("present", "is present"),
    ("blank", "is blank"),
    ("not_null", "is not null"),
    ("null", "is null"),
];

/// Vocabulary words resolved under the flat `ransack.<word>` namespace.
pub const DEFAULT_WORDS: &[(&str, &str)] = &[
    ("search", "search"),
    ("predicate", "predicate"),
    ("and", "and"),
    ("or", "or"),
    ("any", "any"),
    ("all", "all"),
    ("combinator", "combinator"),
    ("attribute", "attribute"),
    ("value", "value"),
    ("condition", "condition"),
    ("sort", "sort"),
    ("asc", "ascending"),
    ("desc", "descending"),
];

/// Default predicate names in registration order.
pub fn default_predicate_names() -> impl Iterator<Item = &'static str> {
    DEFAULT_PREDICATES.iter().map(|(name, _)| *name)
}

/// The bundled English word for a default predicate.
pub fn english_predicate(name: &str) -> Option<&'static str> {
    lookup(DEFAULT_PREDICATES, name)
}

/// The bundled English word for a vocabulary word such as `and` or `asc`.
pub fn english_word(name: &str) -> Option<&'static str> {
    lookup(DEFAULT_WORDS, name)
}

/// Whether `name` ends with `_<predicate>`.
///
/// A name consisting of the predicate alone does not match: a predicate always
/// follows at least one attribute.
pub fn has_predicate_suffix(name: &str, predicate: &str) -> bool {
    if predicate.is_empty() || name.len() <= predicate.len() {
        return false;
    }
    name.ends_with(predicate) && name[..name.len() - predicate.len()].ends_with('_')
}

fn lookup(table: &'static [(&'static str, &'static str)], name: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, word)| *word)
}
