//! Compound search name parsing.

use winnow::combinator::{alt, not, preceded, repeat, separated};
use winnow::prelude::*;
use winnow::token::any;

use super::predicate::PredicateCatalog;
use crate::types::Combinator;

/// A compound search name broken into its parts.
///
/// # Example
///
/// ```
/// use searchlabel::Combinator;
/// use searchlabel::parser::{ParsedExpression, PredicateCatalog};
///
/// let parsed = ParsedExpression::parse("name_or_email_cont", &PredicateCatalog::default());
/// assert_eq!(parsed.tokens, vec!["name", "email"]);
/// assert_eq!(parsed.combinator, Combinator::Or);
/// assert_eq!(parsed.predicate.as_deref(), Some("cont"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExpression {
    /// Attribute tokens in order of appearance; never empty.
    pub tokens: Vec<String>,
    pub combinator: Combinator,
    pub predicate: Option<String>,
}

impl ParsedExpression {
    /// Strip a registered predicate suffix, then split the rest into tokens.
    pub fn parse(name: &str, predicates: &PredicateCatalog) -> Self {
        let (predicate, remainder) = predicates.detect(name);
        let (tokens, combinator) = parse_attribute_names(remainder);
        Self {
            tokens,
            combinator,
            predicate: predicate.map(str::to_string),
        }
    }
}

/// Split an attribute expression on `_and_` / `_or_`.
///
/// Empty fragments are dropped; when nothing else is left the whole input is
/// the single token. The combinator is [`Combinator::And`] whenever `_and_`
/// occurs anywhere, so a mixed expression joins with "and".
pub fn parse_attribute_names(remainder: &str) -> (Vec<String>, Combinator) {
    let combinator = if remainder.contains("_and_") {
        Combinator::And
    } else {
        Combinator::Or
    };

    let mut input = remainder;
    let fragments = attribute_fragments(&mut input).unwrap_or_default();
    let mut tokens: Vec<String> = fragments
        .into_iter()
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect();
    if tokens.is_empty() {
        tokens.push(remainder.to_string());
    }

    (tokens, combinator)
}

fn attribute_fragments<'i>(input: &mut &'i str) -> ModalResult<Vec<&'i str>> {
    separated(1.., fragment, separator).parse_next(input)
}

/// Everything up to the next separator.
fn fragment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    repeat::<_, _, (), _, _>(0.., preceded(not(separator), any))
        .take()
        .parse_next(input)
}

fn separator(input: &mut &str) -> ModalResult<Combinator> {
    alt(("_and_".value(Combinator::And), "_or_".value(Combinator::Or))).parse_next(input)
}
