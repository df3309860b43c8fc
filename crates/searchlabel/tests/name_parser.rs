//! Integration tests for compound search name parsing.

use searchlabel::Combinator;
use searchlabel::parser::{ParsedExpression, PredicateCatalog, parse_attribute_names};

fn parse(name: &str) -> ParsedExpression {
    ParsedExpression::parse(name, &PredicateCatalog::default())
}

// =============================================================================
// Predicate detection
// =============================================================================

#[test]
fn detects_simple_predicate() {
    let parsed = parse("email_cont");
    assert_eq!(parsed.tokens, vec!["email"]);
    assert_eq!(parsed.predicate.as_deref(), Some("cont"));
}

#[test]
fn no_predicate_keeps_whole_name() {
    let parsed = parse("email");
    assert_eq!(parsed.tokens, vec!["email"]);
    assert_eq!(parsed.predicate, None);
}

#[test]
fn negated_predicate_wins_over_its_plain_form() {
    assert_eq!(parse("name_not_eq").predicate.as_deref(), Some("not_eq"));
    assert_eq!(parse("name_not_cont").predicate.as_deref(), Some("not_cont"));
    assert_eq!(parse("name_not_in").predicate.as_deref(), Some("not_in"));
}

#[test]
fn compound_predicate_wins_over_its_suffix() {
    let parsed = parse("name_cont_any");
    assert_eq!(parsed.predicate.as_deref(), Some("cont_any"));
    assert_eq!(parsed.tokens, vec!["name"]);

    let parsed = parse("name_not_eq_all");
    assert_eq!(parsed.predicate.as_deref(), Some("not_eq_all"));
    assert_eq!(parsed.tokens, vec!["name"]);
}

#[test]
fn predicate_must_follow_an_underscore() {
    // "lteq" ends with "eq" but is its own predicate.
    assert_eq!(parse("age_lteq").predicate.as_deref(), Some("lteq"));
    assert_eq!(parse("freq").predicate, None);
}

#[test]
fn bare_predicate_name_is_not_a_suffix() {
    let parsed = parse("cont");
    assert_eq!(parsed.predicate, None);
    assert_eq!(parsed.tokens, vec!["cont"]);
}

#[test]
fn only_one_predicate_is_stripped() {
    let parsed = parse("name_eq_eq");
    assert_eq!(parsed.predicate.as_deref(), Some("eq"));
    assert_eq!(parsed.tokens, vec!["name_eq"]);
}

#[test]
fn detection_is_idempotent_on_the_remainder() {
    let catalog = PredicateCatalog::default();
    let (_, remainder) = catalog.detect("author_name_start");
    assert_eq!(remainder, "author_name");
    assert_eq!(catalog.detect(remainder), (None, "author_name"));
}

#[test]
fn empty_catalog_detects_nothing() {
    let parsed = ParsedExpression::parse("email_cont", &PredicateCatalog::empty());
    assert_eq!(parsed.predicate, None);
    assert_eq!(parsed.tokens, vec!["email_cont"]);
}

#[test]
fn custom_predicate_registered_last() {
    let mut catalog = PredicateCatalog::default();
    catalog.register("cont_ci");
    let parsed = ParsedExpression::parse("name_cont_ci", &catalog);
    assert_eq!(parsed.predicate.as_deref(), Some("cont_ci"));
}

#[test]
fn register_first_takes_precedence() {
    let mut catalog = PredicateCatalog::empty();
    catalog.register("eq").register_first("not_eq");
    assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["not_eq", "eq"]);
    assert_eq!(catalog.detect("name_not_eq"), (Some("not_eq"), "name"));
}

#[test]
fn register_keeps_existing_position() {
    let mut catalog = PredicateCatalog::empty();
    catalog.register("eq").register("lt").register("eq");
    assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["eq", "lt"]);
}

// =============================================================================
// Attribute splitting
// =============================================================================

#[test]
fn or_separated_names() {
    let parsed = parse("name_or_email_cont");
    assert_eq!(parsed.tokens, vec!["name", "email"]);
    assert_eq!(parsed.combinator, Combinator::Or);
}

#[test]
fn and_separated_names() {
    let parsed = parse("first_name_and_last_name_eq");
    assert_eq!(parsed.tokens, vec!["first_name", "last_name"]);
    assert_eq!(parsed.combinator, Combinator::And);
}

#[test]
fn mixed_separators_join_with_and() {
    let (tokens, combinator) = parse_attribute_names("name_or_email_and_phone");
    assert_eq!(tokens, vec!["name", "email", "phone"]);
    assert_eq!(combinator, Combinator::And);
}

#[test]
fn association_tokens_keep_their_underscores() {
    let parsed = parse("articles_title_or_comments_body_cont");
    assert_eq!(parsed.tokens, vec!["articles_title", "comments_body"]);
}

#[test]
fn leading_separator_fragment_is_dropped() {
    let (tokens, combinator) = parse_attribute_names("_or_name");
    assert_eq!(tokens, vec!["name"]);
    assert_eq!(combinator, Combinator::Or);
}

#[test]
fn words_containing_or_are_not_split() {
    let (tokens, _) = parse_attribute_names("order_total");
    assert_eq!(tokens, vec!["order_total"]);

    let (tokens, _) = parse_attribute_names("vendor_name_or_color");
    assert_eq!(tokens, vec!["vendor_name", "color"]);
}
