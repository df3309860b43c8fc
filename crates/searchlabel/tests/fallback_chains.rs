//! Integration tests for fallback chain construction.
//!
//! Chains are compared through their display form, which lists every
//! candidate in order with literals quoted.

use insta::assert_snapshot;
use searchlabel::keys::{
    association_chain, attribute_chain, attribute_fallback_chain, attribute_name_chain,
    model_name_chain, predicate_chain, word_chain,
};
use searchlabel::{Fallback, KeyScope, LocalizationKey};

fn key(raw: &str) -> LocalizationKey {
    LocalizationKey::new(raw)
}

#[test]
fn word_chain_ends_with_the_word() {
    assert_snapshot!(word_chain("and"), @r#"ransack.and -> "and""#);
}

#[test]
fn predicate_chain_ends_with_the_predicate() {
    assert_snapshot!(predicate_chain("not_eq"), @r#"ransack.predicates.not_eq -> "not_eq""#);
}

#[test]
fn attribute_chain_lists_ancestors_most_derived_first() {
    let chain = attribute_chain(&[key("admin"), key("person")], "name_cont", true, None);
    assert_snapshot!(
        chain,
        @r#"ransack.attributes.admin.name_cont -> ransack.attributes.person.name_cont -> "%{attributes} %{predicate}""#
    );
}

#[test]
fn attribute_chain_without_predicate_uses_plain_template() {
    let chain = attribute_chain(&[key("person")], "name", false, None);
    assert_snapshot!(chain, @r#"ransack.attributes.person.name -> "%{attributes}""#);
}

#[test]
fn default_label_sits_between_ancestors_and_template() {
    let chain = attribute_chain(&[key("person")], "name_eq", true, Some("Who"));
    assert_eq!(chain.len(), 3);
    assert_eq!(
        chain.iter().nth(1),
        Some(&Fallback::literal("Who")),
        "caller default should follow the ancestor keys"
    );
    assert!(chain.ends_with_literal());
}

#[test]
fn namespaced_model_keys_use_slashes() {
    let chain = attribute_chain(&[key("admin.user")], "email", false, None);
    assert_snapshot!(chain, @r#"ransack.attributes.admin/user.email -> "%{attributes}""#);
}

#[test]
fn attribute_name_chain_switches_template_with_association() {
    assert_snapshot!(
        attribute_name_chain(&key("person"), "articles_title", false),
        @r#"ransack.attributes.person.articles_title -> "%{attr_fallback_name}""#
    );
    assert_snapshot!(
        attribute_name_chain(&key("person"), "articles_title", true),
        @r#"ransack.attributes.person.articles_title -> "%{association_name} %{attr_fallback_name}""#
    );
}

#[test]
fn attribute_fallback_chain_order() {
    let chain = attribute_fallback_chain(&key("article"), "activerecord", "title", "Title");
    assert_snapshot!(
        chain,
        @r#"ransack.attributes.article.title -> activerecord.attributes.article.title -> attributes.title -> "Title""#
    );

    let scopes: Vec<KeyScope> = chain.keys().map(|key| key.scope().clone()).collect();
    assert_eq!(
        scopes,
        vec![
            KeyScope::Ransack,
            KeyScope::Model("activerecord".into()),
            KeyScope::Relative,
        ]
    );
}

#[test]
fn association_chain_for_a_path() {
    assert_snapshot!(
        association_chain("activerecord", &key("person"), "articles", "Article"),
        @r#"ransack.associations.person.articles -> "Article""#
    );
}

#[test]
fn association_chain_for_the_root_model() {
    assert_snapshot!(
        association_chain("activerecord", &key("person"), "", "Person"),
        @r#"activerecord.models.person -> "Person""#
    );
}

#[test]
fn model_name_chain_uses_the_model_scope() {
    assert_snapshot!(
        model_name_chain("mongoid", &key("article"), "Article"),
        @r#"mongoid.models.article -> "Article""#
    );
}
