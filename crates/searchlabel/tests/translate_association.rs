//! Integration tests for association and vocabulary label resolution.

use searchlabel::{
    AssociationDef, Dictionary, ModelDef, RecordingLookup, Schema, SchemaContext, TranslateError,
    Translator,
};

fn schema() -> Schema {
    Schema::new(vec![
        ModelDef::builder()
            .name("Person")
            .columns(vec!["name".into()])
            .associations(vec![
                AssociationDef::new("articles", "Article"),
                AssociationDef::new("audit_logs", "Admin::AuditLog"),
            ])
            .build(),
        ModelDef::builder()
            .name("Article")
            .columns(vec!["title".into()])
            .associations(vec![AssociationDef::new("author", "Person")])
            .build(),
        ModelDef::builder()
            .name("Admin::AuditLog")
            .columns(vec!["action".into()])
            .build(),
        ModelDef::builder()
            .name("Widget")
            .i18n_scope("mongoid")
            .human("Gadget")
            .build(),
    ])
    .unwrap()
}

// =============================================================================
// Association labels
// =============================================================================

#[test]
fn empty_path_names_the_root_model() {
    let schema = schema();
    let context = schema.context("Person").unwrap();
    let translator = Translator::new(Dictionary::default());
    assert_eq!(translator.association("", Some(&context)).unwrap(), "Person");
}

#[test]
fn root_model_name_from_plural_table() {
    let schema = schema();
    let context = schema.context("Person").unwrap();
    let mut dictionary = Dictionary::default();
    dictionary.insert_plural(
        "en",
        "activerecord.models.person",
        [("one", "Member"), ("other", "Members")],
    );
    let translator = Translator::new(dictionary);
    assert_eq!(translator.association("", Some(&context)).unwrap(), "Member");
}

#[test]
fn root_model_uses_its_own_scope_and_display_name() {
    let schema = schema();
    let context = schema.context("Widget").unwrap();
    let mut dictionary = Dictionary::default();
    dictionary.insert("en", "activerecord.models.widget", "Wrong scope");
    let translator = Translator::new(dictionary);
    assert_eq!(translator.association("", Some(&context)).unwrap(), "Gadget");

    let mut dictionary = Dictionary::default();
    dictionary.insert("en", "mongoid.models.widget", "Thing");
    let translator = Translator::new(dictionary);
    assert_eq!(translator.association("", Some(&context)).unwrap(), "Thing");
}

#[test]
fn association_defaults_to_target_model_name() {
    let schema = schema();
    let context = schema.context("Person").unwrap();
    let translator = Translator::new(Dictionary::default());
    assert_eq!(
        translator.association("articles", Some(&context)).unwrap(),
        "Article"
    );
}

#[test]
fn association_uses_translated_target_model_name() {
    let schema = schema();
    let context = schema.context("Person").unwrap();
    let mut dictionary = Dictionary::default();
    dictionary.insert("en", "activerecord.models.article", "Blog post");
    let translator = Translator::new(dictionary);
    assert_eq!(
        translator.association("articles", Some(&context)).unwrap(),
        "Blog post"
    );
}

#[test]
fn association_key_wins_over_model_name() {
    let schema = schema();
    let context = schema.context("Person").unwrap();
    let mut dictionary = Dictionary::default();
    dictionary.insert("en", "activerecord.models.article", "Blog post");
    dictionary.insert("en", "ransack.associations.person.articles", "Writing");
    let translator = Translator::new(dictionary);
    assert_eq!(
        translator.association("articles", Some(&context)).unwrap(),
        "Writing"
    );
}

#[test]
fn nested_association_path() {
    let schema = schema();
    let context = schema.context("Person").unwrap();
    let mut dictionary = Dictionary::default();
    dictionary.insert("en", "ransack.associations.person.articles_author", "Writer");
    let translator = Translator::new(dictionary);
    assert_eq!(
        translator
            .association("articles_author", Some(&context))
            .unwrap(),
        "Writer"
    );
}

#[test]
fn namespaced_target_model() {
    let schema = schema();
    let context = schema.context("Person").unwrap();
    let translator = Translator::new(RecordingLookup::new(Dictionary::default()));
    assert_eq!(
        translator.association("audit_logs", Some(&context)).unwrap(),
        "Audit log"
    );

    let requests = translator.lookup().requests();
    assert_eq!(
        requests[0].chain.to_string(),
        r#"activerecord.models.admin/audit_log -> "Audit log""#
    );
}

#[test]
fn untraversable_path_is_humanized() {
    let schema = schema();
    let context = schema.context("Person").unwrap();
    let translator = Translator::new(Dictionary::default());
    assert_eq!(
        translator.association("followers", Some(&context)).unwrap(),
        "Followers"
    );
}

#[test]
fn association_requires_a_context() {
    let translator = Translator::new(RecordingLookup::new(Dictionary::with_language("de")));
    assert_eq!(translator.lookup().inner().language(), "de");
    let error = translator
        .association::<SchemaContext<'_>>("articles", None)
        .unwrap_err();
    assert_eq!(
        error,
        TranslateError::MissingContext {
            subject: "associations"
        }
    );
    assert!(translator.lookup().requests().is_empty());
}

// =============================================================================
// Words and predicates
// =============================================================================

#[test]
fn bundled_words() {
    let translator = Translator::new(Dictionary::default());
    assert_eq!(translator.word("and"), "and");
    assert_eq!(translator.word("asc"), "ascending");
    assert_eq!(translator.word("desc"), "descending");
}

#[test]
fn unknown_word_reads_raw() {
    let translator = Translator::new(Dictionary::default());
    assert_eq!(translator.word("zebra"), "zebra");
}

#[test]
fn dictionary_word_overrides_bundled_word() {
    let mut dictionary = Dictionary::default();
    dictionary.insert("en", "ransack.search", "Find");
    let translator = Translator::new(dictionary);
    assert_eq!(translator.word("search"), "Find");
}

#[test]
fn bundled_predicates() {
    let translator = Translator::new(Dictionary::default());
    assert_eq!(translator.predicate("cont"), "contains");
    assert_eq!(translator.predicate("not_eq"), "not equal to");
    assert_eq!(translator.predicate("gteq"), "greater than or equal to");
}

#[test]
fn bundled_vocabulary_can_be_disabled() {
    let dictionary = Dictionary::builder().bundled_vocabulary(false).build();
    let translator = Translator::new(dictionary);
    assert_eq!(translator.predicate("cont"), "cont");
    assert_eq!(translator.word("asc"), "asc");
}

#[test]
fn word_lookup_carries_no_count() {
    let translator = Translator::new(RecordingLookup::new(Dictionary::default()));
    translator.word("or");
    translator.predicate("eq");
    let requests = translator.lookup().requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|request| request.count.is_none()));
}
