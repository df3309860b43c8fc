//! Integration tests for the schema-backed type context.

use std::io::Write;

use searchlabel::{AssociationDef, ModelDef, Schema, SchemaError, TypeContext};
use tempfile::NamedTempFile;

fn schema() -> Schema {
    Schema::new(vec![
        ModelDef::builder()
            .name("Person")
            .columns(vec!["name".into(), "email".into(), "articles_count".into()])
            .associations(vec![
                AssociationDef::new("articles", "Article"),
                AssociationDef::new("home_address", "Address"),
            ])
            .build(),
        ModelDef::builder().name("Admin").parent("Person").build(),
        ModelDef::builder()
            .name("SuperAdmin")
            .parent("Admin")
            .columns(vec!["level".into()])
            .build(),
        ModelDef::builder()
            .name("Article")
            .columns(vec!["title".into()])
            .associations(vec![AssociationDef::new("comments", "Comment")])
            .build(),
        ModelDef::builder()
            .name("Comment")
            .columns(vec!["body".into()])
            .build(),
        ModelDef::builder()
            .name("Address")
            .columns(vec!["street_name".into()])
            .build(),
    ])
    .unwrap()
}

// =========================================================================
// Ancestors and identities
// =========================================================================

#[test]
fn ancestors_are_most_derived_first() {
    let schema = schema();
    let context = schema.context("SuperAdmin").unwrap();
    let names: Vec<&str> = context
        .ancestors()
        .iter()
        .map(|model| model.name.as_str())
        .collect();
    assert_eq!(names, vec!["SuperAdmin", "Admin", "Person"]);
}

#[test]
fn root_without_parent_is_its_own_only_ancestor() {
    let schema = schema();
    let context = schema.context("Article").unwrap();
    assert_eq!(context.ancestors().len(), 1);
}

#[test]
fn i18n_key_is_underscored() {
    let schema = schema();
    let context = schema.context("SuperAdmin").unwrap();
    assert_eq!(context.i18n_key(&context.root()), "super_admin");
    assert_eq!(context.localization_key(&context.root()).as_str(), "super_admin");
}

#[test]
fn display_name_is_humanized() {
    let schema = schema();
    let context = schema.context("SuperAdmin").unwrap();
    assert_eq!(context.model_display_name(&context.root()), "Super admin");
    assert_eq!(context.i18n_scope(&context.root()), "activerecord");
}

// =========================================================================
// Association paths
// =========================================================================

#[test]
fn own_column_has_no_association_path() {
    let schema = schema();
    let context = schema.context("Person").unwrap();
    assert_eq!(context.association_path("email"), "");
}

#[test]
fn column_named_like_an_association_prefix() {
    let schema = schema();
    let context = schema.context("Person").unwrap();
    assert_eq!(context.association_path("articles_count"), "");
}

#[test]
fn single_association_path() {
    let schema = schema();
    let context = schema.context("Person").unwrap();
    assert_eq!(context.association_path("articles_title"), "articles");
}

#[test]
fn multi_word_association_and_column() {
    let schema = schema();
    let context = schema.context("Person").unwrap();
    assert_eq!(
        context.association_path("home_address_street_name"),
        "home_address"
    );
}

#[test]
fn nested_association_path() {
    let schema = schema();
    let context = schema.context("Person").unwrap();
    assert_eq!(
        context.association_path("articles_comments_body"),
        "articles_comments"
    );
}

#[test]
fn inherited_associations_and_columns() {
    let schema = schema();
    let context = schema.context("SuperAdmin").unwrap();
    assert_eq!(context.association_path("name"), "");
    assert_eq!(context.association_path("articles_title"), "articles");
}

#[test]
fn unknown_token_has_no_association_path() {
    let schema = schema();
    let context = schema.context("Person").unwrap();
    assert_eq!(context.association_path("favorite_color"), "");
}

// =========================================================================
// Traversal
// =========================================================================

#[test]
fn traverse_empty_path_is_root() {
    let schema = schema();
    let context = schema.context("Person").unwrap();
    assert_eq!(context.traverse("").unwrap().name, "Person");
}

#[test]
fn traverse_nested_path() {
    let schema = schema();
    let context = schema.context("Person").unwrap();
    assert_eq!(context.traverse("articles_comments").unwrap().name, "Comment");
    assert_eq!(context.traverse("home_address").unwrap().name, "Address");
}

#[test]
fn traverse_unknown_path_is_none() {
    let schema = schema();
    let context = schema.context("Person").unwrap();
    assert!(context.traverse("followers").is_none());
    assert!(context.traverse("articles_followers").is_none());
}

// =========================================================================
// Loading and validation
// =========================================================================

#[test]
fn load_schema_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{ "models": [{{ "name": "Person", "i18n_scope": "mongoid", "human": "Member" }}] }}"#
    )
    .unwrap();
    file.flush().unwrap();

    let schema = Schema::load(file.path()).unwrap();
    let person = schema.model("Person").unwrap();
    assert_eq!(person.i18n_scope, "mongoid");
    assert_eq!(person.human.as_deref(), Some("Member"));

    let context = schema.context("Person").unwrap();
    assert_eq!(context.model_display_name(&context.root()), "Member");
}

#[test]
fn load_missing_schema_file() {
    assert!(matches!(
        Schema::load("/nonexistent/schema.json"),
        Err(SchemaError::Io { .. })
    ));
}

#[test]
fn invalid_schema_json() {
    assert!(matches!(
        Schema::from_json_str(r#"{ "models": "nope" }"#),
        Err(SchemaError::Json { .. })
    ));
}

#[test]
fn unknown_root_model() {
    let schema = schema();
    assert!(matches!(
        schema.context("Ghost"),
        Err(SchemaError::UnknownModel { ref name }) if name == "Ghost"
    ));
}

#[test]
fn duplicate_model_is_rejected() {
    let result = Schema::new(vec![
        ModelDef::builder().name("Person").build(),
        ModelDef::builder().name("Person").build(),
    ]);
    assert!(matches!(result, Err(SchemaError::DuplicateModel { .. })));
}

#[test]
fn unknown_parent_is_rejected() {
    let result = Schema::new(vec![ModelDef::builder().name("Admin").parent("Person").build()]);
    assert!(matches!(result, Err(SchemaError::UnknownParent { .. })));
}

#[test]
fn unknown_association_target_is_rejected() {
    let result = Schema::new(vec![
        ModelDef::builder()
            .name("Person")
            .associations(vec![AssociationDef::new("pets", "Pet")])
            .build(),
    ]);
    assert!(matches!(
        result,
        Err(SchemaError::UnknownAssociationTarget { ref target, .. }) if target == "Pet"
    ));
}

#[test]
fn parent_cycle_is_rejected() {
    let result = Schema::new(vec![
        ModelDef::builder().name("A").parent("B").build(),
        ModelDef::builder().name("B").parent("A").build(),
    ]);
    let err = result.unwrap_err();
    assert!(matches!(err, SchemaError::ParentCycle { .. }));
    assert_eq!(err.to_string(), "parent chain of 'A' is cyclic: A -> B -> A");
}
