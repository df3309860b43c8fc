//! Declarative model schema and the [`TypeContext`] built on it.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::{SchemaError, TypeContext};
use crate::inflect::{humanize, underscore};
use crate::types::LocalizationKey;

fn default_i18n_scope() -> String {
    "activerecord".to_string()
}

/// An association from one model to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationDef {
    /// Association name as it appears in search names (`articles`).
    pub name: String,
    /// Name of the associated model (`Article`).
    pub model: String,
}

impl AssociationDef {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// One model type: its identity, parent, columns and associations.
///
/// # Example
///
/// ```
/// use searchlabel::{AssociationDef, ModelDef};
///
/// let person = ModelDef::builder()
///     .name("Person")
///     .columns(vec!["name".into(), "email".into()])
///     .associations(vec![AssociationDef::new("articles", "Article")])
///     .build();
///
/// assert_eq!(person.i18n_scope, "activerecord");
/// assert!(person.parent.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct ModelDef {
    /// Class-style model name (`Person`, `Admin::User`).
    #[builder(into)]
    pub name: String,

    /// Scope the model's own labels live under.
    #[builder(into, default = default_i18n_scope())]
    #[serde(default = "default_i18n_scope")]
    pub i18n_scope: String,

    /// Parent model, for single-table inheritance style hierarchies.
    #[builder(into)]
    #[serde(default)]
    pub parent: Option<String>,

    /// Column names declared directly on this model.
    #[builder(default)]
    #[serde(default)]
    pub columns: Vec<String>,

    /// Associations declared directly on this model.
    #[builder(default)]
    #[serde(default)]
    pub associations: Vec<AssociationDef>,

    /// Display name used when the dictionary has no model name.
    #[builder(into)]
    #[serde(default)]
    pub human: Option<String>,
}

#[derive(Deserialize)]
struct SchemaDocument {
    models: Vec<ModelDef>,
}

/// A validated set of models.
///
/// Every parent and association target refers to a declared model and no
/// parent chain is cyclic.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    models: Vec<ModelDef>,
}

impl Schema {
    /// Validate and wrap a list of models.
    pub fn new(models: Vec<ModelDef>) -> Result<Self, SchemaError> {
        let schema = Self { models };
        schema.validate()?;
        Ok(schema)
    }

    /// Parse a JSON document of the form `{"models": [...]}`.
    pub fn from_json_str(content: &str) -> Result<Self, SchemaError> {
        let document: SchemaDocument =
            serde_json::from_str(content).map_err(|source| SchemaError::Json {
                path: "<string>".into(),
                source,
            })?;
        Self::new(document.models)
    }

    /// Read and parse a JSON schema file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document: SchemaDocument =
            serde_json::from_str(&content).map_err(|source| SchemaError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        Self::new(document.models)
    }

    pub fn models(&self) -> &[ModelDef] {
        &self.models
    }

    pub fn model(&self, name: &str) -> Option<&ModelDef> {
        self.models.iter().find(|model| model.name == name)
    }

    /// A type context rooted at the named model.
    pub fn context(&self, root: &str) -> Result<SchemaContext<'_>, SchemaError> {
        let root = self.model(root).ok_or_else(|| SchemaError::UnknownModel {
            name: root.to_string(),
        })?;
        Ok(SchemaContext { schema: self, root })
    }

    fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for model in &self.models {
            if !seen.insert(model.name.as_str()) {
                return Err(SchemaError::DuplicateModel {
                    name: model.name.clone(),
                });
            }
        }

        for model in &self.models {
            if let Some(parent) = &model.parent {
                if self.model(parent).is_none() {
                    return Err(SchemaError::UnknownParent {
                        model: model.name.clone(),
                        parent: parent.clone(),
                    });
                }
            }
            for association in &model.associations {
                if self.model(&association.model).is_none() {
                    return Err(SchemaError::UnknownAssociationTarget {
                        model: model.name.clone(),
                        association: association.name.clone(),
                        target: association.model.clone(),
                    });
                }
            }
            self.check_parent_chain(model)?;
        }
        Ok(())
    }

    fn check_parent_chain(&self, model: &ModelDef) -> Result<(), SchemaError> {
        let mut chain = vec![model.name.clone()];
        let mut current = model;
        while let Some(parent) = current.parent.as_deref().and_then(|name| self.model(name)) {
            if chain.iter().any(|name| *name == parent.name) {
                chain.push(parent.name.clone());
                return Err(SchemaError::ParentCycle {
                    model: model.name.clone(),
                    chain,
                });
            }
            chain.push(parent.name.clone());
            current = parent;
        }
        Ok(())
    }

    /// The model followed by its parents, most-derived first.
    fn lineage<'s>(&'s self, model: &'s ModelDef) -> Vec<&'s ModelDef> {
        let mut lineage = vec![model];
        let mut current = model;
        while let Some(parent) = current.parent.as_deref().and_then(|name| self.model(name)) {
            if lineage.iter().any(|seen| seen.name == parent.name) {
                break;
            }
            lineage.push(parent);
            current = parent;
        }
        lineage
    }

    /// Whether `model` or one of its parents declares the column.
    fn has_column(&self, model: &ModelDef, column: &str) -> bool {
        self.lineage(model)
            .iter()
            .any(|m| m.columns.iter().any(|c| c == column))
    }

    /// The target of an association declared on `model` or one of its parents.
    fn association_target<'s>(&'s self, model: &'s ModelDef, name: &str) -> Option<&'s ModelDef> {
        self.lineage(model)
            .into_iter()
            .flat_map(|m| m.associations.iter())
            .find(|association| association.name == name)
            .and_then(|association| self.model(&association.model))
    }
}

/// A [`TypeContext`] rooted at one model of a [`Schema`].
///
/// # Example
///
/// ```
/// use searchlabel::{AssociationDef, ModelDef, Schema, TypeContext};
///
/// let schema = Schema::new(vec![
///     ModelDef::builder()
///         .name("Person")
///         .columns(vec!["name".into()])
///         .associations(vec![AssociationDef::new("articles", "Article")])
///         .build(),
///     ModelDef::builder()
///         .name("Article")
///         .columns(vec!["title".into()])
///         .build(),
/// ])
/// .unwrap();
///
/// let context = schema.context("Person").unwrap();
/// assert_eq!(context.association_path("articles_title"), "articles");
/// assert_eq!(context.association_path("name"), "");
/// assert_eq!(context.traverse("articles").unwrap().name, "Article");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SchemaContext<'s> {
    schema: &'s Schema,
    root: &'s ModelDef,
}

impl<'s> SchemaContext<'s> {
    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    fn traverse_from(&self, base: &'s ModelDef, path: &str) -> Option<&'s ModelDef> {
        if path.is_empty() {
            return Some(base);
        }
        let segments: Vec<&str> = path.split('_').collect();
        // Longest association prefix first, then recurse on what is left.
        for end in (1..=segments.len()).rev() {
            let candidate = segments[..end].join("_");
            if let Some(target) = self.schema.association_target(base, &candidate) {
                return self.traverse_from(target, &segments[end..].join("_"));
            }
        }
        None
    }
}

impl<'s> TypeContext for SchemaContext<'s> {
    type Model = &'s ModelDef;

    fn root(&self) -> Self::Model {
        self.root
    }

    fn ancestors(&self) -> Vec<Self::Model> {
        self.schema.lineage(self.root)
    }

    fn association_path(&self, token: &str) -> String {
        let mut base = self.root;
        let mut path: Vec<&str> = Vec::new();
        let mut pending: Vec<&str> = Vec::new();
        let mut segments: Vec<&str> = token.split('_').collect();

        // Stop as soon as the remaining segments name a column of the current
        // model; commit pending segments whenever they name an association.
        while !segments.is_empty() && !self.schema.has_column(base, &segments.join("_")) {
            pending.push(segments.remove(0));
            if let Some(target) = self.schema.association_target(base, &pending.join("_")) {
                path.append(&mut pending);
                base = target;
            }
        }

        path.join("_")
    }

    fn traverse(&self, path: &str) -> Option<Self::Model> {
        self.traverse_from(self.root, path)
    }

    fn i18n_key(&self, model: &Self::Model) -> String {
        LocalizationKey::from_model_name(&model.name).to_string()
    }

    fn i18n_scope(&self, model: &Self::Model) -> String {
        model.i18n_scope.clone()
    }

    fn model_display_name(&self, model: &Self::Model) -> String {
        if let Some(human) = &model.human {
            return human.clone();
        }
        let element = model.name.rsplit("::").next().unwrap_or(model.name.as_str());
        humanize(&underscore(element))
    }
}
