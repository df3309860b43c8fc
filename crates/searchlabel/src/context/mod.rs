//! The type-introspection seam.
//!
//! The resolver never inspects model types directly. Everything it needs (the
//! root model, its ancestors, association traversal and per-model identities)
//! comes through [`TypeContext`]. [`SchemaContext`] is a ready-made
//! implementation over a declarative [`Schema`].

mod error;
mod schema;

pub use error::SchemaError;
pub use schema::{AssociationDef, ModelDef, Schema, SchemaContext};

use crate::inflect::humanize;
use crate::types::LocalizationKey;

/// Read-only view of the model the search is rooted at.
pub trait TypeContext {
    /// Handle for a model type.
    type Model: Clone;

    /// The model the search is rooted at.
    fn root(&self) -> Self::Model;

    /// The root model followed by its ancestors that carry a localization
    /// identity, most-derived first.
    fn ancestors(&self) -> Vec<Self::Model>;

    /// The longest leading part of `token` that names a chain of
    /// associations, joined with `_`; empty when there is none.
    fn association_path(&self, token: &str) -> String;

    /// The model reached by following `path` from the root.
    ///
    /// An empty path yields the root. `None` means the path cannot be
    /// traversed and is treated as "no association".
    fn traverse(&self, path: &str) -> Option<Self::Model>;

    /// The raw identity of a model, such as `person` or `admin/user`.
    fn i18n_key(&self, model: &Self::Model) -> String;

    /// The i18n scope a model's own labels live under, such as `activerecord`.
    fn i18n_scope(&self, model: &Self::Model) -> String;

    /// The display name used when the dictionary has no model name.
    fn model_display_name(&self, model: &Self::Model) -> String;

    /// Readable default for a raw attribute token.
    fn humanize(&self, raw: &str) -> String {
        humanize(raw)
    }

    /// The normalized identity that scopes keys for `model`.
    fn localization_key(&self, model: &Self::Model) -> LocalizationKey {
        LocalizationKey::new(self.i18n_key(model))
    }
}
