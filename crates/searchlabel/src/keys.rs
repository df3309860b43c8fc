//! Fallback chain construction.
//!
//! Every label is resolved from a chain built here. The builders are pure:
//! they take already-normalized identities and return structured chains, so
//! precedence can be tested without a dictionary.
//!
//! Key layout:
//!
//! | Chain | Candidates, in order |
//! |---|---|
//! | word | `ransack.<word>`, `"<word>"` |
//! | predicate | `ransack.predicates.<p>`, `"<p>"` |
//! | attribute | `ransack.attributes.<ancestor>.<name>` per ancestor, caller default, template |
//! | attribute name | `ransack.attributes.<root>.<token>`, template |
//! | attribute fallback | `ransack.attributes.<model>.<attr>`, `<scope>.attributes.<model>.<attr>`, `attributes.<attr>`, humanized |
//! | association | `ransack.associations.<root>.<path>` (or `<scope>.models.<root>` for the root itself), model name |
//! | model name | `<scope>.models.<model>`, display name |

use crate::types::{Fallback, FallbackChain, LocalizationKey, LookupKey};

/// Placeholder names used by the built-in templates.
pub mod placeholder {
    pub const ATTRIBUTES: &str = "attributes";
    pub const PREDICATE: &str = "predicate";
    pub const ATTR_FALLBACK_NAME: &str = "attr_fallback_name";
    pub const ASSOCIATION_NAME: &str = "association_name";
}

pub const ATTRIBUTES_TEMPLATE: &str = "%{attributes}";
pub const ATTRIBUTES_WITH_PREDICATE_TEMPLATE: &str = "%{attributes} %{predicate}";
pub const ATTRIBUTE_NAME_TEMPLATE: &str = "%{attr_fallback_name}";
pub const ASSOCIATED_ATTRIBUTE_NAME_TEMPLATE: &str = "%{association_name} %{attr_fallback_name}";

/// `ransack.<word>`, then the word itself.
pub fn word_chain(word: &str) -> FallbackChain {
    vec![
        Fallback::from(LookupKey::ransack([word])),
        Fallback::literal(word),
    ]
    .into()
}

/// `ransack.predicates.<predicate>`, then the predicate itself.
pub fn predicate_chain(predicate: &str) -> FallbackChain {
    vec![
        Fallback::from(LookupKey::ransack(["predicates", predicate])),
        Fallback::literal(predicate),
    ]
    .into()
}

/// Chain for a whole compound name.
///
/// One key per ancestor (most-derived first) so a subclass overrides its
/// parent, then the caller's default label, then the generic template.
///
/// ```
/// use searchlabel::LocalizationKey;
/// use searchlabel::keys::attribute_chain;
///
/// let ancestors = [LocalizationKey::new("admin"), LocalizationKey::new("person")];
/// let chain = attribute_chain(&ancestors, "name_cont", true, Some("Custom Label"));
/// assert_eq!(
///     chain.to_string(),
///     r#"ransack.attributes.admin.name_cont -> ransack.attributes.person.name_cont -> "Custom Label" -> "%{attributes} %{predicate}""#
/// );
/// ```
pub fn attribute_chain(
    ancestors: &[LocalizationKey],
    name: &str,
    has_predicate: bool,
    default_label: Option<&str>,
) -> FallbackChain {
    let mut chain: FallbackChain = ancestors
        .iter()
        .map(|ancestor| Fallback::from(LookupKey::ransack(["attributes", ancestor.as_str(), name])))
        .collect();
    if let Some(label) = default_label {
        chain.push(Fallback::literal(label));
    }
    chain.push(Fallback::literal(if has_predicate {
        ATTRIBUTES_WITH_PREDICATE_TEMPLATE
    } else {
        ATTRIBUTES_TEMPLATE
    }));
    chain
}

/// Chain for one attribute token of a compound name.
///
/// The token is tried whole under the root model first; the template then
/// combines the attribute's own label with the association label when
/// `with_association` is set.
pub fn attribute_name_chain(
    root: &LocalizationKey,
    token: &str,
    with_association: bool,
) -> FallbackChain {
    vec![
        Fallback::from(LookupKey::ransack(["attributes", root.as_str(), token])),
        Fallback::literal(if with_association {
            ASSOCIATED_ATTRIBUTE_NAME_TEMPLATE
        } else {
            ATTRIBUTE_NAME_TEMPLATE
        }),
    ]
    .into()
}

/// Chain for a bare attribute on the model that declares it.
pub fn attribute_fallback_chain(
    model: &LocalizationKey,
    i18n_scope: &str,
    attribute: &str,
    humanized: impl Into<String>,
) -> FallbackChain {
    vec![
        Fallback::from(LookupKey::ransack(["attributes", model.as_str(), attribute])),
        Fallback::from(LookupKey::model_scope(
            i18n_scope,
            ["attributes", model.as_str(), attribute],
        )),
        Fallback::from(LookupKey::relative(["attributes", attribute])),
        Fallback::literal(humanized),
    ]
    .into()
}

/// Chain for an association label.
///
/// An empty path names the root model itself.
pub fn association_chain(
    root_scope: &str,
    root: &LocalizationKey,
    path: &str,
    model_name: impl Into<String>,
) -> FallbackChain {
    let key = if path.is_empty() {
        LookupKey::model_scope(root_scope, ["models", root.as_str()])
    } else {
        LookupKey::ransack(["associations", root.as_str(), path])
    };
    vec![Fallback::from(key), Fallback::literal(model_name)].into()
}

/// Chain for a model's own display name.
pub fn model_name_chain(
    i18n_scope: &str,
    model: &LocalizationKey,
    display_name: impl Into<String>,
) -> FallbackChain {
    vec![
        Fallback::from(LookupKey::model_scope(i18n_scope, ["models", model.as_str()])),
        Fallback::literal(display_name),
    ]
    .into()
}
