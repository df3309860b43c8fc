//! Label resolution entry points.

use bon::Builder;
use tracing::debug;

use crate::context::TypeContext;
use crate::error::TranslateError;
use crate::keys::{self, placeholder};
use crate::lookup::LookupService;
use crate::parser::{ParsedExpression, PredicateCatalog};
use crate::types::{FallbackChain, Interpolations, LocalizationKey};

/// Options for [`Translator::attribute`].
///
/// # Example
///
/// ```
/// use searchlabel::{AttributeOptions, Schema, ModelDef};
///
/// let schema = Schema::new(vec![ModelDef::builder().name("Person").build()]).unwrap();
/// let context = schema.context("Person").unwrap();
///
/// let options = AttributeOptions::builder()
///     .context(&context)
///     .include_associations(true)
///     .default_label("Custom Label")
///     .build();
/// assert!(options.include_associations);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct AttributeOptions<'c, C> {
    /// The model the search is rooted at. Required.
    pub context: Option<&'c C>,

    /// Prefix association-qualified attributes with the association label.
    #[builder(default)]
    pub include_associations: bool,

    /// Label used when no ancestor-scoped key matches, ahead of the generic
    /// template.
    #[builder(into)]
    pub default_label: Option<String>,
}

impl<'c, C> AttributeOptions<'c, C> {
    /// Options with a context and everything else defaulted.
    pub fn for_context(context: &'c C) -> Self {
        Self {
            context: Some(context),
            include_associations: false,
            default_label: None,
        }
    }
}

/// Resolves labels for search-query components.
///
/// The translator owns its [`LookupService`] and [`PredicateCatalog`] and
/// holds no other state; it can be shared across threads whenever the
/// lookup can.
///
/// # Example
///
/// ```
/// use searchlabel::{AttributeOptions, Dictionary, ModelDef, Schema, Translator};
///
/// let schema = Schema::new(vec![
///     ModelDef::builder()
///         .name("Person")
///         .columns(vec!["name".into(), "email".into()])
///         .build(),
/// ])
/// .unwrap();
/// let context = schema.context("Person").unwrap();
/// let translator = Translator::new(Dictionary::default());
///
/// let label = translator
///     .attribute("name_or_email_cont", &AttributeOptions::for_context(&context))
///     .unwrap();
/// assert_eq!(label, "Name or Email contains");
/// ```
#[derive(Debug, Clone)]
pub struct Translator<L> {
    lookup: L,
    predicates: PredicateCatalog,
}

impl<L: LookupService> Translator<L> {
    /// Create a translator with the default predicate catalog.
    pub fn new(lookup: L) -> Self {
        Self::with_predicates(lookup, PredicateCatalog::default())
    }

    pub fn with_predicates(lookup: L, predicates: PredicateCatalog) -> Self {
        Self { lookup, predicates }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    pub fn predicates(&self) -> &PredicateCatalog {
        &self.predicates
    }

    /// Label for a vocabulary word such as `and` or `asc`.
    pub fn word(&self, key: &str) -> String {
        self.resolve(&keys::word_chain(key), &Interpolations::new(), None)
    }

    /// Label for a predicate such as `cont` or `not_eq`.
    pub fn predicate(&self, key: &str) -> String {
        self.resolve(&keys::predicate_chain(key), &Interpolations::new(), None)
    }

    /// Label for a compound search name such as `name_or_email_cont`.
    ///
    /// Returns [`TranslateError::MissingContext`] without performing any
    /// lookup when `options.context` is absent.
    pub fn attribute<C: TypeContext>(
        &self,
        name: &str,
        options: &AttributeOptions<'_, C>,
    ) -> Result<String, TranslateError> {
        let context = options.context.ok_or(TranslateError::MissingContext {
            subject: "attributes",
        })?;

        let expression = ParsedExpression::parse(name, &self.predicates);
        debug!(
            name,
            tokens = ?expression.tokens,
            combinator = %expression.combinator,
            predicate = ?expression.predicate,
            "parsed search name"
        );

        let labels: Vec<String> = expression
            .tokens
            .iter()
            .map(|token| self.attribute_name(context, token, options.include_associations))
            .collect();
        let joiner = format!(" {} ", self.word(expression.combinator.as_str()));

        let mut interpolations = Interpolations::new();
        interpolations.insert(placeholder::ATTRIBUTES.to_string(), labels.join(&joiner));
        if let Some(predicate) = &expression.predicate {
            interpolations.insert(placeholder::PREDICATE.to_string(), self.predicate(predicate));
        }

        let ancestors: Vec<LocalizationKey> = context
            .ancestors()
            .iter()
            .map(|model| context.localization_key(model))
            .collect();
        let chain = keys::attribute_chain(
            &ancestors,
            name,
            expression.predicate.is_some(),
            options.default_label.as_deref(),
        );
        Ok(self.resolve(&chain, &interpolations, Some(1)))
    }

    /// Label for an association path, or for the root model when `path` is
    /// empty.
    ///
    /// Returns [`TranslateError::MissingContext`] without performing any
    /// lookup when `context` is absent.
    pub fn association<C: TypeContext>(
        &self,
        path: &str,
        context: Option<&C>,
    ) -> Result<String, TranslateError> {
        let context = context.ok_or(TranslateError::MissingContext {
            subject: "associations",
        })?;
        Ok(self.association_label(context, path))
    }

    /// Label for one attribute token, possibly qualified by an association.
    fn attribute_name<C: TypeContext>(
        &self,
        context: &C,
        token: &str,
        include_associations: bool,
    ) -> String {
        let root = context.root();
        let path = context.association_path(token);
        let associated = if path.is_empty() {
            None
        } else {
            context.traverse(&path)
        };
        // An untraversable path is no association at all.
        let attribute = match &associated {
            Some(_) => token
                .strip_prefix(path.as_str())
                .and_then(|rest| rest.strip_prefix('_'))
                .unwrap_or(token),
            None => token,
        };

        let owner = associated.clone().unwrap_or_else(|| root.clone());
        let fallback_chain = keys::attribute_fallback_chain(
            &context.localization_key(&owner),
            &context.i18n_scope(&owner),
            attribute,
            context.humanize(attribute),
        );
        let attr_fallback_name = self.resolve(&fallback_chain, &Interpolations::new(), None);

        let mut interpolations = Interpolations::new();
        interpolations.insert(
            placeholder::ATTR_FALLBACK_NAME.to_string(),
            attr_fallback_name,
        );
        let with_association = include_associations && associated.is_some();
        if with_association {
            interpolations.insert(
                placeholder::ASSOCIATION_NAME.to_string(),
                self.association_label(context, &path),
            );
        }

        let chain =
            keys::attribute_name_chain(&context.localization_key(&root), token, with_association);
        self.resolve(&chain, &interpolations, Some(1))
    }

    fn association_label<C: TypeContext>(&self, context: &C, path: &str) -> String {
        let root = context.root();
        let model_name = match context.traverse(path) {
            Some(target) => self.model_name(context, &target),
            None => context.humanize(path),
        };
        let chain = keys::association_chain(
            &context.i18n_scope(&root),
            &context.localization_key(&root),
            path,
            model_name,
        );
        self.resolve(&chain, &Interpolations::new(), Some(1))
    }

    /// The model's display name as the dictionary knows it.
    fn model_name<C: TypeContext>(&self, context: &C, model: &C::Model) -> String {
        let chain = keys::model_name_chain(
            &context.i18n_scope(model),
            &context.localization_key(model),
            context.model_display_name(model),
        );
        self.resolve(&chain, &Interpolations::new(), Some(1))
    }

    fn resolve(
        &self,
        chain: &FallbackChain,
        interpolations: &Interpolations,
        count: Option<i64>,
    ) -> String {
        debug!(chain = %chain, count, "resolving label");
        self.lookup.resolve(chain, interpolations, count)
    }
}
