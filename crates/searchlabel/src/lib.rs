//! Human-readable labels for search-form components.
//!
//! A search name such as `name_or_email_cont` is split into attribute
//! tokens, a combinator and a predicate; each part is then resolved through
//! an ordered fallback chain of dictionary keys and literal defaults.

pub mod context;
mod error;
pub mod inflect;
pub mod keys;
pub mod lookup;
pub mod parser;
mod translate;
mod types;

pub use context::{AssociationDef, ModelDef, Schema, SchemaContext, SchemaError, TypeContext};
pub use error::TranslateError;
pub use lookup::{Dictionary, Entry, LoadError, LookupRequest, LookupService, RecordingLookup};
pub use parser::{ParsedExpression, PredicateCatalog};
pub use translate::{AttributeOptions, Translator};
pub use types::{
    Combinator, Fallback, FallbackChain, Interpolations, KeyScope, LocalizationKey, LookupKey,
};

/// Creates an [`Interpolations`] map from key-value pairs.
///
/// Keys and values are converted with `to_string`, so string slices,
/// `String`s and numbers can all be passed directly.
///
/// # Example
///
/// ```
/// use searchlabel::interpolations;
///
/// let values = interpolations! { "attributes" => "Name", "count" => 2 };
/// assert_eq!(values.len(), 2);
/// assert_eq!(values["count"], "2");
/// ```
#[macro_export]
macro_rules! interpolations {
    {} => {
        $crate::Interpolations::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::Interpolations::new();
            $(
                map.insert($key.to_string(), $value.to_string());
            )+
            map
        }
    };
}
