mod combinator;
mod fallback;
mod localization_key;
mod lookup_key;

pub use combinator::Combinator;
pub use fallback::{Fallback, FallbackChain};
pub use localization_key::LocalizationKey;
pub use lookup_key::{KeyScope, LookupKey};

use std::collections::HashMap;

/// Placeholder name to already-resolved value.
pub type Interpolations = HashMap<String, String>;
