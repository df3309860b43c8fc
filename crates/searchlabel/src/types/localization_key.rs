use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::inflect::underscore;

/// The normalized identity that scopes every key for one model type.
///
/// Dots are rewritten to `/` so a namespaced identity such as `admin.user`
/// stays a single key segment (`admin/user`) instead of splitting the key.
///
/// # Example
///
/// ```
/// use searchlabel::LocalizationKey;
///
/// assert_eq!(LocalizationKey::new("admin.user").as_str(), "admin/user");
/// assert_eq!(
///     LocalizationKey::from_model_name("Admin::UserProfile").as_str(),
///     "admin/user_profile"
/// );
/// ```
#[derive(Clone, Debug, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LocalizationKey(String);

impl LocalizationKey {
    /// Normalize an identity reported by a type context.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().replace('.', "/"))
    }

    /// Derive the identity from a class-style model name.
    pub fn from_model_name(name: &str) -> Self {
        Self::new(underscore(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LocalizationKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocalizationKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
