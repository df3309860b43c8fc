//! In-memory, multi-language label dictionary.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use bon::bon;
use searchlabel_vocabulary::{english_predicate, english_word};
use serde_json::Value;
use tracing::{trace, warn};

use super::error::LoadError;
use super::interpolate::interpolate;
use super::plural::plural_category;
use super::LookupService;
use crate::types::{Fallback, FallbackChain, Interpolations};

const PLURAL_CATEGORIES: &[&str] = &["zero", "one", "two", "few", "many", "other"];

/// A dictionary entry: plain text or a plural table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Text(String),
    /// Variants keyed by CLDR plural category.
    Plural(BTreeMap<String, String>),
}

impl Entry {
    /// The text for a request count.
    ///
    /// Plural tables pick the CLDR category of `count` in `language`, falling
    /// back to `other`; without a count they use `other`.
    pub fn select(&self, language: &str, count: Option<i64>) -> Option<&str> {
        match self {
            Entry::Text(text) => Some(text),
            Entry::Plural(variants) => {
                let category = count.map_or("other", |n| plural_category(language, n));
                variants
                    .get(category)
                    .or_else(|| variants.get("other"))
                    .map(String::as_str)
            }
        }
    }
}

/// Label dictionary implementing [`LookupService`].
///
/// Dictionary owns one entry table per language and resolves against the
/// current language. For `en`, the bundled vocabulary (`ransack.and`,
/// `ransack.predicates.cont`, ...) sits underneath the loaded entries unless
/// disabled, so predicate and combinator words read naturally out of the box.
///
/// # Example
///
/// ```
/// use searchlabel::{Dictionary, Fallback, FallbackChain, LookupKey, LookupService};
/// use searchlabel::interpolations;
///
/// let mut dictionary = Dictionary::builder().language("en").build();
/// dictionary.insert("en", "ransack.attributes.person.name", "Full name");
///
/// let chain: FallbackChain = vec![
///     Fallback::from(LookupKey::ransack(["attributes", "person", "name"])),
///     Fallback::literal("Name"),
/// ]
/// .into();
/// assert_eq!(dictionary.resolve(&chain, &interpolations! {}, None), "Full name");
///
/// let chain: FallbackChain = vec![
///     Fallback::from(LookupKey::ransack(["predicates", "cont"])),
///     Fallback::literal("cont"),
/// ]
/// .into();
/// assert_eq!(dictionary.resolve(&chain, &interpolations! {}, None), "contains");
/// ```
#[derive(Debug)]
pub struct Dictionary {
    /// Current language code.
    language: String,

    /// Whether the bundled English vocabulary backs the `en` table.
    bundled_vocabulary: bool,

    /// Per-language entries keyed by dotted key.
    tables: HashMap<String, HashMap<String, Entry>>,

    /// Source files for reload support, in load order; only file-loaded
    /// languages appear.
    loaded_paths: HashMap<String, Vec<PathBuf>>,
}

#[bon]
impl Dictionary {
    #[builder]
    pub fn new(
        #[builder(into, default = "en".to_string())] language: String,
        #[builder(default = true)] bundled_vocabulary: bool,
    ) -> Self {
        Self {
            language,
            bundled_vocabulary,
            tables: HashMap::new(),
            loaded_paths: HashMap::new(),
        }
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Dictionary::builder().build()
    }
}

impl Dictionary {
    /// Create a dictionary for the specified language.
    pub fn with_language(language: impl Into<String>) -> Self {
        Dictionary::builder().language(language).build()
    }

    // =========================================================================
    // Language Management
    // =========================================================================

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Change the current language. Entries for it must be loaded separately.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    pub fn bundled_vocabulary(&self) -> bool {
        self.bundled_vocabulary
    }

    // =========================================================================
    // Entries
    // =========================================================================

    /// Insert a text entry, replacing any existing entry for the key.
    pub fn insert(&mut self, language: &str, key: impl Into<String>, text: impl Into<String>) {
        self.table_mut(language)
            .insert(key.into(), Entry::Text(text.into()));
    }

    /// Insert a plural table, replacing any existing entry for the key.
    pub fn insert_plural<I, C, T>(&mut self, language: &str, key: impl Into<String>, variants: I)
    where
        I: IntoIterator<Item = (C, T)>,
        C: Into<String>,
        T: Into<String>,
    {
        let variants = variants
            .into_iter()
            .map(|(category, text)| (category.into(), text.into()))
            .collect();
        self.table_mut(language)
            .insert(key.into(), Entry::Plural(variants));
    }

    /// Look up an entry in the current language, ignoring the bundled
    /// vocabulary.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.tables.get(&self.language)?.get(key)
    }

    /// Whether `key` resolves in the current language, bundled vocabulary
    /// included.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some() || self.bundled(key).is_some()
    }

    /// Number of loaded entries for `language`.
    pub fn len(&self, language: &str) -> usize {
        self.tables.get(language).map_or(0, HashMap::len)
    }

    pub fn is_empty(&self, language: &str) -> bool {
        self.len(language) == 0
    }

    /// Loaded keys in the current language that are close to `key`.
    ///
    /// Useful for diagnosing a typo in a dictionary file. At most three
    /// suggestions are returned, best match first.
    pub fn suggestions(&self, key: &str) -> Vec<String> {
        let Some(table) = self.tables.get(&self.language) else {
            return Vec::new();
        };
        let mut scored: Vec<(f64, &String)> = table
            .keys()
            .map(|candidate| (strsim::normalized_levenshtein(key, candidate), candidate))
            .filter(|(score, candidate)| *score >= 0.8 && candidate.as_str() != key)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(3)
            .map(|(_, candidate)| candidate.clone())
            .collect()
    }

    /// Near-miss suggestions for every key in `chain` that does not resolve.
    ///
    /// Keys without any close match are left out, so an empty result means
    /// there is no likely typo to report.
    pub fn near_misses(&self, chain: &FallbackChain) -> Vec<(String, Vec<String>)> {
        chain
            .keys()
            .map(ToString::to_string)
            .filter(|key| !self.contains(key))
            .filter_map(|key| {
                let suggestions = self.suggestions(&key);
                (!suggestions.is_empty()).then_some((key, suggestions))
            })
            .collect()
    }

    fn table_mut(&mut self, language: &str) -> &mut HashMap<String, Entry> {
        self.tables.entry(language.to_string()).or_default()
    }

    fn bundled(&self, key: &str) -> Option<&'static str> {
        if !self.bundled_vocabulary || self.language != "en" {
            return None;
        }
        let word = key.strip_prefix("ransack.")?;
        match word.strip_prefix("predicates.") {
            Some(predicate) => english_predicate(predicate),
            None => english_word(word),
        }
    }

    fn lookup_key(&self, key: &str, count: Option<i64>) -> Option<&str> {
        if let Some(entry) = self.get(key) {
            return entry.select(&self.language, count);
        }
        self.bundled(key)
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Load entries from a JSON document rooted at the language code.
    ///
    /// Nested objects are flattened into dotted keys. An object whose keys
    /// are all CLDR plural categories becomes a plural table. Loading a
    /// language **replaces** everything previously loaded for it.
    ///
    /// ```
    /// use searchlabel::Dictionary;
    ///
    /// let mut dictionary = Dictionary::default();
    /// let count = dictionary
    ///     .load_json_str("en", r#"{
    ///         "en": {
    ///             "activerecord": {
    ///                 "models": { "person": { "one": "Person", "other": "People" } }
    ///             },
    ///             "ransack": { "attributes": { "person": { "name": "Full name" } } }
    ///         }
    ///     }"#)
    ///     .unwrap();
    /// assert_eq!(count, 2);
    /// ```
    pub fn load_json_str(&mut self, language: &str, content: &str) -> Result<usize, LoadError> {
        let source = PathBuf::from(format!("<{language}>"));
        let entries = parse_entries(language, content, &source)?;
        let count = entries.len();
        self.tables.insert(language.to_string(), entries);
        self.loaded_paths.remove(language);
        Ok(count)
    }

    /// Load entries from a JSON file, remembering the path for
    /// [`reload`](Self::reload). Replaces everything loaded for `language`.
    pub fn load_file(&mut self, language: &str, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let entries = read_entries(language, path)?;
        let count = entries.len();
        self.tables.insert(language.to_string(), entries);
        self.loaded_paths
            .insert(language.to_string(), vec![path.to_path_buf()]);
        Ok(count)
    }

    /// Load a JSON file on top of what is already loaded for `language`.
    ///
    /// Keys present in both keep the value from `path`. The path is added to
    /// the ones [`reload`](Self::reload) re-reads.
    pub fn merge_file(&mut self, language: &str, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let entries = read_entries(language, path)?;
        let count = entries.len();
        self.table_mut(language).extend(entries);
        self.loaded_paths
            .entry(language.to_string())
            .or_default()
            .push(path.to_path_buf());
        Ok(count)
    }

    /// Rebuild a language from the files it was loaded from, in load order.
    ///
    /// Entries inserted directly are dropped.
    pub fn reload(&mut self, language: &str) -> Result<usize, LoadError> {
        let paths = self.loaded_paths.get(language).cloned().ok_or_else(|| {
            LoadError::NoPathForReload {
                language: language.to_string(),
            }
        })?;
        let mut entries = HashMap::new();
        for path in &paths {
            entries.extend(read_entries(language, path)?);
        }
        let count = entries.len();
        self.tables.insert(language.to_string(), entries);
        Ok(count)
    }
}

fn read_entries(language: &str, path: &Path) -> Result<HashMap<String, Entry>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_entries(language, &content, path)
}

fn parse_entries(
    language: &str,
    content: &str,
    path: &Path,
) -> Result<HashMap<String, Entry>, LoadError> {
    let document: Value = serde_json::from_str(content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let root = document
        .get(language)
        .ok_or_else(|| LoadError::MissingLanguage {
            path: path.to_path_buf(),
            language: language.to_string(),
        })?;

    let mut entries = HashMap::new();
    flatten_into(&mut entries, "", root, path)?;
    Ok(entries)
}

fn join_key(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}.{segment}")
    }
}

fn flatten_into(
    entries: &mut HashMap<String, Entry>,
    prefix: &str,
    value: &Value,
    path: &Path,
) -> Result<(), LoadError> {
    match value {
        Value::String(text) => {
            entries.insert(prefix.to_string(), Entry::Text(text.clone()));
        }
        Value::Number(number) => {
            entries.insert(prefix.to_string(), Entry::Text(number.to_string()));
        }
        Value::Bool(flag) => {
            entries.insert(prefix.to_string(), Entry::Text(flag.to_string()));
        }
        Value::Null => {}
        Value::Array(_) => {
            return Err(LoadError::InvalidEntry {
                path: path.to_path_buf(),
                key: prefix.to_string(),
                message: "is a list; labels must be strings or objects".to_string(),
            });
        }
        Value::Object(map) => {
            let is_plural = !map.is_empty()
                && map.iter().all(|(category, text)| {
                    PLURAL_CATEGORIES.contains(&category.as_str()) && text.is_string()
                });
            if is_plural && !prefix.is_empty() {
                let variants = map
                    .iter()
                    .filter_map(|(category, text)| {
                        text.as_str().map(|text| (category.clone(), text.to_string()))
                    })
                    .collect();
                entries.insert(prefix.to_string(), Entry::Plural(variants));
            } else {
                for (segment, child) in map {
                    flatten_into(entries, &join_key(prefix, segment), child, path)?;
                }
            }
        }
    }
    Ok(())
}

impl LookupService for Dictionary {
    fn resolve(
        &self,
        chain: &FallbackChain,
        interpolations: &Interpolations,
        count: Option<i64>,
    ) -> String {
        for candidate in chain {
            match candidate {
                Fallback::Key(key) => {
                    let key = key.to_string();
                    trace!(key = %key, language = %self.language, "trying key");
                    if let Some(text) = self.lookup_key(&key, count) {
                        return interpolate(text, interpolations, count);
                    }
                }
                Fallback::Literal(text) => return interpolate(text, interpolations, count),
            }
        }

        let missing = chain
            .keys()
            .last()
            .map_or_else(String::new, ToString::to_string);
        let suggestions: Vec<String> = self
            .near_misses(chain)
            .into_iter()
            .flat_map(|(_, suggestions)| suggestions)
            .collect();
        if suggestions.is_empty() {
            warn!(key = %missing, language = %self.language, "translation missing");
        } else {
            warn!(
                key = %missing,
                language = %self.language,
                did_you_mean = %suggestions.join(", "),
                "translation missing"
            );
        }
        format!("translation missing: {missing}")
    }
}
