//! CLDR plural category selection for plural dictionary entries.
//!
//! Rules are built once per language per thread and reused.

use std::cell::RefCell;

use icu_locale_core::{Locale, locale};
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

thread_local! {
    static RULES: RefCell<Vec<(String, Option<PluralRules>)>> = const { RefCell::new(Vec::new()) };
}

fn build_rules(lang: &str) -> Option<PluralRules> {
    let parsed: Locale = lang.parse().unwrap_or(locale!("en"));
    PluralRules::try_new(parsed.into(), PluralRuleType::Cardinal.into())
        .or_else(|_| PluralRules::try_new(locale!("en").into(), PluralRuleType::Cardinal.into()))
        .ok()
}

fn category_name(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

/// CLDR plural category of `n` in `lang`.
///
/// Unknown or unparsable language codes use English rules.
///
/// ```
/// use searchlabel::lookup::plural_category;
///
/// assert_eq!(plural_category("en", 1), "one");
/// assert_eq!(plural_category("en", 3), "other");
/// assert_eq!(plural_category("ru", 3), "few");
/// ```
pub fn plural_category(lang: &str, n: i64) -> &'static str {
    RULES.with_borrow_mut(|cache| {
        if let Some((_, rules)) = cache.iter().find(|(code, _)| code == lang) {
            return rules
                .as_ref()
                .map_or("other", |rules| category_name(rules.category_for(n)));
        }
        let rules = build_rules(lang);
        let category = rules
            .as_ref()
            .map_or("other", |rules| category_name(rules.category_for(n)));
        cache.push((lang.to_string(), rules));
        category
    })
}
