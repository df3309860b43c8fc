//! Inflections used to derive default labels and model identities.

use unicode_segmentation::UnicodeSegmentation;

/// Turn a raw attribute or model token into a readable label.
///
/// Leading underscores and a trailing `_id` are dropped, underscores become
/// spaces, and the result is lowercased with its first letter capitalized.
///
/// # Example
///
/// ```
/// use searchlabel::inflect::humanize;
///
/// assert_eq!(humanize("email"), "Email");
/// assert_eq!(humanize("first_name"), "First name");
/// assert_eq!(humanize("author_id"), "Author");
/// ```
pub fn humanize(raw: &str) -> String {
    let trimmed = raw.trim_start_matches('_');
    let trimmed = trimmed.strip_suffix("_id").unwrap_or(trimmed);
    capitalize_first(&trimmed.replace('_', " ").to_lowercase())
}

/// Convert a class-style name into its underscored form.
///
/// `::` becomes `/`, a word boundary inside a camel-cased run gets an
/// underscore, dashes become underscores, and everything is lowercased.
///
/// # Example
///
/// ```
/// use searchlabel::inflect::underscore;
///
/// assert_eq!(underscore("Person"), "person");
/// assert_eq!(underscore("Admin::UserProfile"), "admin/user_profile");
/// assert_eq!(underscore("HTMLParser"), "html_parser");
/// ```
pub fn underscore(name: &str) -> String {
    let chars: Vec<char> = name.replace("::", "/").chars().collect();
    let mut result = String::with_capacity(chars.len() + 4);
    for (index, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && index > 0 {
            let prev = chars[index - 1];
            let next = chars.get(index + 1).copied();
            let after_lower = prev.is_lowercase() || prev.is_ascii_digit();
            let acronym_end = prev.is_uppercase() && next.is_some_and(char::is_lowercase);
            if after_lower || acronym_end {
                result.push('_');
            }
        }
        if c == '-' {
            result.push('_');
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}

/// Uppercase the first grapheme, leaving the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut graphemes = text.graphemes(true);
    match graphemes.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), graphemes.as_str()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanize_keeps_bare_id() {
        assert_eq!(humanize("id"), "Id");
        assert_eq!(humanize("_id"), "Id");
    }

    #[test]
    fn humanize_lowercases_acronyms() {
        assert_eq!(humanize("URL"), "Url");
        assert_eq!(humanize("home_URL"), "Home url");
    }

    #[test]
    fn humanize_empty() {
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn underscore_digits_and_dashes() {
        assert_eq!(underscore("V2Api"), "v2_api");
        assert_eq!(underscore("line-item"), "line_item");
        assert_eq!(underscore("already_snake"), "already_snake");
    }

    #[test]
    fn capitalize_first_handles_multibyte() {
        assert_eq!(capitalize_first("élan"), "Élan");
        assert_eq!(capitalize_first("1st"), "1st");
    }
}
