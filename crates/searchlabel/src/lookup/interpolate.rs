//! Placeholder substitution for resolved labels.

use tracing::warn;

use crate::parser::{Segment, parse_template};
use crate::types::Interpolations;

/// Substitute `%{name}` placeholders in `text`.
///
/// `%{count}` falls back to `count` when the map has no `count` entry.
/// Placeholders with no value are kept verbatim.
///
/// # Example
///
/// ```
/// use searchlabel::interpolations;
/// use searchlabel::lookup::interpolate;
///
/// let values = interpolations! { "attributes" => "Name", "predicate" => "contains" };
/// assert_eq!(interpolate("%{attributes} %{predicate}", &values, None), "Name contains");
/// assert_eq!(interpolate("%{count} items", &values, Some(3)), "3 items");
/// assert_eq!(interpolate("%{missing}", &values, None), "%{missing}");
/// ```
pub fn interpolate(text: &str, interpolations: &Interpolations, count: Option<i64>) -> String {
    let template = parse_template(text);
    let mut output = String::with_capacity(text.len());
    for segment in &template.segments {
        match segment {
            Segment::Literal(literal) => output.push_str(literal),
            Segment::Placeholder(name) => match (interpolations.get(name), count) {
                (Some(value), _) => output.push_str(value),
                (None, Some(n)) if name == "count" => output.push_str(&n.to_string()),
                (None, _) => {
                    warn!(placeholder = %name, template = %text, "no value for placeholder");
                    output.push_str("%{");
                    output.push_str(name);
                    output.push('}');
                }
            },
        }
    }
    output
}
