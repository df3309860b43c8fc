//! Label template parser using winnow.
//!
//! Handles:
//! - Literal text
//! - `%{name}` placeholders
//! - The `%%` escape for a literal percent sign
//!
//! The grammar is total: an unterminated or malformed placeholder is kept as
//! literal text rather than rejected.

use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use super::ast::{Segment, Template};

/// Parse a label template into literal and placeholder segments.
///
/// # Example
///
/// ```
/// use searchlabel::parser::{Segment, parse_template};
///
/// let t = parse_template("%{attributes} %{predicate}");
/// assert_eq!(
///     t.segments,
///     vec![
///         Segment::Placeholder("attributes".into()),
///         Segment::Literal(" ".into()),
///         Segment::Placeholder("predicate".into()),
///     ]
/// );
/// ```
pub fn parse_template(input: &str) -> Template {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(t) if remaining.is_empty() => t,
        _ => Template::literal(input),
    }
}

fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other @ Segment::Placeholder(_) => result.push(other),
        }
    }

    result
}

fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((escaped_percent, placeholder, literal_char)).parse_next(input)
}

fn escaped_percent(input: &mut &str) -> ModalResult<Segment> {
    "%%".value(Segment::Literal("%".to_string()))
        .parse_next(input)
}

fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited("%{", placeholder_name, '}')
        .map(|name: &str| Segment::Placeholder(name.to_string()))
        .parse_next(input)
}

fn placeholder_name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_alphanumeric() || c == '_').parse_next(input)
}

fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}
