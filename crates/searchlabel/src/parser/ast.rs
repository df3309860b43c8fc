//! Public AST types for label templates.

/// A parsed label template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

impl Template {
    /// A template with no placeholders.
    pub fn literal(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self { segments: vec![] };
        }
        Self {
            segments: vec![Segment::Literal(text)],
        }
    }

    /// Names of every placeholder, in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, with `%%` escapes already collapsed.
    Literal(String),
    /// A `%{name}` placeholder.
    Placeholder(String),
}
