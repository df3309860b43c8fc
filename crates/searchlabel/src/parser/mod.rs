//! Parsers for compound search names and label templates.
//!
//! Compound names (`name_or_email_cont`) are split into a predicate, a
//! combinator and attribute tokens. Label templates (`%{attributes} %{predicate}`)
//! are split into literal text and placeholders for interpolation.

pub mod ast;
mod name;
mod predicate;
mod template;

pub use ast::{Segment, Template};
pub use name::{ParsedExpression, parse_attribute_names};
pub use predicate::PredicateCatalog;
pub use template::parse_template;
