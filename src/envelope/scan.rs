//! Field extraction from raw envelope text.
//!
//! The grammar is deliberately small:
//!
//! ```text
//! field   := ... "<" tag ">" content "</" tag ">" ...
//! content := any text up to the first matching close tag
//! ```
//!
//! Only the first opening tag counts, and the close tag is searched for
//! after it. Namespaces, attributes and nesting are not interpreted. A
//! field that cannot be found, or whose content is empty, is reported as
//! [`Field::Absent`], and the caller picks a default through
//! [`MissingField`]. Whitespace-only content is present and must parse.

use super::types::DecodeError;
use super::xml::unescape;

/// Outcome of looking up one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<'a> {
    /// Raw (still escaped) text between the tags.
    Present(&'a str),
    /// No opening tag, no close tag after it, or nothing between them.
    Absent,
}

/// What an absent field decodes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField<T> {
    /// Use this value instead.
    Default(T),
}

impl<T> MissingField<T> {
    fn resolve(self) -> T {
        match self {
            MissingField::Default(v) => v,
        }
    }
}

/// Locate `<tag>` and the first `</tag>` after it.
pub fn find_field<'a>(doc: &'a str, tag: &str) -> Field<'a> {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);

    let Some(start) = doc.find(&open).map(|i| i + open.len()) else {
        return Field::Absent;
    };
    let Some(len) = doc[start..].find(&close) else {
        return Field::Absent;
    };
    if len == 0 {
        Field::Absent
    } else {
        Field::Present(&doc[start..start + len])
    }
}

/// Whether `doc` contains an opening `<tag>`.
pub fn has_tag(doc: &str, tag: &str) -> bool {
    doc.contains(&format!("<{}>", tag))
}

/// Unescaped text of a field, if present.
pub fn text_field(doc: &str, tag: &str) -> Option<String> {
    match find_field(doc, tag) {
        Field::Present(raw) => Some(unescape(raw)),
        Field::Absent => None,
    }
}

/// Comma-separated integer list. Tokens are trimmed before parsing.
pub fn int_list_field(
    doc: &str,
    tag: &'static str,
    missing: MissingField<Vec<i64>>,
) -> Result<Vec<i64>, DecodeError> {
    match find_field(doc, tag) {
        Field::Present(raw) => unescape(raw)
            .split(',')
            .map(|token| parse_int(tag, token))
            .collect(),
        Field::Absent => Ok(missing.resolve()),
    }
}

/// Single integer.
pub fn int_field(
    doc: &str,
    tag: &'static str,
    missing: MissingField<i64>,
) -> Result<i64, DecodeError> {
    match find_field(doc, tag) {
        Field::Present(raw) => parse_int(tag, &unescape(raw)),
        Field::Absent => Ok(missing.resolve()),
    }
}

fn parse_int(field: &'static str, token: &str) -> Result<i64, DecodeError> {
    let token = token.trim();
    token.parse().map_err(|_| DecodeError::InvalidNumber {
        field,
        token: token.to_string(),
    })
}
