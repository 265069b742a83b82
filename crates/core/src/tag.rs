//! Class-marker key grammar.
//!
//! A mapping whose single entry is keyed by a class tag carries an encoded
//! instance rather than literal data. The tag grammar is deliberately
//! strict and the whole angle-bracket key namespace is reserved, so marker
//! syntax can never collide with user data:
//!
//! ```text
//! tag     = "<" ident ("." ident)+ ">"
//! ident   = [A-Za-z_][A-Za-z0-9_]*
//! ```
//!
//! The final segment is the class name; the dot-joined prefix is the module
//! path. The module segment is mandatory: `<geo.Point>` is a tag, `<Point>`
//! is malformed. Keys that start with `<` and end with `>` but do not parse
//! as a tag are rejected on both encode and decode, never passed through as
//! literal data.

use crate::native::ClassId;

/// Format the marker key for a class identity, e.g. `<geo.Point>`.
pub fn format_tag(class: &ClassId) -> String {
    format!("<{}.{}>", class.module, class.name)
}

/// Parse a mapping key as a class tag.
///
/// Returns `None` for any key that is not a well-formed tag, including
/// malformed bracketed keys; use [`is_reserved`] to distinguish those from
/// ordinary literal keys.
pub fn parse_tag(key: &str) -> Option<ClassId> {
    let inner = key.strip_prefix('<')?.strip_suffix('>')?;
    let segments: Vec<&str> = inner.split('.').collect();
    if segments.len() < 2 || !segments.iter().all(|s| is_ident(s)) {
        return None;
    }
    let name = segments[segments.len() - 1];
    let module = segments[..segments.len() - 1].join(".");
    Some(ClassId::new(module, name))
}

/// Check if a key falls in the reserved marker namespace.
///
/// Reserved keys may only appear as the single key of a class marker
/// mapping; anywhere else they are an error.
pub fn is_reserved(key: &str) -> bool {
    key.starts_with('<') && key.ends_with('>')
}

fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
