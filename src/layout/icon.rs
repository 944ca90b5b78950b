//! Icon references of the form `prefix:name`

use super::types::{NodeKind, VisualNode};

/// Glyph shown when a reference cannot be resolved
pub const FALLBACK_GLYPH: &str = "●";

/// Split a reference on its first `:` into non-empty prefix and name
pub fn split_reference(reference: &str) -> Option<(&str, &str)> {
    let (prefix, name) = reference.split_once(':')?;
    if prefix.is_empty() || name.is_empty() {
        return None;
    }
    Some((prefix, name))
}

/// Node for an icon reference: a lookup placeholder keyed by the full
/// reference, or the fallback glyph when the reference is malformed.
pub fn resolve_icon(reference: &str) -> VisualNode {
    match split_reference(reference) {
        Some(_) => VisualNode::new(NodeKind::Icon(reference.to_string())),
        None => VisualNode::glyph("icon-fallback", FALLBACK_GLYPH),
    }
}
