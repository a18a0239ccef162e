//! Generic value primitives: equality, emptiness, index parsing.

use crate::Value;

/// Deep structural equality.
///
/// Containers compare by content, custom stores by identity.
pub fn equal(a: &Value, b: &Value) -> bool {
    a == b
}

/// `true` for values that carry nothing: `Null`, `""` and `NaN`.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Float(f) => f.is_nan(),
        _ => false,
    }
}

/// Parse a member key as an ordered-list index.
///
/// Only plain non-negative decimal integers qualify; anything else is a
/// key, not an index.
pub fn parse_index(key: &str) -> Option<usize> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}
