//! Recursive key-grammar and value-shape validation.
//!
//! Keys must start with a letter and may continue with letters, digits,
//! hyphen, or underscore. Containers must be either a pure map (no numeric
//! keys) or a pure list (all numeric keys); mixed containers are rejected.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

static KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z]+[a-z0-9_-]*$").unwrap());

/// Check a single key against the key grammar.
///
/// The same grammar applies to every segment of a dot path.
#[inline]
pub fn is_valid_key(key: &str) -> bool {
    KEY_PATTERN.is_match(key)
}

/// Whether a key is the string form of a non-negative integer.
fn is_numeric_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}

/// Recursively check a value's shape.
///
/// Scalars (including `null`) are always valid. Arrays are valid when every
/// element is. Objects are valid when every member value is and the object's
/// keys are either all numeric (a list encoded as a mapping) or none numeric
/// (a sub-tree).
pub fn is_valid_value(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => true,
        Value::Array(items) => items.iter().all(is_valid_value),
        Value::Object(map) => {
            let numeric = map.keys().filter(|k| is_numeric_key(k)).count();
            (numeric == 0 || numeric == map.len()) && map.values().all(is_valid_value)
        }
    }
}

/// Check a top-level container: every key passes the key grammar and every
/// value passes recursive shape validation.
pub fn is_valid_data(data: &Map<String, Value>) -> bool {
    data.iter()
        .all(|(key, value)| is_valid_key(key) && is_valid_value(value))
}
