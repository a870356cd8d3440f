//! The path-addressed tree and its copy-on-write operations.
//!
//! [`DotTree`] owns a validated root container. Reads borrow into it; every
//! mutating operation (`set`, `remove`, `merge`) clones the root, edits the
//! clone, and returns a new instance, so the receiver is never modified and
//! no two instances share mutable structure.

use crate::error::{value_type_name, DotResult, DotTreeError};
use crate::path::DotPath;
use crate::validate::{is_valid_data, is_valid_value};
use serde_json::{Map, Value};
use std::str::FromStr;

/// An immutable tree of nested key-value data with dot-path access.
///
/// # Examples
///
/// ```
/// use dottree::DotTree;
/// use serde_json::json;
///
/// let tree = DotTree::from_json(r#"{"server": {"host": "localhost"}}"#)?;
/// assert_eq!(tree.get_str("server.host")?, Some("localhost"));
///
/// let updated = tree.set("server.port", json!(8080))?;
/// assert_eq!(updated.get_i64("server.port")?, Some(8080));
///
/// // The receiver is untouched.
/// assert!(!tree.has("server.port")?);
/// # Ok::<(), dottree::DotTreeError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DotTree {
    root: Map<String, Value>,
}

impl DotTree {
    /// Create an empty tree.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct from a container, validating keys and value shapes.
    ///
    /// Returns [`DotTreeError::InvalidData`] if any top-level key fails the
    /// key grammar or any value fails recursive shape validation.
    pub fn from_map(map: Map<String, Value>) -> DotResult<Self> {
        if !is_valid_data(&map) {
            return Err(DotTreeError::invalid_data(
                "container fails key or value validation",
            ));
        }
        Ok(Self { root: map })
    }

    /// Construct from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> DotResult<Self> {
        match value {
            Value::Object(map) => Self::from_map(map),
            other => Err(DotTreeError::invalid_data(format!(
                "expected an object, found {}",
                value_type_name(&other)
            ))),
        }
    }

    /// Construct from JSON text.
    ///
    /// Returns [`DotTreeError::MalformedInput`] if the text is empty or does
    /// not parse into a JSON object, and [`DotTreeError::InvalidData`] if the
    /// parsed object fails validation.
    pub fn from_json(text: &str) -> DotResult<Self> {
        if text.trim().is_empty() {
            return Err(DotTreeError::malformed_input("empty input"));
        }
        let value: Value =
            serde_json::from_str(text).map_err(|e| DotTreeError::malformed_input(e.to_string()))?;
        match value {
            Value::Object(map) => Self::from_map(map),
            other => Err(DotTreeError::malformed_input(format!(
                "expected a top-level object, found {}",
                value_type_name(&other)
            ))),
        }
    }

    /// Get the node at a path.
    ///
    /// Returns `Ok(None)` when any segment is absent — including a mid-path
    /// segment, or a mid-path value that is not a sub-container. A completed
    /// walk returns whatever node lives there: a scalar, a list, or a full
    /// sub-container (borrowed, not flattened).
    ///
    /// Returns [`DotTreeError::InvalidPath`] if `path` fails the grammar;
    /// a missing path is never an error.
    pub fn get(&self, path: &str) -> DotResult<Option<&Value>> {
        let path = DotPath::parse(path)?;
        Ok(get_in(&self.root, path.segments()))
    }

    /// Get the string at a path, or `None` if missing or not a string.
    pub fn get_str(&self, path: &str) -> DotResult<Option<&str>> {
        Ok(self.get(path)?.and_then(Value::as_str))
    }

    /// Get the integer at a path, or `None` if missing or not an integer.
    pub fn get_i64(&self, path: &str) -> DotResult<Option<i64>> {
        Ok(self.get(path)?.and_then(Value::as_i64))
    }

    /// Get the float at a path, or `None` if missing or not a number.
    pub fn get_f64(&self, path: &str) -> DotResult<Option<f64>> {
        Ok(self.get(path)?.and_then(Value::as_f64))
    }

    /// Get the boolean at a path, or `None` if missing or not a boolean.
    pub fn get_bool(&self, path: &str) -> DotResult<Option<bool>> {
        Ok(self.get(path)?.and_then(Value::as_bool))
    }

    /// Whether the full path resolves to an existing key.
    ///
    /// True even if the value there is `null`, `false`, or an empty
    /// container; false on any missing segment.
    pub fn has(&self, path: &str) -> DotResult<bool> {
        let path = DotPath::parse(path)?;
        Ok(get_in(&self.root, path.segments()).is_some())
    }

    /// The entire root container.
    #[inline]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Consume the tree and return the root container.
    #[inline]
    pub fn into_map(self) -> Map<String, Value> {
        self.root
    }

    /// The root container as an owned JSON value.
    #[inline]
    pub fn to_value(&self) -> Value {
        Value::Object(self.root.clone())
    }

    /// Number of top-level keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Whether the tree has no keys at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Return a new tree with `value` at `path`; the receiver is untouched.
    ///
    /// For each segment except the last, a slot that is missing or holds a
    /// non-container is replaced with a fresh empty container, so setting a
    /// deep path through an existing scalar discards the scalar and builds a
    /// new branch. The final segment's slot is always overwritten.
    ///
    /// Returns [`DotTreeError::InvalidPath`] or [`DotTreeError::InvalidValue`]
    /// before any copy is made.
    pub fn set(&self, path: &str, value: impl Into<Value>) -> DotResult<DotTree> {
        let path = DotPath::parse(path)?;
        let value = value.into();
        if !is_valid_value(&value) {
            return Err(DotTreeError::invalid_value(
                "container with mixed numeric and non-numeric keys",
            ));
        }
        let mut root = self.root.clone();
        set_in(&mut root, path.segments(), value);
        Ok(DotTree { root })
    }

    /// Return a new tree with the node at `path` (and all its descendants)
    /// deleted; the receiver is untouched.
    ///
    /// If any segment along the path does not exist, the removal is a no-op
    /// and the returned tree is structurally equal to the receiver.
    pub fn remove(&self, path: &str) -> DotResult<DotTree> {
        let path = DotPath::parse(path)?;
        let mut root = self.root.clone();
        let _ = remove_in(&mut root, path.segments());
        Ok(DotTree { root })
    }

    /// Recursive right-biased deep merge with another tree.
    ///
    /// For each key in `other`: if both sides hold a container, merge
    /// recursively; otherwise `other`'s value replaces this tree's value
    /// entirely (a scalar may replace a container and vice versa). Keys only
    /// in the receiver are preserved. Neither input is mutated.
    ///
    /// The merged result passes through normal construction validation, so a
    /// merge that produces a mixed-key container fails with
    /// [`DotTreeError::InvalidData`].
    pub fn merge(&self, other: &DotTree) -> DotResult<DotTree> {
        self.merge_map(other.as_map())
    }

    /// Merge a raw JSON value, which must be a valid container.
    ///
    /// Returns [`DotTreeError::InvalidArgument`] if `value` is not an object
    /// or fails container validation; otherwise behaves like [`merge`].
    ///
    /// [`merge`]: DotTree::merge
    pub fn merge_value(&self, value: Value) -> DotResult<DotTree> {
        match value {
            Value::Object(map) => {
                if !is_valid_data(&map) {
                    return Err(DotTreeError::invalid_argument(
                        "merge container fails key or value validation",
                    ));
                }
                self.merge_map(&map)
            }
            other => Err(DotTreeError::invalid_argument(format!(
                "merge argument must be a tree or an object, found {}",
                value_type_name(&other)
            ))),
        }
    }

    fn merge_map(&self, overlay: &Map<String, Value>) -> DotResult<DotTree> {
        let mut merged = self.root.clone();
        merge_into(&mut merged, overlay);
        DotTree::from_map(merged)
    }

    /// Encode the root container as JSON text.
    ///
    /// An empty tree serializes to `{}`. Round-trips through
    /// [`DotTree::from_json`] to an equal tree.
    pub fn to_json(&self) -> DotResult<String> {
        Ok(serde_json::to_string(&self.root)?)
    }
}

impl FromStr for DotTree {
    type Err = DotTreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DotTree::from_json(s)
    }
}

impl TryFrom<Value> for DotTree {
    type Error = DotTreeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        DotTree::from_value(value)
    }
}

/// Walk `segments` through nested objects, returning the node at the end.
///
/// A mid-path value that is not an object makes the remaining segments
/// unresolvable, which reads as absence.
fn get_in<'a>(map: &'a Map<String, Value>, segments: &[String]) -> Option<&'a Value> {
    match segments {
        [] => None,
        [last] => map.get(last),
        [head, rest @ ..] => match map.get(head) {
            Some(Value::Object(child)) => get_in(child, rest),
            _ => None,
        },
    }
}

/// Set `value` at `segments`, replacing any missing or non-object
/// intermediate slot with a fresh empty object.
fn set_in(map: &mut Map<String, Value>, segments: &[String], value: Value) {
    match segments {
        [] => {}
        [last] => {
            map.insert(last.clone(), value);
        }
        [head, rest @ ..] => {
            let slot = map
                .entry(head.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            set_in(slot.as_object_mut().unwrap(), rest, value);
        }
    }
}

/// Try to delete the node at `segments`. Returns true if something was
/// removed, false if any segment was missing.
fn remove_in(map: &mut Map<String, Value>, segments: &[String]) -> bool {
    match segments {
        [] => false,
        [last] => map.remove(last).is_some(),
        [head, rest @ ..] => match map.get_mut(head) {
            Some(Value::Object(child)) => remove_in(child, rest),
            _ => false,
        },
    }
}

/// Right-biased recursive merge: objects on both sides merge key by key,
/// anything else is replaced by the overlay's value.
fn merge_into(base: &mut Map<String, Value>, overlay: &Map<String, Value>) {
    for (key, incoming) in overlay {
        match (base.get_mut(key), incoming) {
            (Some(Value::Object(existing)), Value::Object(patch)) => {
                merge_into(existing, patch);
            }
            _ => {
                base.insert(key.clone(), incoming.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> DotTree {
        DotTree::from_value(json!({
            "server": {"host": "localhost", "port": 8080},
            "debug": false
        }))
        .unwrap()
    }

    #[test]
    fn test_get_scalar_and_subtree() {
        let tree = sample();
        assert_eq!(tree.get("server.port").unwrap(), Some(&json!(8080)));
        assert_eq!(
            tree.get("server").unwrap(),
            Some(&json!({"host": "localhost", "port": 8080}))
        );
    }

    #[test]
    fn test_get_missing_is_none() {
        let tree = sample();
        assert_eq!(tree.get("server.missing").unwrap(), None);
        assert_eq!(tree.get("missing.deeper.still").unwrap(), None);
        // A scalar mid-path reads as absence, not an error.
        assert_eq!(tree.get("debug.nested").unwrap(), None);
    }

    #[test]
    fn test_get_invalid_path() {
        let tree = sample();
        assert!(matches!(
            tree.get(""),
            Err(DotTreeError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_typed_getters() {
        let tree = sample();
        assert_eq!(tree.get_str("server.host").unwrap(), Some("localhost"));
        assert_eq!(tree.get_i64("server.port").unwrap(), Some(8080));
        assert_eq!(tree.get_bool("debug").unwrap(), Some(false));
        // Type mismatch reads as None, not an error.
        assert_eq!(tree.get_str("server.port").unwrap(), None);
        assert_eq!(tree.get_f64("server.host").unwrap(), None);
    }

    #[test]
    fn test_has_counts_falsy_values() {
        let tree = DotTree::from_value(json!({"a": null, "b": false, "c": {}})).unwrap();
        assert!(tree.has("a").unwrap());
        assert!(tree.has("b").unwrap());
        assert!(tree.has("c").unwrap());
        assert!(!tree.has("d").unwrap());
        assert!(!tree.has("c.anything").unwrap());
    }

    #[test]
    fn test_set_creates_intermediate_containers() {
        let tree = DotTree::new();
        let updated = tree.set("a.b.c", json!(42)).unwrap();
        assert_eq!(updated.get("a.b.c").unwrap(), Some(&json!(42)));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_set_overwrites_branch_through_scalar() {
        let tree = DotTree::from_value(json!({"a": 3})).unwrap();
        let updated = tree.set("a.b", json!(5)).unwrap();
        assert_eq!(updated.get("a").unwrap(), Some(&json!({"b": 5})));
    }

    #[test]
    fn test_set_rejects_mixed_container() {
        let tree = DotTree::new();
        let result = tree.set("a", json!({"0": 1, "foo": 2}));
        assert!(matches!(result, Err(DotTreeError::InvalidValue { .. })));
    }

    #[test]
    fn test_remove_leaf_and_subtree() {
        let tree = sample();
        let no_port = tree.remove("server.port").unwrap();
        assert!(!no_port.has("server.port").unwrap());
        assert!(no_port.has("server.host").unwrap());

        let no_server = tree.remove("server").unwrap();
        assert!(!no_server.has("server").unwrap());
        assert!(!no_server.has("server.host").unwrap());
    }

    #[test]
    fn test_remove_missing_path_is_noop() {
        let tree = sample();
        let same = tree.remove("server.missing.deep").unwrap();
        assert_eq!(same, tree);
    }

    #[test]
    fn test_merge_map_helper_right_bias() {
        let mut base = json!({"a": {"x": 1, "y": 2}});
        let overlay = json!({"a": {"y": 9, "z": 3}});
        merge_into(
            base.as_object_mut().unwrap(),
            overlay.as_object().unwrap(),
        );
        assert_eq!(base, json!({"a": {"x": 1, "y": 9, "z": 3}}));
    }

    #[test]
    fn test_to_json_empty_tree() {
        assert_eq!(DotTree::new().to_json().unwrap(), "{}");
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(
            DotTree::from_json(""),
            Err(DotTreeError::MalformedInput { .. })
        ));
        assert!(matches!(
            DotTree::from_json("   "),
            Err(DotTreeError::MalformedInput { .. })
        ));
        assert!(matches!(
            DotTree::from_json("not json"),
            Err(DotTreeError::MalformedInput { .. })
        ));
        assert!(matches!(
            DotTree::from_json("[1, 2]"),
            Err(DotTreeError::MalformedInput { .. })
        ));
        assert!(matches!(
            DotTree::from_json(r#"{"0bad": 1}"#),
            Err(DotTreeError::InvalidData { .. })
        ));
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        assert!(matches!(
            DotTree::from_value(json!([1, 2, 3])),
            Err(DotTreeError::InvalidData { .. })
        ));
    }
}
