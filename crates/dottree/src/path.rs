//! Dot-delimited path representation for addressing nodes in a tree.
//!
//! A path is one or more keys joined by `.`, where every key matches the
//! key grammar (`[a-z]+[a-z0-9_-]*`, case-insensitive). The empty path is
//! invalid, and so is any path with an empty segment (`"a..b"`).

use crate::error::{DotResult, DotTreeError};
use crate::validate::is_valid_key;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The segment delimiter in path strings.
pub const DELIMITER: char = '.';

/// A validated, dot-delimited path.
///
/// A `DotPath` can only be obtained through [`DotPath::parse`], so holding
/// one is proof that every segment satisfies the key grammar.
///
/// # Examples
///
/// ```
/// use dottree::DotPath;
///
/// let path = DotPath::parse("server.http.port")?;
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.first(), Some("server"));
/// assert_eq!(path.last(), Some("port"));
/// assert_eq!(path.to_string(), "server.http.port");
/// # Ok::<(), dottree::DotTreeError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DotPath(Vec<String>);

impl DotPath {
    /// Parse and validate a path string.
    ///
    /// Returns [`DotTreeError::InvalidPath`] if the string is empty or any
    /// segment fails the key grammar.
    pub fn parse(path: &str) -> DotResult<Self> {
        if path.is_empty() {
            return Err(DotTreeError::invalid_path(path));
        }
        let segments: Vec<String> = path.split(DELIMITER).map(str::to_owned).collect();
        if segments.iter().any(|seg| !is_valid_key(seg)) {
            return Err(DotTreeError::invalid_path(path));
        }
        Ok(DotPath(segments))
    }

    /// Whether a path string satisfies the path grammar. No side effects.
    #[inline]
    pub fn is_valid(path: &str) -> bool {
        !path.is_empty() && path.split(DELIMITER).all(is_valid_key)
    }

    /// Get the segments of this path.
    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Get the number of segments in this path. Always at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get the first segment.
    #[inline]
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Get the last segment.
    #[inline]
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Iterate over the segments.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for DotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl FromStr for DotPath {
    type Err = DotTreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DotPath::parse(s)
    }
}

impl TryFrom<&str> for DotPath {
    type Error = DotTreeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        DotPath::parse(s)
    }
}

impl<'a> IntoIterator for &'a DotPath {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for DotPath {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

// Serialized as the dot-joined string; deserialization re-validates.
impl Serialize for DotPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DotPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        DotPath::parse(&text).map_err(serde::de::Error::custom)
    }
}
