//! Immutable, validated dot-notation access over nested key-value data.
//!
//! `dottree` lets consumers read and write deeply nested values using a
//! flattened path string (`"a.b.c"`) instead of manual tree traversal.
//!
//! # Core Concepts
//!
//! - **DotTree**: a validated tree of nested key-value data. Every mutating
//!   operation returns a new instance; the receiver is never modified.
//! - **DotPath**: a parsed, grammar-checked dot path (`[a-z]+[a-z0-9_-]*`
//!   segments, case-insensitive, joined by `.`).
//! - **Validation**: recursive shape checks reject containers that mix
//!   numeric and non-numeric keys, before any copy or mutation begins.
//!
//! # Copy-on-Write
//!
//! ```text
//! Tree' = op(Tree, args)
//! ```
//!
//! - `set`, `remove`, and `merge` are pure: they never mutate their receiver.
//! - Instances are therefore safe to share across concurrent readers without
//!   locking.
//!
//! # Quick Start
//!
//! ```
//! use dottree::DotTree;
//! use serde_json::json;
//!
//! let tree = DotTree::from_json(r#"{"server": {"host": "localhost", "port": 8080}}"#)?;
//!
//! // Path-addressed reads
//! assert_eq!(tree.get_str("server.host")?, Some("localhost"));
//! assert_eq!(tree.get("server.tls")?, None);
//!
//! // Mutations return a new tree
//! let updated = tree.set("server.tls.enabled", json!(true))?;
//! assert_eq!(updated.get_bool("server.tls.enabled")?, Some(true));
//! assert_eq!(tree.get("server.tls")?, None); // receiver unchanged
//!
//! // Recursive right-biased merge
//! let overrides = DotTree::from_json(r#"{"server": {"port": 9090}}"#)?;
//! let merged = tree.merge(&overrides)?;
//! assert_eq!(merged.get_i64("server.port")?, Some(9090));
//! assert_eq!(merged.get_str("server.host")?, Some("localhost"));
//! # Ok::<(), dottree::DotTreeError>(())
//! ```

mod error;
mod path;
mod tree;
mod validate;

pub use error::{value_type_name, DotResult, DotTreeError};
pub use path::{DotPath, DELIMITER};
pub use tree::DotTree;
pub use validate::{is_valid_data, is_valid_key, is_valid_value};

// Re-export the JSON container types for convenience
pub use serde_json::{Map, Value};
