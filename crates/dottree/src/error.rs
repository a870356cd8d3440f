//! Error types for dottree operations.

use thiserror::Error;

/// Result type alias for dottree operations.
pub type DotResult<T> = Result<T, DotTreeError>;

/// Errors that can occur during dottree operations.
///
/// Every failure is reported at the public operation boundary, before any
/// copy or mutation of the receiving tree begins.
#[derive(Debug, Error)]
pub enum DotTreeError {
    /// Construction text is empty or does not parse into a JSON object.
    #[error("malformed input: {message}")]
    MalformedInput {
        /// Description of what went wrong.
        message: String,
    },

    /// A container failed key-grammar or value-shape validation.
    #[error("invalid data: {message}")]
    InvalidData {
        /// Description of the failing key or shape.
        message: String,
    },

    /// A path argument does not satisfy the dot-path grammar.
    #[error("invalid path: {path:?}")]
    InvalidPath {
        /// The offending path text.
        path: String,
    },

    /// A value argument failed recursive shape validation.
    #[error("invalid value: {message}")]
    InvalidValue {
        /// Description of the failing shape.
        message: String,
    },

    /// A merge argument is neither a tree nor a valid container.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of what went wrong.
        message: String,
    },

    /// JSON serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DotTreeError {
    /// Create a malformed input error.
    #[inline]
    pub fn malformed_input(message: impl Into<String>) -> Self {
        DotTreeError::MalformedInput {
            message: message.into(),
        }
    }

    /// Create an invalid data error.
    #[inline]
    pub fn invalid_data(message: impl Into<String>) -> Self {
        DotTreeError::InvalidData {
            message: message.into(),
        }
    }

    /// Create an invalid path error.
    #[inline]
    pub fn invalid_path(path: impl Into<String>) -> Self {
        DotTreeError::InvalidPath { path: path.into() }
    }

    /// Create an invalid value error.
    #[inline]
    pub fn invalid_value(message: impl Into<String>) -> Self {
        DotTreeError::InvalidValue {
            message: message.into(),
        }
    }

    /// Create an invalid argument error.
    #[inline]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        DotTreeError::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Get the type name of a JSON value.
#[inline]
pub fn value_type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
