//! Error types for directive parsing and path evaluation.
//!
//! Callers branch on [`ErrorKind`]; the variants of [`PathError`] carry the
//! detail needed for diagnostics.

use std::fmt;
use thiserror::Error;

/// The three failure classes a validation rule can react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The directive does not denote a usable value for this object.
    InvalidDirective,
    /// The directive has the right prefix but its expression does not parse.
    MalformedExpression,
    /// A matched value cannot be converted to the requested type.
    TypeCoercion,
}

impl ErrorKind {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidDirective => "invalid-directive",
            Self::MalformedExpression => "malformed-expression",
            Self::TypeCoercion => "type-coercion",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a directive was reported as invalid.
///
/// All causes map to [`ErrorKind::InvalidDirective`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidCause {
    /// The string does not start with `jsonpath::`.
    MissingPrefix,
    /// The query resolved to nothing in the target object.
    NotFound,
    /// The target could not be represented as a JSON tree.
    Unrepresentable(String),
}

impl fmt::Display for InvalidCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPrefix => write!(f, "missing 'jsonpath::' prefix"),
            Self::NotFound => write!(f, "path not found in object"),
            Self::Unrepresentable(msg) => write!(f, "object is not traversable: {}", msg),
        }
    }
}

/// Errors produced while building or evaluating a [`Path`](super::Path).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// Not a directive, or nothing matched at evaluation time.
    #[error("invalid JSONPath directive '{input}': {cause}")]
    InvalidDirective {
        /// The directive or query involved
        input: String,
        /// Internal cause, kept for diagnostics
        cause: InvalidCause,
    },

    /// The expression after the prefix is not a valid path expression.
    #[error("malformed JSONPath expression '{query}': {reason}")]
    MalformedExpression {
        /// The normalized query that failed to compile
        query: String,
        /// Parser message
        reason: String,
    },

    /// A matched value has the wrong type.
    #[error("cannot convert match #{index} ({value}) to {expected}")]
    TypeCoercion {
        /// Position of the offending value in the match list
        index: usize,
        /// Requested type name
        expected: &'static str,
        /// The offending value, rendered as JSON
        value: String,
    },
}

impl PathError {
    /// The failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDirective { .. } => ErrorKind::InvalidDirective,
            Self::MalformedExpression { .. } => ErrorKind::MalformedExpression,
            Self::TypeCoercion { .. } => ErrorKind::TypeCoercion,
        }
    }

    pub(crate) fn missing_prefix(input: &str) -> Self {
        Self::InvalidDirective {
            input: input.to_string(),
            cause: InvalidCause::MissingPrefix,
        }
    }

    pub(crate) fn not_found(query: &str) -> Self {
        Self::InvalidDirective {
            input: query.to_string(),
            cause: InvalidCause::NotFound,
        }
    }

    pub(crate) fn malformed(query: &str, reason: impl Into<String>) -> Self {
        Self::MalformedExpression {
            query: query.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for path operations
pub type Result<T> = std::result::Result<T, PathError>;
