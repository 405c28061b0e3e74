//! Path: a compiled directive plus the matches of its last evaluation.

use crate::validation::coerce::Coerce;
use crate::validation::directive;
use crate::validation::error::{InvalidCause, PathError, Result};
use crate::validation::query::CompiledQuery;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// A validated path directive.
///
/// ```rust
/// use serde_json::json;
/// use template_validator::validation::Path;
///
/// # fn main() -> Result<(), template_validator::validation::PathError> {
/// let vm = json!({ "spec": { "domain": { "machine": { "type": "q35" } } } });
/// let mut path = Path::new("jsonpath::.spec.domain.machine.type")?;
/// path.find(&vm)?;
/// assert_eq!(path.as_string()?, vec!["q35".to_string()]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Path {
    query: String,
    compiled: CompiledQuery,
    matches: Vec<Value>,
}

impl Path {
    /// Build a path from a raw directive string.
    ///
    /// Fails with `InvalidDirective` when the `jsonpath::` prefix is missing
    /// and with `MalformedExpression` when the expression does not compile.
    pub fn new(raw: &str) -> Result<Self> {
        let query = directive::normalize(raw)?;
        let compiled = CompiledQuery::compile(&query)?;
        log::debug!("built path {} from directive '{}'", query, raw);
        Ok(Self {
            query,
            compiled,
            matches: Vec::new(),
        })
    }

    /// The normalized `{...}` query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Evaluate against a target object, replacing the previous matches.
    ///
    /// A query naming a field that is absent fails with `InvalidDirective`.
    /// A wildcard, slice or filter over an existing but empty container
    /// succeeds with no matches.
    pub fn find(&mut self, target: &Value) -> Result<()> {
        self.matches.clear();
        let nodes = self.compiled.query(target);
        if nodes.is_empty() {
            if self.compiled.container_exists(target) {
                log::trace!("{} selected no elements", self.query);
                return Ok(());
            }
            log::trace!("{} matched nothing", self.query);
            return Err(PathError::not_found(&self.query));
        }
        self.matches = nodes.into_iter().cloned().collect();
        log::trace!("{} matched {} value(s)", self.query, self.matches.len());
        Ok(())
    }

    /// Evaluate against any serializable object.
    pub fn find_object<T: Serialize + ?Sized>(&mut self, target: &T) -> Result<()> {
        let tree = serde_json::to_value(target).map_err(|e| {
            self.matches.clear();
            PathError::InvalidDirective {
                input: self.query.clone(),
                cause: InvalidCause::Unrepresentable(e.to_string()),
            }
        })?;
        self.find(&tree)
    }

    /// Number of values matched by the last successful evaluation.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// True when the last evaluation matched nothing, or before any.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// The raw matched values, in document order.
    pub fn matches(&self) -> &[Value] {
        &self.matches
    }

    /// Convert every match to `T`.
    ///
    /// All-or-nothing: the first value that does not convert fails the call.
    pub fn values<T: Coerce>(&self) -> Result<Vec<T>> {
        self.matches
            .iter()
            .enumerate()
            .map(|(index, value)| {
                T::coerce(value).ok_or_else(|| PathError::TypeCoercion {
                    index,
                    expected: T::TYPE_NAME,
                    value: value.to_string(),
                })
            })
            .collect()
    }

    /// Matches as integers; quantity strings such as "1Gi" are accepted.
    pub fn as_i64(&self) -> Result<Vec<i64>> {
        self.values()
    }

    /// Matches as strings.
    pub fn as_string(&self) -> Result<Vec<String>> {
        self.values()
    }

    /// Matches as booleans.
    pub fn as_bool(&self) -> Result<Vec<bool>> {
        self.values()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.query)
    }
}
