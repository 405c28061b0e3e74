//! Annotation-style path directives for virtual machine templates.
//!
//! Validation rules refer to fields of the object under validation with
//! directives like `jsonpath::.spec.domain.resources.requests.memory`.
//! This module recognizes those directives, evaluates them against an object
//! tree and hands back typed values.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use template_validator::validation::{ErrorKind, Path};
//!
//! let vm = json!({
//!     "spec": { "domain": { "resources": { "requests": { "memory": "1Gi" } } } }
//! });
//!
//! let mut path = Path::new("jsonpath::.spec.domain.resources.requests.memory").unwrap();
//! path.find(&vm).unwrap();
//! assert_eq!(path.as_i64().unwrap(), vec![1073741824]);
//!
//! let err = Path::new("$.spec.domain").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidDirective);
//! ```

pub mod coerce;
pub mod directive;
pub mod error;
pub mod path;
pub mod quantity;
pub mod query;

pub use coerce::Coerce;
pub use directive::{DIRECTIVE_PREFIX, is_directive, normalize};
pub use error::{ErrorKind, InvalidCause, PathError};
pub use path::Path;
pub use quantity::parse_quantity;
