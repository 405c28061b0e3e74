//! Conversion of matched values into scalar types.

use crate::validation::quantity::parse_quantity;
use serde_json::Value;

/// A scalar type that matched values can be converted into.
pub trait Coerce: Sized {
    /// Type name used in error messages.
    const TYPE_NAME: &'static str;

    /// Convert a matched value, or `None` if it has the wrong shape.
    fn coerce(value: &Value) -> Option<Self>;
}

impl Coerce for i64 {
    const TYPE_NAME: &'static str = "i64";

    fn coerce(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            Value::String(s) => parse_quantity(s),
            _ => None,
        }
    }
}

impl Coerce for String {
    const TYPE_NAME: &'static str = "string";

    fn coerce(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl Coerce for bool {
    const TYPE_NAME: &'static str = "bool";

    fn coerce(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}
