//! Dynamically typed attribute values.

use std::fmt;

use serde::{Deserialize, Serialize};

pub use serde_json::Value;

/// The kind of value an attribute accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Any value, including null.
    #[default]
    Any,
    /// `true` or `false`.
    Bool,
    /// Integral number.
    Int,
    /// Any number.
    Float,
    /// String.
    Str,
    /// Array.
    List,
    /// Object.
    Map,
}

impl ValueKind {
    /// Returns whether `value` is acceptable for this kind.
    #[must_use]
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Any => true,
            Self::Bool => value.is_boolean(),
            Self::Int => value.is_i64() || value.is_u64(),
            Self::Float => value.is_number(),
            Self::Str => value.is_string(),
            Self::List => value.is_array(),
            Self::Map => value.is_object(),
        }
    }

    /// Names the kind of a concrete value, for error messages.
    #[must_use]
    pub fn describe(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(n) if n.is_f64() => "float",
            Value::Number(_) => "int",
            Value::String(_) => "str",
            Value::Array(_) => "list",
            Value::Object(_) => "map",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "any"),
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::Str => write!(f, "str"),
            Self::List => write!(f, "list"),
            Self::Map => write!(f, "map"),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn int_accepts_only_integers() {
        assert!(ValueKind::Int.accepts(&json!(42)));
        assert!(!ValueKind::Int.accepts(&json!(4.2)));
        assert!(!ValueKind::Int.accepts(&json!("42")));
    }

    #[test]
    fn float_accepts_any_number() {
        assert!(ValueKind::Float.accepts(&json!(1)));
        assert!(ValueKind::Float.accepts(&json!(1.5)));
    }

    #[test]
    fn any_accepts_null() {
        assert!(ValueKind::Any.accepts(&Value::Null));
    }

    #[test]
    fn describe_distinguishes_int_and_float() {
        assert_eq!(ValueKind::describe(&json!(3)), "int");
        assert_eq!(ValueKind::describe(&json!(3.5)), "float");
        assert_eq!(ValueKind::describe(&json!({})), "map");
    }

    #[test]
    fn kinds_parse_lowercase() {
        let kind: ValueKind = serde_json::from_str("\"str\"").expect("parse");
        assert_eq!(kind, ValueKind::Str);
    }
}
