//! Constructor argument bags.
//!
//! Arguments arrive either as discrete key/value pairs or as a single
//! configuration bundle. Both end up as one ordered map, from which the
//! reserved traits key can be extracted before composing.

use serde_json::Map;
use traitmix_common::error::{Result, TraitmixError};
use traitmix_core::Value;

/// Keyed constructor arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstructorArgs {
    values: Map<String, Value>,
}

impl ConstructorArgs {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects discrete key/value pairs. A repeated key keeps the last value.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Unpacks a configuration bundle.
    ///
    /// # Errors
    ///
    /// Returns `TraitmixError::InvalidArguments` if `bundle` is not an object.
    pub fn from_bundle(bundle: Value) -> Result<Self> {
        match bundle {
            Value::Object(values) => Ok(Self { values }),
            other => Err(TraitmixError::InvalidArguments {
                message: format!(
                    "expected a key/value bundle, got {}",
                    traitmix_core::ValueKind::describe(&other)
                ),
            }),
        }
    }

    /// Sets one argument, returning the bag.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets one argument.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let _ = self.values.insert(key.into(), value.into());
    }

    /// Merges every entry of `other`, overwriting on key collisions.
    pub fn extend(&mut self, other: Self) {
        self.values.extend(other.values);
    }

    /// Returns one argument.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Borrows the underlying map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Removes the reserved `key` and returns the trait names it carried.
    ///
    /// Absent or null yields no traits; a string yields one; an array of
    /// strings yields them in order. Duplicates are returned as given.
    ///
    /// # Errors
    ///
    /// Returns `TraitmixError::InvalidIdentifier` if the value, or any array
    /// element, is not a string. The key is removed either way.
    pub fn take_traits(&mut self, key: &str) -> Result<Vec<String>> {
        match self.values.remove(key) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::String(name)) => Ok(vec![name]),
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(name) => Ok(name),
                    other => Err(TraitmixError::InvalidIdentifier {
                        raw: other.to_string(),
                    }),
                })
                .collect(),
            Some(other) => Err(TraitmixError::InvalidIdentifier {
                raw: other.to_string(),
            }),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ConstructorArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn pairs_and_bundle_agree() {
        let pairs = ConstructorArgs::from_pairs([("foo", json!(42)), ("bar", json!("x"))]);
        let bundle = ConstructorArgs::from_bundle(json!({"foo": 42, "bar": "x"})).expect("bundle");
        assert_eq!(pairs, bundle);
    }

    #[test]
    fn non_object_bundle_is_rejected() {
        let err = ConstructorArgs::from_bundle(json!([1, 2])).unwrap_err();
        assert!(matches!(err, TraitmixError::InvalidArguments { .. }));
    }

    #[test]
    fn take_traits_accepts_single_string() {
        let mut args = ConstructorArgs::new().with("traits", "Role").with("foo", 1);
        assert_eq!(args.take_traits("traits").expect("take"), ["Role"]);
        assert!(args.get("traits").is_none());
        assert_eq!(args.len(), 1);
    }

    #[test]
    fn take_traits_accepts_ordered_list() {
        let mut args = ConstructorArgs::new().with("traits", json!(["B", "A", "B"]));
        assert_eq!(args.take_traits("traits").expect("take"), ["B", "A", "B"]);
    }

    #[test]
    fn take_traits_absent_or_null_is_empty() {
        let mut absent = ConstructorArgs::new();
        assert!(absent.take_traits("traits").expect("absent").is_empty());
        let mut null = ConstructorArgs::new().with("traits", Value::Null);
        assert!(null.take_traits("traits").expect("null").is_empty());
        assert!(null.is_empty());
    }

    #[test]
    fn take_traits_rejects_non_string_entries() {
        let mut args = ConstructorArgs::new().with("traits", json!(["Role", 7]));
        let err = args.take_traits("traits").unwrap_err();
        assert!(matches!(err, TraitmixError::InvalidIdentifier { ref raw } if raw == "7"));
        assert!(args.is_empty());
    }

    #[test]
    fn take_traits_rejects_scalar_and_object_values() {
        for value in [json!(7), json!({}), json!(true)] {
            let raw = value.to_string();
            let mut args = ConstructorArgs::new().with("traits", value).with("foo", 1);
            let err = args.take_traits("traits").unwrap_err();
            assert!(matches!(err, TraitmixError::InvalidIdentifier { raw: ref got } if *got == raw));
            assert_eq!(args.get("traits"), None);
            assert_eq!(args.len(), 1);
        }
    }

    #[test]
    fn extend_overwrites_colliding_keys() {
        let mut args = ConstructorArgs::new().with("foo", 1);
        args.extend(ConstructorArgs::new().with("foo", 2).with("bar", 3));
        assert_eq!(args.get("foo"), Some(&json!(2)));
        assert_eq!(args.len(), 2);
    }
}
