// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only typed view over a string-keyed mapping.

use crate::domain::errors::{BindingError, Result, ValueKind};
use crate::domain::{TypedListView, TypedValue};
use bigdecimal::BigDecimal;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap, HashSet};

/// An immutable, typed view over a mapping from string keys to values.
///
/// Keys of the raw source are converted to their string form; if two raw keys
/// share a string form the later one wins. Nested maps and lists are wrapped in
/// views at construction time.
///
/// # Examples
///
/// ```
/// use bindenv::domain::TypedMapView;
/// use std::collections::HashMap;
///
/// let view = TypedMapView::of(HashMap::from([("Key", "Value")]));
///
/// assert_eq!(view.get_string("Key").unwrap(), "Value");
/// assert!(view.get_integer("Key").is_err());
/// assert!(view.get_keys().contains("Key"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypedMapView {
    entries: HashMap<String, TypedValue>,
}

impl TypedMapView {
    /// Creates a view from any sequence of key/value pairs.
    pub fn of<I, K, V>(raw: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: ToString,
        V: Into<TypedValue>,
    {
        Self {
            entries: raw
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.into()))
                .collect(),
        }
    }

    /// Creates a view without entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the set of keys. Iteration order is not significant.
    pub fn get_keys(&self) -> HashSet<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Returns `true` if the key is present, even when it maps to null.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the view holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypedValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the stored value, which may be [`TypedValue::Null`].
    ///
    /// # Errors
    ///
    /// Returns `BindingError::KeyNotFound` if the key is absent.
    pub fn get(&self, key: &str) -> Result<&TypedValue> {
        self.entries
            .get(key)
            .ok_or_else(|| BindingError::KeyNotFound {
                key: key.to_string(),
            })
    }

    /// Reads a boolean.
    pub fn get_boolean(&self, key: &str) -> Result<bool> {
        self.read(key, ValueKind::Boolean, TypedValue::as_boolean)
    }

    /// Reads an integer. Doubles and numbers are rejected.
    pub fn get_integer(&self, key: &str) -> Result<i64> {
        self.read(key, ValueKind::Integer, TypedValue::as_integer)
    }

    /// Reads a double; integers are widened.
    pub fn get_double(&self, key: &str) -> Result<f64> {
        self.read(key, ValueKind::Double, TypedValue::as_double)
    }

    /// Reads an arbitrary-precision number; integers and doubles are widened.
    pub fn get_number(&self, key: &str) -> Result<BigDecimal> {
        self.read(key, ValueKind::Number, TypedValue::as_number)
    }

    /// Reads a string.
    pub fn get_string(&self, key: &str) -> Result<&str> {
        self.read(key, ValueKind::String, TypedValue::as_str)
    }

    /// Reads a nested map view.
    pub fn get_map_view(&self, key: &str) -> Result<&TypedMapView> {
        self.read(key, ValueKind::Map, TypedValue::as_map_view)
    }

    /// Reads a nested list view.
    pub fn get_list_view(&self, key: &str) -> Result<&TypedListView> {
        self.read(key, ValueKind::List, TypedValue::as_list_view)
    }

    fn read<'a, T>(
        &'a self,
        key: &str,
        expected: ValueKind,
        read: impl FnOnce(&'a TypedValue) -> Option<T>,
    ) -> Result<T> {
        self.get(key)?
            .read_as(expected, || format!("key '{}'", key), read)
    }
}

impl<K: ToString, V: Into<TypedValue>> FromIterator<(K, V)> for TypedMapView {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl Serialize for TypedMapView {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        // Sorted so serialized output is stable.
        let sorted: BTreeMap<&String, &TypedValue> = self.entries.iter().collect();
        let mut map = serializer.serialize_map(Some(sorted.len()))?;
        for (key, value) in sorted {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> TypedMapView {
        TypedMapView::of(HashMap::from([
            ("null", TypedValue::Null),
            ("bool", TypedValue::from(true)),
            ("int", TypedValue::from(42)),
            ("double", TypedValue::from(13.37)),
            ("string", TypedValue::from("Value")),
        ]))
    }

    #[test]
    fn test_single_string_entry() {
        let view = TypedMapView::of(HashMap::from([("Key", "Value")]));

        assert_eq!(view.get_string("Key").unwrap(), "Value");
        assert!(matches!(
            view.get_integer("Key"),
            Err(BindingError::ValueCast { .. })
        ));
        assert_eq!(view.get_keys(), HashSet::from(["Key"]));
    }

    #[test]
    fn test_typed_accessors() {
        let view = sample();

        assert!(view.get("null").unwrap().is_null());
        assert!(view.get_boolean("bool").unwrap());
        assert_eq!(view.get_integer("int").unwrap(), 42);
        assert_eq!(view.get_double("int").unwrap(), 42.0);
        assert_eq!(view.get_double("double").unwrap(), 13.37);
        assert_eq!(view.get_string("string").unwrap(), "Value");
        assert!(view.get_integer("double").is_err());
        assert!(view.get_boolean("string").is_err());
    }

    #[test]
    fn test_missing_key_for_every_accessor() {
        let view = sample();
        let missing = "absent";

        assert!(matches!(view.get(missing), Err(BindingError::KeyNotFound { .. })));
        assert!(matches!(view.get_boolean(missing), Err(BindingError::KeyNotFound { .. })));
        assert!(matches!(view.get_integer(missing), Err(BindingError::KeyNotFound { .. })));
        assert!(matches!(view.get_double(missing), Err(BindingError::KeyNotFound { .. })));
        assert!(matches!(view.get_number(missing), Err(BindingError::KeyNotFound { .. })));
        assert!(matches!(view.get_string(missing), Err(BindingError::KeyNotFound { .. })));
        assert!(matches!(view.get_map_view(missing), Err(BindingError::KeyNotFound { .. })));
        assert!(matches!(view.get_list_view(missing), Err(BindingError::KeyNotFound { .. })));
    }

    #[test]
    fn test_contains_key_for_null_value() {
        let view = sample();
        assert!(view.contains_key("null"));
        assert!(!view.contains_key("absent"));
    }

    #[test]
    fn test_non_string_keys_are_stringified() {
        let view = TypedMapView::of(vec![(1, "one"), (2, "two")]);
        assert_eq!(view.get_keys(), HashSet::from(["1", "2"]));
        assert_eq!(view.get_string("2").unwrap(), "two");
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let view = TypedMapView::of(vec![("k", "first"), ("k", "second")]);
        assert_eq!(view.len(), 1);
        assert_eq!(view.get_string("k").unwrap(), "second");
    }

    #[test]
    fn test_nested_structures_become_views() {
        let view = TypedMapView::of(HashMap::from([
            ("map", TypedValue::from(HashMap::from([("inner", 1)]))),
            ("list", TypedValue::from(vec!["a", "b", "c"])),
        ]));

        assert_eq!(
            view.get_map_view("map").unwrap().get_keys(),
            HashSet::from(["inner"])
        );
        assert_eq!(view.get_list_view("list").unwrap().get_size(), 3);
        assert!(view.get_map_view("list").is_err());
        assert!(view.get_list_view("map").is_err());
    }

    #[test]
    fn test_keys_are_stable() {
        let view = sample();
        assert_eq!(view.get_keys(), view.get_keys());
        assert_eq!(view.len(), 5);
    }

    #[test]
    fn test_collect_from_iterator() {
        let view: TypedMapView = vec![("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(view.get_integer("b").unwrap(), 2);
    }

    #[test]
    fn test_serialize_sorted() {
        let view = TypedMapView::of(vec![("b", 2), ("a", 1)]);
        assert_eq!(serde_json::to_string(&view).unwrap(), r#"{"a":1,"b":2}"#);
        assert_eq!(serde_json::to_value(&view).unwrap(), json!({"a": 1, "b": 2}));
    }
}
