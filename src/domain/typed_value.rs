// SPDX-License-Identifier: MIT OR Apache-2.0

//! The closed set of values a typed view can hold.
//!
//! Raw trees (JSON documents, YAML documents, or plain Rust collections) are
//! converted into `TypedValue` exactly once, when a view is constructed. Nested
//! maps and lists become [`TypedMapView`] and [`TypedListView`] instances at that
//! point, so readers never inspect raw data again.

use crate::domain::errors::{BindingError, Result, ValueKind};
use crate::domain::{TypedListView, TypedMapView};
use bigdecimal::BigDecimal;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::str::FromStr;

/// A single value stored in a typed view.
///
/// # Examples
///
/// ```
/// use bindenv::domain::TypedValue;
///
/// let value = TypedValue::from(42);
/// assert_eq!(value.as_integer(), Some(42));
/// assert_eq!(value.as_double(), Some(42.0));
/// assert_eq!(value.as_boolean(), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum TypedValue {
    /// The absent value.
    Null,
    /// A boolean.
    Boolean(bool),
    /// A fixed-width integer.
    Integer(i64),
    /// A floating point number.
    Double(f64),
    /// An arbitrary-precision decimal number.
    Number(BigDecimal),
    /// A string.
    String(String),
    /// A nested list.
    List(TypedListView),
    /// A nested map.
    Map(TypedMapView),
}

impl TypedValue {
    /// Returns the category of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Double(_) => ValueKind::Double,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::List(_) => ValueKind::List,
            Self::Map(_) => ValueKind::Map,
        }
    }

    /// Returns `true` if this is the null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Reads the value as a boolean.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Reads the value as an integer. Only integers qualify.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Reads the value as a double. Integers are widened.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Reads the value as an arbitrary-precision number.
    ///
    /// Integers and finite doubles are widened; a double is converted from its
    /// shortest decimal representation, so `13.37` stays `13.37`.
    pub fn as_number(&self) -> Option<BigDecimal> {
        match self {
            Self::Integer(i) => Some(BigDecimal::from(*i)),
            Self::Double(d) if d.is_finite() => BigDecimal::from_str(&d.to_string()).ok(),
            Self::Number(n) => Some(n.clone()),
            _ => None,
        }
    }

    /// Reads the value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Reads the value as a nested list view.
    pub fn as_list_view(&self) -> Option<&TypedListView> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// Reads the value as a nested map view.
    pub fn as_map_view(&self) -> Option<&TypedMapView> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Applies `read` and turns a mismatch into a `ValueCast` error located by `location`.
    pub(crate) fn read_as<'a, T>(
        &'a self,
        expected: ValueKind,
        location: impl FnOnce() -> String,
        read: impl FnOnce(&'a TypedValue) -> Option<T>,
    ) -> Result<T> {
        read(self).ok_or_else(|| BindingError::value_cast(location(), expected, self.kind()))
    }
}

impl Serialize for TypedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Double(d) => serializer.serialize_f64(*d),
            Self::Number(n) => n.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::List(list) => list.serialize(serializer),
            Self::Map(map) => map.serialize(serializer),
        }
    }
}

impl From<()> for TypedValue {
    fn from(_: ()) -> Self {
        TypedValue::Null
    }
}

impl From<bool> for TypedValue {
    fn from(b: bool) -> Self {
        TypedValue::Boolean(b)
    }
}

impl From<i32> for TypedValue {
    fn from(i: i32) -> Self {
        TypedValue::Integer(i64::from(i))
    }
}

impl From<u32> for TypedValue {
    fn from(i: u32) -> Self {
        TypedValue::Integer(i64::from(i))
    }
}

impl From<i64> for TypedValue {
    fn from(i: i64) -> Self {
        TypedValue::Integer(i)
    }
}

impl From<u64> for TypedValue {
    fn from(u: u64) -> Self {
        match i64::try_from(u) {
            Ok(i) => TypedValue::Integer(i),
            Err(_) => TypedValue::Number(BigDecimal::from(u)),
        }
    }
}

impl From<f64> for TypedValue {
    fn from(d: f64) -> Self {
        TypedValue::Double(d)
    }
}

impl From<BigDecimal> for TypedValue {
    fn from(n: BigDecimal) -> Self {
        TypedValue::Number(n)
    }
}

impl From<String> for TypedValue {
    fn from(s: String) -> Self {
        TypedValue::String(s)
    }
}

impl From<&str> for TypedValue {
    fn from(s: &str) -> Self {
        TypedValue::String(s.to_string())
    }
}

impl From<TypedListView> for TypedValue {
    fn from(list: TypedListView) -> Self {
        TypedValue::List(list)
    }
}

impl From<TypedMapView> for TypedValue {
    fn from(map: TypedMapView) -> Self {
        TypedValue::Map(map)
    }
}

impl<T: Into<TypedValue>> From<Option<T>> for TypedValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(TypedValue::Null, Into::into)
    }
}

impl<T: Into<TypedValue>> From<Vec<T>> for TypedValue {
    fn from(items: Vec<T>) -> Self {
        TypedValue::List(TypedListView::of(items))
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for TypedValue
where
    K: ToString,
    V: Into<TypedValue>,
{
    fn from(map: HashMap<K, V, S>) -> Self {
        TypedValue::Map(TypedMapView::of(map))
    }
}

impl From<serde_json::Value> for TypedValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => TypedValue::Null,
            Value::Bool(b) => TypedValue::Boolean(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    TypedValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    TypedValue::Number(BigDecimal::from(u))
                } else {
                    n.as_f64().map_or(TypedValue::Null, TypedValue::Double)
                }
            }
            Value::String(s) => TypedValue::String(s),
            Value::Array(items) => TypedValue::List(TypedListView::of(items)),
            Value::Object(map) => TypedValue::Map(TypedMapView::of(map)),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Value> for TypedValue {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::Null => TypedValue::Null,
            Value::Bool(b) => TypedValue::Boolean(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    TypedValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    TypedValue::Number(BigDecimal::from(u))
                } else {
                    n.as_f64().map_or(TypedValue::Null, TypedValue::Double)
                }
            }
            Value::String(s) => TypedValue::String(s),
            Value::Sequence(items) => TypedValue::List(TypedListView::of(items)),
            Value::Mapping(map) => TypedValue::Map(TypedMapView::of(
                map.into_iter().map(|(k, v)| (yaml_key(k), v)),
            )),
            Value::Tagged(tagged) => TypedValue::from(tagged.value),
        }
    }
}

/// YAML allows non-string keys; they are stored under their string form.
#[cfg(feature = "yaml")]
fn yaml_key(key: serde_yaml::Value) -> String {
    use serde_yaml::Value;

    match key {
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        Value::Tagged(tagged) => yaml_key(tagged.value),
        other => match serde_yaml::to_string(&other) {
            Ok(s) => s.trim_end().to_string(),
            Err(e) => {
                tracing::debug!("Cannot render YAML key {:?}: {}", other, e);
                format!("{:?}", other)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_widens_to_double_and_number() {
        let value = TypedValue::from(42);
        assert_eq!(value.as_integer(), Some(42));
        assert_eq!(value.as_double(), Some(42.0));
        assert_eq!(value.as_number(), Some(BigDecimal::from(42)));
        assert_eq!(value.as_boolean(), None);
        assert_eq!(value.as_str(), None);
    }

    #[test]
    fn test_double_widens_to_number_only() {
        let value = TypedValue::from(13.37);
        assert_eq!(value.as_integer(), None);
        assert_eq!(value.as_double(), Some(13.37));
        assert_eq!(
            value.as_number(),
            Some(BigDecimal::from_str("13.37").unwrap())
        );
    }

    #[test]
    fn test_non_finite_double_is_not_a_number() {
        assert_eq!(TypedValue::from(f64::NAN).as_number(), None);
        assert_eq!(TypedValue::from(f64::INFINITY).as_number(), None);
    }

    #[test]
    fn test_number_does_not_narrow() {
        let value = TypedValue::from(BigDecimal::from_str("1.5").unwrap());
        assert_eq!(value.as_integer(), None);
        assert_eq!(value.as_double(), None);
        assert_eq!(value.kind(), ValueKind::Number);
    }

    #[test]
    fn test_option_and_unit_are_null() {
        assert!(TypedValue::from(()).is_null());
        assert!(TypedValue::from(None::<bool>).is_null());
        assert_eq!(TypedValue::from(Some("x")).as_str(), Some("x"));
    }

    #[test]
    fn test_large_unsigned_becomes_number() {
        let value = TypedValue::from(u64::MAX);
        assert_eq!(value.kind(), ValueKind::Number);
        assert_eq!(TypedValue::from(7_u64).kind(), ValueKind::Integer);
    }

    #[test]
    fn test_from_json_nests_views() {
        let value = TypedValue::from(json!({
            "uri": "postgres://localhost",
            "port": 5432,
            "ratio": 0.5,
            "tags": ["db", "sql"],
            "extra": null,
        }));

        let map = value.as_map_view().unwrap();
        assert_eq!(map.len(), 5);
        assert_eq!(map.get("port").unwrap().kind(), ValueKind::Integer);
        assert_eq!(map.get("ratio").unwrap().kind(), ValueKind::Double);
        assert_eq!(map.get_list_view("tags").unwrap().get_size(), 2);
        assert!(map.get("extra").unwrap().is_null());
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_from_yaml_stringifies_keys() {
        let yaml: serde_yaml::Value = serde_yaml::from_str("1: one\ntrue: yes\nname: x\n").unwrap();
        let value = TypedValue::from(yaml);
        let map = value.as_map_view().unwrap();

        assert_eq!(map.get_string("1").unwrap(), "one");
        assert!(map.contains_key("true"));
        assert_eq!(map.get_string("name").unwrap(), "x");
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_yaml_collection_key_is_rendered() {
        let key = serde_yaml::Value::Sequence(vec!["a".into(), "b".into()]);
        let rendered = yaml_key(key);
        assert!(rendered.contains('a') && rendered.contains('b'));

        let yaml: serde_yaml::Value = serde_yaml::from_str("[a, b]: v\n").unwrap();
        let value = TypedValue::from(yaml);
        let map = value.as_map_view().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get_string(&rendered).unwrap(), "v");
    }

    #[test]
    fn test_read_as_reports_both_kinds() {
        let value = TypedValue::from("text");
        let err = value
            .read_as(ValueKind::Boolean, || "index 0".to_string(), TypedValue::as_boolean)
            .unwrap_err();

        match err {
            BindingError::ValueCast {
                location,
                expected,
                actual,
            } => {
                assert_eq!(location, "index 0");
                assert_eq!(expected, ValueKind::Boolean);
                assert_eq!(actual, ValueKind::String);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_serialize_to_json() {
        let value = TypedValue::from(json!({"a": [1, true, null, "s"]}));
        let serialized = serde_json::to_value(&value).unwrap();
        assert_eq!(serialized, json!({"a": [1, true, null, "s"]}));
    }
}
