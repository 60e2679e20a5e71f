// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only typed view over an ordered sequence.

use crate::domain::errors::{BindingError, Result, ValueKind};
use crate::domain::{TypedMapView, TypedValue};
use bigdecimal::BigDecimal;
use serde::{Serialize, Serializer};

/// An immutable, typed view over an ordered sequence of values.
///
/// Source order and duplicates are preserved. Accessors use the same numeric
/// widening rules as [`TypedMapView`].
///
/// # Examples
///
/// ```
/// use bindenv::domain::{TypedListView, TypedValue};
///
/// let view = TypedListView::of(vec![
///     TypedValue::Null,
///     TypedValue::from(true),
///     TypedValue::from(42),
/// ]);
///
/// assert_eq!(view.get_size(), 3);
/// assert!(view.get(0).unwrap().is_null());
/// assert!(view.get_boolean(1).unwrap());
/// assert!(view.get_boolean(2).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypedListView {
    items: Vec<TypedValue>,
}

impl TypedListView {
    /// Creates a view from any sequence of values.
    pub fn of<I, V>(raw: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<TypedValue>,
    {
        Self {
            items: raw.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the number of elements.
    pub fn get_size(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the view holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the elements in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, TypedValue> {
        self.items.iter()
    }

    /// Returns the stored value, which may be [`TypedValue::Null`].
    ///
    /// # Errors
    ///
    /// Returns `BindingError::IndexNotFound` if `index >= get_size()`.
    pub fn get(&self, index: usize) -> Result<&TypedValue> {
        self.items.get(index).ok_or(BindingError::IndexNotFound {
            index,
            size: self.items.len(),
        })
    }

    /// Reads a boolean.
    pub fn get_boolean(&self, index: usize) -> Result<bool> {
        self.read(index, ValueKind::Boolean, TypedValue::as_boolean)
    }

    /// Reads an integer. Doubles and numbers are rejected.
    pub fn get_integer(&self, index: usize) -> Result<i64> {
        self.read(index, ValueKind::Integer, TypedValue::as_integer)
    }

    /// Reads a double; integers are widened.
    pub fn get_double(&self, index: usize) -> Result<f64> {
        self.read(index, ValueKind::Double, TypedValue::as_double)
    }

    /// Reads an arbitrary-precision number; integers and doubles are widened.
    pub fn get_number(&self, index: usize) -> Result<BigDecimal> {
        self.read(index, ValueKind::Number, TypedValue::as_number)
    }

    /// Reads a string.
    pub fn get_string(&self, index: usize) -> Result<&str> {
        self.read(index, ValueKind::String, TypedValue::as_str)
    }

    /// Reads a nested map view.
    pub fn get_map_view(&self, index: usize) -> Result<&TypedMapView> {
        self.read(index, ValueKind::Map, TypedValue::as_map_view)
    }

    /// Reads a nested list view.
    pub fn get_list_view(&self, index: usize) -> Result<&TypedListView> {
        self.read(index, ValueKind::List, TypedValue::as_list_view)
    }

    fn read<'a, T>(
        &'a self,
        index: usize,
        expected: ValueKind,
        read: impl FnOnce(&'a TypedValue) -> Option<T>,
    ) -> Result<T> {
        self.get(index)?
            .read_as(expected, || format!("index {}", index), read)
    }
}

impl<V: Into<TypedValue>> FromIterator<V> for TypedListView {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<'a> IntoIterator for &'a TypedListView {
    type Item = &'a TypedValue;
    type IntoIter = std::slice::Iter<'a, TypedValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Serialize for TypedListView {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}
