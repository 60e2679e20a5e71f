// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the typed map and list views.
//!
//! These tests exercise the public accessor surface the way binding consumers
//! use it, including views built from parsed JSON documents.

use bigdecimal::BigDecimal;
use bindenv::domain::{BindingError, TypedListView, TypedMapView, TypedValue, ValueKind};
use serde_json::json;
use std::collections::{HashMap, HashSet};
use std::str::FromStr;

fn big_number() -> BigDecimal {
    BigDecimal::from_str("9223372036854775807e-2147483647").unwrap()
}

fn primitives() -> Vec<TypedValue> {
    vec![
        TypedValue::Null,
        TypedValue::from(true),
        TypedValue::from(42),
        TypedValue::from(13.37),
        TypedValue::from(big_number()),
        TypedValue::from("Value"),
    ]
}

#[test]
fn test_list_view_with_all_categories() {
    let mut values = primitives();
    values.push(TypedValue::from(TypedMapView::empty()));
    values.push(TypedValue::from(TypedListView::default()));

    let view = TypedListView::of(values);

    assert_eq!(view.get_size(), 8);
    assert!(view.get(0).unwrap().is_null());
    assert!(view.get_boolean(1).unwrap());
    assert_eq!(view.get_integer(2).unwrap(), 42);
    assert_eq!(view.get_double(3).unwrap(), 13.37);
    assert_eq!(view.get_number(4).unwrap(), big_number());
    assert_eq!(view.get_string(5).unwrap(), "Value");
    assert!(view.get_map_view(6).is_ok());
    assert!(view.get_list_view(7).is_ok());
}

#[test]
fn test_list_view_scenario() {
    let view = TypedListView::of(vec![
        json!(null),
        json!(true),
        json!(42),
        json!(13.37),
        json!("Value"),
    ]);

    assert_eq!(view.get_size(), 5);
    assert!(view.get(0).unwrap().is_null());
    assert!(view.get_boolean(1).unwrap());
    assert_eq!(view.get_integer(2).unwrap(), 42);
    assert_eq!(view.get_double(3).unwrap(), 13.37);
    assert_eq!(view.get_string(4).unwrap(), "Value");
    assert!(matches!(
        view.get_boolean(2),
        Err(BindingError::ValueCast {
            expected: ValueKind::Boolean,
            actual: ValueKind::Integer,
            ..
        })
    ));
}

#[test]
fn test_map_view_scenario() {
    let view = TypedMapView::of(HashMap::from([("Key", "Value")]));

    assert_eq!(view.get_string("Key").unwrap(), "Value");
    assert!(matches!(
        view.get_integer("Key"),
        Err(BindingError::ValueCast { .. })
    ));
    assert_eq!(view.get_keys(), HashSet::from(["Key"]));
}

#[test]
fn test_nested_raw_map_in_list_becomes_map_view() {
    let view = TypedListView::of(vec![HashMap::from([("Key", "Value")])]);
    assert_eq!(
        view.get_map_view(0).unwrap().get_keys(),
        HashSet::from(["Key"])
    );
}

#[test]
fn test_nested_raw_list_in_list_becomes_list_view() {
    let view = TypedListView::of(vec![primitives()]);
    assert_eq!(view.get_list_view(0).unwrap().get_size(), 6);
}

#[test]
fn test_views_pass_through_unchanged() {
    let inner = TypedMapView::of(vec![("a", 1)]);
    let outer = TypedMapView::of(vec![("inner", inner.clone())]);
    assert_eq!(outer.get_map_view("inner").unwrap(), &inner);
}

#[test]
fn test_deeply_nested_json_document() {
    let value = TypedValue::from(json!({
        "credentials": {
            "endpoints": [
                {"url": "https://a.example.com", "weight": 1},
                {"url": "https://b.example.com", "weight": 2.5}
            ]
        }
    }));
    let root = value.as_map_view().unwrap();
    let endpoints = root
        .get_map_view("credentials")
        .unwrap()
        .get_list_view("endpoints")
        .unwrap();

    assert_eq!(endpoints.get_size(), 2);
    let second = endpoints.get_map_view(1).unwrap();
    assert_eq!(second.get_string("url").unwrap(), "https://b.example.com");
    assert_eq!(second.get_double("weight").unwrap(), 2.5);
    assert!(second.get_integer("weight").is_err());
    assert_eq!(endpoints.get_map_view(0).unwrap().get_double("weight").unwrap(), 1.0);
}

#[test]
fn test_string_is_never_coerced() {
    let view = TypedMapView::of(vec![("flag", "true"), ("port", "8080")]);
    assert!(view.get_boolean("flag").is_err());
    assert!(view.get_integer("port").is_err());
    assert!(view.get_number("port").is_err());
}

#[test]
fn test_missing_keys_and_indices_use_distinct_errors() {
    let map = TypedMapView::empty();
    let list = TypedListView::default();

    assert!(matches!(map.get("x"), Err(BindingError::KeyNotFound { .. })));
    assert!(matches!(list.get(0), Err(BindingError::IndexNotFound { .. })));
}

#[test]
fn test_views_are_shareable_across_threads() {
    let view = std::sync::Arc::new(TypedMapView::of(vec![("k", 7)]));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let view = std::sync::Arc::clone(&view);
            std::thread::spawn(move || view.get_integer("k").unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 7);
    }
}
