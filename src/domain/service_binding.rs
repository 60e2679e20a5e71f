// SPDX-License-Identifier: MIT OR Apache-2.0

//! The service binding produced by a successful parse.

use crate::domain::{TypedMapView, TypedValue};
use serde::Serialize;
use std::collections::HashSet;

const PLAN_KEY: &str = "plan";
const TAGS_KEY: &str = "tags";
const CREDENTIALS_KEY: &str = "credentials";

/// A named bundle of properties describing one backing service instance.
///
/// The binding name and service name come from the directory layout; the
/// properties come from whichever parsing strategy recognized the directory.
///
/// # Examples
///
/// ```
/// use bindenv::domain::{ServiceBinding, TypedMapView};
///
/// let binding = ServiceBinding::new(
///     Some("my-db".to_string()),
///     Some("postgres".to_string()),
///     TypedMapView::of(vec![("plan", "small")]),
/// );
///
/// assert_eq!(binding.get_name(), Some("my-db"));
/// assert_eq!(binding.get_service_plan(), Some("small"));
/// assert!(binding.get_credentials().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ServiceBinding {
    name: Option<String>,
    service_name: Option<String>,
    properties: TypedMapView,
}

impl ServiceBinding {
    /// Creates a binding from its names and properties.
    pub fn new(
        name: Option<String>,
        service_name: Option<String>,
        properties: TypedMapView,
    ) -> Self {
        Self {
            name,
            service_name,
            properties,
        }
    }

    /// The binding instance name.
    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The service type name.
    pub fn get_service_name(&self) -> Option<&str> {
        self.service_name.as_deref()
    }

    /// The service plan, if a string `plan` property is present.
    pub fn get_service_plan(&self) -> Option<&str> {
        self.properties.get_string(PLAN_KEY).ok()
    }

    /// The string entries of the `tags` list property.
    ///
    /// Non-string entries are skipped; a missing or non-list property yields no tags.
    pub fn get_tags(&self) -> Vec<&str> {
        self.properties
            .get_list_view(TAGS_KEY)
            .map(|tags| tags.iter().filter_map(TypedValue::as_str).collect())
            .unwrap_or_default()
    }

    /// The `credentials` map property, or an empty map.
    pub fn get_credentials(&self) -> TypedMapView {
        self.properties
            .get_map_view(CREDENTIALS_KEY)
            .cloned()
            .unwrap_or_default()
    }

    /// The property keys.
    pub fn get_keys(&self) -> HashSet<&str> {
        self.properties.get_keys()
    }

    /// Returns `true` if the property is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Returns a property value.
    pub fn get(&self, key: &str) -> Option<&TypedValue> {
        self.properties.get(key).ok()
    }

    /// All properties as a typed view.
    pub fn properties(&self) -> &TypedMapView {
        &self.properties
    }
}
