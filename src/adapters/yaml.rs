// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML document parser adapter.
//!
//! This module provides a parser for binding documents written in YAML. Since
//! JSON is a subset of YAML, this parser also accepts JSON documents.

use crate::domain::{BindingError, Result, TypedMapView, TypedValue};
use crate::ports::DocumentParser;

/// YAML parser implementation.
///
/// Nested mappings and sequences are kept as nested views. Non-string mapping
/// keys are stored under their string form, and tags are discarded.
///
/// # Examples
///
/// ```rust
/// use bindenv::adapters::YamlParser;
/// use bindenv::ports::DocumentParser;
///
/// let parser = YamlParser::new();
/// let yaml_content = "credentials:\n  host: localhost\n  port: 5432";
/// let view = parser.parse(yaml_content).unwrap();
/// let credentials = view.get_map_view("credentials").unwrap();
/// assert_eq!(credentials.get_string("host").unwrap(), "localhost");
/// assert_eq!(credentials.get_integer("port").unwrap(), 5432);
/// ```
#[derive(Debug, Clone)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for YamlParser {
    fn parse(&self, content: &str) -> Result<TypedMapView> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| BindingError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        match TypedValue::from(value) {
            TypedValue::Map(map) => Ok(map),
            other => Err(BindingError::ParseError {
                message: format!("Expected a YAML mapping, found {}", other.kind()),
                source: None,
            }),
        }
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}
