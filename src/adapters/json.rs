// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON document parser adapter.

use crate::domain::{BindingError, Result, TypedMapView, TypedValue};
use crate::ports::DocumentParser;

/// JSON parser implementation.
///
/// Integers that fit an `i64` become integers, larger unsigned integers become
/// arbitrary-precision numbers and every other number becomes a double.
///
/// # Examples
///
/// ```rust
/// use bindenv::adapters::JsonParser;
/// use bindenv::ports::DocumentParser;
///
/// let parser = JsonParser::new();
/// let view = parser.parse(r#"{"url": "https://example.com", "port": 443}"#).unwrap();
/// assert_eq!(view.get_string("url").unwrap(), "https://example.com");
/// assert_eq!(view.get_integer("port").unwrap(), 443);
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonParser;

impl JsonParser {
    /// Creates a new JSON parser.
    pub fn new() -> Self {
        JsonParser
    }
}

impl DocumentParser for JsonParser {
    fn parse(&self, content: &str) -> Result<TypedMapView> {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| BindingError::ParseError {
                message: format!("Failed to parse JSON: {}", e),
                source: Some(Box::new(e)),
            })?;

        match TypedValue::from(value) {
            TypedValue::Map(map) => Ok(map),
            other => Err(BindingError::ParseError {
                message: format!("Expected a JSON object, found {}", other.kind()),
                source: None,
            }),
        }
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }
}
