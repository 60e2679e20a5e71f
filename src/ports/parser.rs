// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document parser trait definition.
//!
//! This module defines the `DocumentParser` trait, which provides an interface for
//! turning the content of a structured binding file (JSON, YAML, ...) into a
//! typed map view.

use crate::domain::{Result, TypedMapView};

/// A trait for parsing structured binding documents.
///
/// The top level of a document must be an object (mapping). Nested structures
/// are kept as nested views rather than flattened.
///
/// # Examples
///
/// ```rust
/// use bindenv::ports::DocumentParser;
/// use bindenv::domain::{Result, TypedMapView};
///
/// struct KeyValueParser;
///
/// impl DocumentParser for KeyValueParser {
///     fn parse(&self, content: &str) -> Result<TypedMapView> {
///         Ok(content
///             .lines()
///             .filter_map(|line| line.split_once('='))
///             .collect())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["properties"]
///     }
/// }
///
/// let view = KeyValueParser.parse("user=admin\nport=5432").unwrap();
/// assert_eq!(view.get_string("user").unwrap(), "admin");
/// ```
pub trait DocumentParser: Send + Sync {
    /// Parses document content into a typed map view.
    ///
    /// # Errors
    ///
    /// Returns `BindingError::ParseError` if the content is malformed or its top
    /// level is not an object.
    fn parse(&self, content: &str) -> Result<TypedMapView>;

    /// Returns the file extensions this parser understands, without the dot.
    ///
    /// Strategies holding several parsers pick one by matching a file's
    /// extension against this list, ignoring ASCII case.
    fn supported_extensions(&self) -> &[&str];
}
