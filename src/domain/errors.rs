// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the service binding crate.
//!
//! This module defines the errors raised by the typed views and by the
//! filesystem accessor. All errors use `thiserror` for proper error handling
//! and conversion.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The category of a value stored in a typed view.
///
/// Used to describe both sides of a failed typed access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// The absent value.
    Null,
    /// A boolean.
    Boolean,
    /// A fixed-width integer.
    Integer,
    /// A floating point number.
    Double,
    /// An arbitrary-precision decimal number.
    Number,
    /// A string.
    String,
    /// A nested list view.
    List,
    /// A nested map view.
    Map,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Double => "double",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::List => "list",
            ValueKind::Map => "map",
        };
        f.write_str(name)
    }
}

/// The main error type for service binding operations.
///
/// This enum is marked as `#[non_exhaustive]` to allow for future additions
/// without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use bindenv::domain::errors::BindingError;
///
/// fn lookup() -> Result<String, BindingError> {
///     Err(BindingError::KeyNotFound {
///         key: "url".to_string(),
///     })
/// }
///
/// assert!(lookup().is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BindingError {
    /// The requested key is not present in a map view.
    #[error("Key not found: {key}")]
    KeyNotFound {
        /// The key that was not found
        key: String,
    },

    /// The requested index is outside the bounds of a list view.
    #[error("Index {index} not found in list of size {size}")]
    IndexNotFound {
        /// The requested index
        index: usize,
        /// The size of the list view
        size: usize,
    },

    /// The stored value cannot be read as the requested type.
    #[error("Unable to cast value at {location} from {actual} to {expected}")]
    ValueCast {
        /// Where the value lives, e.g. `key 'url'` or `index 3`
        location: String,
        /// The requested category
        expected: ValueKind,
        /// The stored category
        actual: ValueKind,
    },

    /// The binding root or a service directory could not be listed.
    #[error("{message}")]
    ServiceBindingAccess {
        /// Description of the failure
        message: String,
        /// The directory that could not be accessed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A structured document could not be parsed.
    #[error("Failed to parse document: {message}")]
    ParseError {
        /// Error message
        message: String,
        /// Optional underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O error while reading a binding file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl BindingError {
    pub(crate) fn value_cast(location: String, expected: ValueKind, actual: ValueKind) -> Self {
        BindingError::ValueCast {
            location,
            expected,
            actual,
        }
    }

    /// Returns `true` for errors caused by the filesystem rather than by
    /// the shape of the data.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            BindingError::IoError(_) | BindingError::ServiceBindingAccess { .. }
        )
    }
}

/// A specialized Result type for service binding operations.
pub type Result<T> = std::result::Result<T, BindingError>;
