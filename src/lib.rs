// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed, read-only access to service bindings mounted into the filesystem.
//!
//! Platforms such as Kubernetes inject credentials and connection metadata for
//! backing services as files. This crate discovers those files, recognizes the
//! layout convention each binding uses, and exposes the result as immutable
//! typed views over loosely typed data.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Typed views (`TypedValue`, `TypedMapView`, `TypedListView`),
//!   `ServiceBinding`, `Charset` and errors
//! - **Ports**: Trait definitions (`ServiceBindingAccessor`, `LayeredParsingStrategy`,
//!   `DocumentParser`)
//! - **Adapters**: Document parsers and the layered parsing strategies
//! - **Service**: The `LayeredServiceBindingAccessor` that scans a binding root
//!
//! # Directory layout
//!
//! ```text
//! <root>/                      default: /etc/secrets/sapbtp
//!   <service type>/
//!     <binding instance>/      parsed by the first matching strategy
//! ```
//!
//! # Typed access
//!
//! Accessors check the stored category and never coerce strings. Numbers widen
//! in one direction only: integers can be read as doubles and numbers, doubles
//! as numbers.
//!
//! ```rust
//! use bindenv::prelude::*;
//! use std::collections::HashMap;
//!
//! let view = TypedMapView::of(HashMap::from([
//!     ("port", TypedValue::from(5432)),
//!     ("host", TypedValue::from("localhost")),
//! ]));
//!
//! assert_eq!(view.get_integer("port").unwrap(), 5432);
//! assert_eq!(view.get_double("port").unwrap(), 5432.0);
//! assert!(view.get_boolean("host").is_err());
//! assert!(view.get_string("user").is_err());
//! ```
//!
//! # Feature Flags
//!
//! - `yaml`: Enable the YAML document parser and `serde_yaml` conversions (default)
//! - `full`: Enable all features

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{
        DataParsingStrategy, JsonParser, SecretKeyParsingStrategy, SecretRootKeyParsingStrategy,
    };
    pub use crate::domain::{
        BindingError, Charset, Result, ServiceBinding, TypedListView, TypedMapView, TypedValue,
        ValueKind,
    };
    pub use crate::ports::{DocumentParser, LayeredParsingStrategy, ServiceBindingAccessor};
    pub use crate::service::LayeredServiceBindingAccessor;

    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlParser;
}
