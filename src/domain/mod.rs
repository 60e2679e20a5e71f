// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the typed value views, the service binding model and
//! the error types. It is independent of the filesystem and defines the
//! fundamental concepts used throughout the library.

pub mod charset;
pub mod errors;
pub mod list_view;
pub mod map_view;
pub mod service_binding;
pub mod typed_value;

// Re-export commonly used types
pub use charset::Charset;
pub use errors::{BindingError, Result, ValueKind};
pub use list_view::TypedListView;
pub use map_view::TypedMapView;
pub use service_binding::ServiceBinding;
pub use typed_value::TypedValue;
