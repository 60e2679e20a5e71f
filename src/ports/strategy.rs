// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered parsing strategy trait definition.
//!
//! A layered parsing strategy recognizes one on-disk convention for a binding
//! instance directory. The accessor tries strategies in priority order and the
//! first one that yields a binding wins.

use crate::domain::{Result, ServiceBinding};
use std::path::Path;

/// A trait for strategies that turn a binding directory into a service binding.
///
/// # Return values
///
/// - `Ok(Some(binding))`: the directory matches this strategy's layout.
/// - `Ok(None)`: the directory does not match; the next strategy is tried.
/// - `Err(_)`: an unexpected failure, usually I/O, while inspecting the directory.
///   Callers decide how to treat it; the layered accessor logs it and moves on.
///
/// # Examples
///
/// ```rust
/// use bindenv::ports::LayeredParsingStrategy;
/// use bindenv::domain::{Result, ServiceBinding, TypedMapView};
/// use std::path::Path;
///
/// struct NameOnlyStrategy;
///
/// impl LayeredParsingStrategy for NameOnlyStrategy {
///     fn name(&self) -> &str {
///         "name-only"
///     }
///
///     fn parse(
///         &self,
///         service_name: &str,
///         binding_name: &str,
///         _binding_path: &Path,
///     ) -> Result<Option<ServiceBinding>> {
///         Ok(Some(ServiceBinding::new(
///             Some(binding_name.to_string()),
///             Some(service_name.to_string()),
///             TypedMapView::empty(),
///         )))
///     }
/// }
///
/// let binding = NameOnlyStrategy
///     .parse("xsuaa", "my-binding", Path::new("/tmp"))
///     .unwrap()
///     .unwrap();
/// assert_eq!(binding.get_service_name(), Some("xsuaa"));
/// ```
pub trait LayeredParsingStrategy: Send + Sync {
    /// Returns a short identifier used in log messages.
    fn name(&self) -> &str;

    /// Attempts to parse the binding directory at `binding_path`.
    ///
    /// # Arguments
    ///
    /// * `service_name` - Name of the enclosing service type directory
    /// * `binding_name` - Name of the binding instance directory
    /// * `binding_path` - Path of the binding instance directory
    fn parse(
        &self,
        service_name: &str,
        binding_name: &str,
        binding_path: &Path,
    ) -> Result<Option<ServiceBinding>>;
}
