// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service binding accessor trait definition.

use crate::domain::{Result, ServiceBinding};

/// A source of service bindings.
///
/// Every call re-reads the underlying source; implementations hold no cache.
///
/// # Examples
///
/// ```rust
/// use bindenv::ports::ServiceBindingAccessor;
/// use bindenv::domain::{Result, ServiceBinding};
///
/// struct NoBindings;
///
/// impl ServiceBindingAccessor for NoBindings {
///     fn get_service_bindings(&self) -> Result<Vec<ServiceBinding>> {
///         Ok(Vec::new())
///     }
/// }
///
/// assert!(NoBindings.get_service_bindings().unwrap().is_empty());
/// ```
pub trait ServiceBindingAccessor: Send + Sync {
    /// Returns all service bindings currently available.
    ///
    /// # Errors
    ///
    /// Returns `BindingError::ServiceBindingAccess` if the source cannot be read.
    fn get_service_bindings(&self) -> Result<Vec<ServiceBinding>>;
}
