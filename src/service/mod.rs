// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the service binding accessor implementations.
//!
//! This module contains the concrete implementations of the
//! `ServiceBindingAccessor` trait, which is the main entry point for discovering
//! service bindings.

pub mod layered_accessor;

// Re-export commonly used types
pub use layered_accessor::{LayeredServiceBindingAccessor, LayeredServiceBindingAccessorBuilder};
