// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that define the interfaces
//! between the accessor, its parsing strategies and document parsers. These
//! traits are implemented by adapters in the adapters layer.

pub mod accessor;
pub mod parser;
pub mod strategy;

// Re-export commonly used types
pub use accessor::ServiceBindingAccessor;
pub use parser::DocumentParser;
pub use strategy::LayeredParsingStrategy;
