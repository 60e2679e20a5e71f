// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing parser and strategy implementations.
//!
//! This module contains concrete implementations of the traits defined in the
//! ports layer: document parsers for structured binding files and the layered
//! parsing strategies for the supported directory layouts.

mod binding_dir;

pub mod data;
pub mod json;
pub mod secret_key;
pub mod secret_root_key;
#[cfg(feature = "yaml")]
pub mod yaml;

pub use data::{DataParsingStrategy, DEFAULT_DATA_FILE_NAME};
pub use json::JsonParser;
pub use secret_key::SecretKeyParsingStrategy;
pub use secret_root_key::SecretRootKeyParsingStrategy;
#[cfg(feature = "yaml")]
pub use yaml::YamlParser;
