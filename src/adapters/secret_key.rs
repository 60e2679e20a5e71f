// SPDX-License-Identifier: MIT OR Apache-2.0

//! Strategy for binding directories holding one file per property.

use crate::adapters::binding_dir::{contains_file, list_files, read_file};
use crate::adapters::DEFAULT_DATA_FILE_NAME;
use crate::domain::{Charset, Result, ServiceBinding, TypedMapView};
use crate::ports::LayeredParsingStrategy;
use std::path::Path;

/// Parses binding directories where every file is one property: the file name
/// is the key and the decoded file content is the string value.
///
/// Applies to any directory with at least one regular file, except one that
/// holds the data strategy's designated document.
#[derive(Debug, Clone)]
pub struct SecretKeyParsingStrategy {
    charset: Charset,
    data_file_name: String,
}

impl SecretKeyParsingStrategy {
    /// Creates a strategy that decodes files with `charset`.
    pub fn new(charset: Charset) -> Self {
        Self {
            charset,
            data_file_name: DEFAULT_DATA_FILE_NAME.to_string(),
        }
    }

    /// Creates a strategy that decodes files as UTF-8.
    pub fn new_default() -> Self {
        Self::default()
    }

    /// Sets the file name that marks a directory as belonging to the data layout.
    pub fn with_data_file_name(mut self, name: impl Into<String>) -> Self {
        self.data_file_name = name.into();
        self
    }
}

impl Default for SecretKeyParsingStrategy {
    fn default() -> Self {
        Self::new(Charset::default())
    }
}

impl LayeredParsingStrategy for SecretKeyParsingStrategy {
    fn name(&self) -> &str {
        "secret-key"
    }

    fn parse(
        &self,
        service_name: &str,
        binding_name: &str,
        binding_path: &Path,
    ) -> Result<Option<ServiceBinding>> {
        let files = list_files(binding_path)?;
        if files.is_empty() {
            tracing::trace!("No property files in '{}'", binding_path.display());
            return Ok(None);
        }
        if contains_file(&files, &self.data_file_name) {
            tracing::trace!(
                "'{}' holds '{}', leaving it to the data layout",
                binding_path.display(),
                self.data_file_name
            );
            return Ok(None);
        }

        let mut properties = Vec::with_capacity(files.len());
        for file in files {
            let content = read_file(&file.path, self.charset)?;
            properties.push((file.name, content));
        }

        Ok(Some(ServiceBinding::new(
            Some(binding_name.to_string()),
            Some(service_name.to_string()),
            TypedMapView::of(properties),
        )))
    }
}
