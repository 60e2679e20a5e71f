// SPDX-License-Identifier: MIT OR Apache-2.0

//! Strategy for binding directories holding a single structured document.

use crate::adapters::binding_dir::{contains_file, list_files, read_file};
use crate::adapters::{JsonParser, DEFAULT_DATA_FILE_NAME};
use crate::domain::{Charset, Result, ServiceBinding};
use crate::ports::{DocumentParser, LayeredParsingStrategy};
use std::path::Path;

/// Parses binding directories that contain exactly one file, whose content is a
/// structured document holding every property.
///
/// This is the layout produced when a Kubernetes secret is created with a
/// single root key. The parser is chosen by the file's extension among the
/// configured parsers; files with no matching extension go to the first parser.
/// A directory whose single file is the data strategy's designated document is
/// left to that strategy.
///
/// # Examples
///
/// ```rust,no_run
/// use bindenv::adapters::SecretRootKeyParsingStrategy;
/// use bindenv::ports::LayeredParsingStrategy;
/// use std::path::Path;
///
/// let strategy = SecretRootKeyParsingStrategy::new_default();
/// let binding = strategy
///     .parse("xsuaa", "my-xsuaa", Path::new("/etc/secrets/sapbtp/xsuaa/my-xsuaa"))
///     .unwrap();
/// ```
pub struct SecretRootKeyParsingStrategy {
    charset: Charset,
    parsers: Vec<Box<dyn DocumentParser>>,
    data_file_name: String,
}

impl SecretRootKeyParsingStrategy {
    /// Creates a strategy that decodes with `charset` and parses with `parsers`.
    ///
    /// The first parser is the fallback for unknown extensions.
    pub fn new(charset: Charset, parsers: Vec<Box<dyn DocumentParser>>) -> Self {
        Self {
            charset,
            parsers,
            data_file_name: DEFAULT_DATA_FILE_NAME.to_string(),
        }
    }

    /// Creates a strategy reading UTF-8 documents with the default parsers.
    pub fn new_default() -> Self {
        Self::with_charset(Charset::default())
    }

    /// Creates a strategy reading documents in the given encoding with the
    /// default parsers: JSON, plus YAML when the `yaml` feature is enabled.
    pub fn with_charset(charset: Charset) -> Self {
        Self::new(charset, default_parsers())
    }

    /// Sets the file name that marks a directory as belonging to the data layout.
    pub fn with_data_file_name(mut self, name: impl Into<String>) -> Self {
        self.data_file_name = name.into();
        self
    }

    fn parser_for(&self, path: &Path) -> Option<&dyn DocumentParser> {
        let by_extension = path.extension().and_then(|ext| ext.to_str()).and_then(|ext| {
            self.parsers.iter().find(|parser| {
                parser
                    .supported_extensions()
                    .iter()
                    .any(|supported| supported.eq_ignore_ascii_case(ext))
            })
        });
        by_extension.or_else(|| self.parsers.first()).map(|parser| parser.as_ref())
    }
}

fn default_parsers() -> Vec<Box<dyn DocumentParser>> {
    #[allow(unused_mut)]
    let mut parsers: Vec<Box<dyn DocumentParser>> = vec![Box::new(JsonParser::new())];
    #[cfg(feature = "yaml")]
    parsers.push(Box::new(crate::adapters::YamlParser::new()));
    parsers
}

impl Default for SecretRootKeyParsingStrategy {
    fn default() -> Self {
        Self::new_default()
    }
}

impl LayeredParsingStrategy for SecretRootKeyParsingStrategy {
    fn name(&self) -> &str {
        "secret-root-key"
    }

    fn parse(
        &self,
        service_name: &str,
        binding_name: &str,
        binding_path: &Path,
    ) -> Result<Option<ServiceBinding>> {
        let files = list_files(binding_path)?;
        if contains_file(&files, &self.data_file_name) {
            tracing::trace!(
                "'{}' holds '{}', leaving it to the data layout",
                binding_path.display(),
                self.data_file_name
            );
            return Ok(None);
        }
        let [file] = files.as_slice() else {
            tracing::trace!(
                "Expected exactly one file in '{}', found {}",
                binding_path.display(),
                files.len()
            );
            return Ok(None);
        };
        let Some(parser) = self.parser_for(&file.path) else {
            return Ok(None);
        };

        let content = read_file(&file.path, self.charset)?;
        let properties = match parser.parse(&content) {
            Ok(properties) => properties,
            Err(e) => {
                tracing::debug!(
                    "File '{}' is not a structured document: {}",
                    file.path.display(),
                    e
                );
                return Ok(None);
            }
        };

        Ok(Some(ServiceBinding::new(
            Some(binding_name.to_string()),
            Some(service_name.to_string()),
            properties,
        )))
    }
}
