// SPDX-License-Identifier: MIT OR Apache-2.0

//! Strategy for binding directories holding a designated data document.

use crate::adapters::binding_dir::read_file;
use crate::adapters::JsonParser;
use crate::domain::{Charset, Result, ServiceBinding, TypedMapView, TypedValue};
use crate::ports::{DocumentParser, LayeredParsingStrategy};
use std::fs;
use std::io;
use std::path::Path;

/// The file name the data strategy looks for by default.
pub const DEFAULT_DATA_FILE_NAME: &str = "data.json";

const CREDENTIALS_KEY: &str = "credentials";
const METADATA_KEY: &str = "metadata";

/// Parses binding directories containing a designated data document.
///
/// The document must hold a `credentials` object. Entries of an optional
/// `metadata` object are lifted to the top level of the binding; every other
/// top-level entry is kept as-is and wins over a metadata entry of the same name.
/// Other files in the directory are ignored.
///
/// ```json
/// {
///   "metadata": { "plan": "standard", "tags": ["hana"] },
///   "credentials": { "url": "https://hana.example.com" }
/// }
/// ```
pub struct DataParsingStrategy {
    charset: Charset,
    file_name: String,
    parser: Box<dyn DocumentParser>,
}

impl DataParsingStrategy {
    /// Creates a strategy reading `file_name` with `charset` and `parser`.
    pub fn new(charset: Charset, file_name: impl Into<String>, parser: Box<dyn DocumentParser>) -> Self {
        Self {
            charset,
            file_name: file_name.into(),
            parser,
        }
    }

    /// Creates a strategy reading UTF-8 JSON from [`DEFAULT_DATA_FILE_NAME`].
    pub fn new_default() -> Self {
        Self::with_charset(Charset::default())
    }

    /// Creates a strategy reading JSON from [`DEFAULT_DATA_FILE_NAME`] in the given encoding.
    pub fn with_charset(charset: Charset) -> Self {
        Self::new(charset, DEFAULT_DATA_FILE_NAME, Box::new(JsonParser::new()))
    }

    /// The designated document file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl Default for DataParsingStrategy {
    fn default() -> Self {
        Self::new_default()
    }
}

impl LayeredParsingStrategy for DataParsingStrategy {
    fn name(&self) -> &str {
        "data"
    }

    fn parse(
        &self,
        service_name: &str,
        binding_name: &str,
        binding_path: &Path,
    ) -> Result<Option<ServiceBinding>> {
        let data_path = binding_path.join(&self.file_name);
        match fs::metadata(&data_path) {
            Ok(metadata) if metadata.is_file() => {}
            Ok(_) => return Ok(None),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::trace!("No '{}' in '{}'", self.file_name, binding_path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        }

        let content = read_file(&data_path, self.charset)?;
        let document = match self.parser.parse(&content) {
            Ok(document) => document,
            Err(e) => {
                tracing::debug!("Ignoring malformed '{}': {}", data_path.display(), e);
                return Ok(None);
            }
        };

        if document.get_map_view(CREDENTIALS_KEY).is_err() {
            tracing::debug!(
                "'{}' has no '{}' section",
                data_path.display(),
                CREDENTIALS_KEY
            );
            return Ok(None);
        }

        let mut properties: Vec<(&str, TypedValue)> = Vec::with_capacity(document.len());
        let lifted = match document.get(METADATA_KEY).ok() {
            Some(TypedValue::Map(metadata)) => {
                properties.extend(metadata.iter().map(|(k, v)| (k, v.clone())));
                true
            }
            Some(other) => {
                tracing::debug!(
                    "'{}' section in '{}' is a {}, keeping it as-is",
                    METADATA_KEY,
                    data_path.display(),
                    other.kind()
                );
                false
            }
            None => false,
        };
        properties.extend(
            document
                .iter()
                .filter(|(k, _)| !(lifted && *k == METADATA_KEY))
                .map(|(k, v)| (k, v.clone())),
        );

        Ok(Some(ServiceBinding::new(
            Some(binding_name.to_string()),
            Some(service_name.to_string()),
            TypedMapView::of(properties),
        )))
    }
}
