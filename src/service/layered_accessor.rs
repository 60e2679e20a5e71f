// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered filesystem service binding accessor.
//!
//! This module provides the accessor that walks a root directory laid out as
//! `<root>/<service type>/<binding instance>/...` and turns every binding
//! instance directory into a service binding using an ordered list of parsing
//! strategies.

use crate::adapters::{DataParsingStrategy, SecretKeyParsingStrategy, SecretRootKeyParsingStrategy};
use crate::domain::{BindingError, Charset, Result, ServiceBinding};
use crate::ports::{LayeredParsingStrategy, ServiceBindingAccessor};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Accessor reading service bindings from a layered directory tree.
///
/// For every binding instance directory the strategies are tried in order and
/// the first one returning a binding wins. Directories no strategy recognizes
/// are skipped, and so are strategy failures such as unreadable files. Failing
/// to list the root directory or a service type directory aborts the whole scan.
///
/// Each call re-scans the filesystem. Results are returned sorted by service
/// and binding directory name, but callers should not depend on the order.
///
/// # Examples
///
/// ```rust,no_run
/// use bindenv::prelude::*;
///
/// # fn main() -> Result<()> {
/// // Scan the default location with the default strategies
/// let accessor = LayeredServiceBindingAccessor::new();
/// for binding in accessor.get_service_bindings()? {
///     println!("{:?} -> {:?}", binding.get_service_name(), binding.get_name());
/// }
///
/// // Or configure the location and encoding
/// let accessor = LayeredServiceBindingAccessor::builder()
///     .root_path("/var/run/bindings")
///     .charset(Charset::Latin1)
///     .build();
/// # Ok(())
/// # }
/// ```
pub struct LayeredServiceBindingAccessor {
    /// Directory containing one subdirectory per service type
    root_path: PathBuf,
    /// Parsing strategies in priority order (first match wins)
    strategies: Vec<Box<dyn LayeredParsingStrategy>>,
}

impl LayeredServiceBindingAccessor {
    /// The root directory scanned when none is configured.
    pub const DEFAULT_ROOT_PATH: &'static str = "/etc/secrets/sapbtp";

    /// Creates an accessor for [`Self::DEFAULT_ROOT_PATH`] with the default strategies.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates an accessor for `root_path` with the default strategies.
    pub fn with_root_path(root_path: impl Into<PathBuf>) -> Self {
        Self::builder().root_path(root_path).build()
    }

    /// Creates a new accessor builder.
    pub fn builder() -> LayeredServiceBindingAccessorBuilder {
        LayeredServiceBindingAccessorBuilder::new()
    }

    /// The default strategies in priority order: single structured document,
    /// one file per property, then the data document.
    ///
    /// The first two step aside for directories holding the data document, so
    /// the three layouts never overlap.
    pub fn default_strategies(charset: Charset) -> Vec<Box<dyn LayeredParsingStrategy>> {
        vec![
            Box::new(SecretRootKeyParsingStrategy::with_charset(charset)),
            Box::new(SecretKeyParsingStrategy::new(charset)),
            Box::new(DataParsingStrategy::with_charset(charset)),
        ]
    }

    /// The root directory this accessor scans.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Names of the configured strategies in priority order.
    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Lists the immediate subdirectories of `path`, following symlinks.
    fn list_directories(path: &Path) -> io::Result<Vec<PathBuf>> {
        let mut directories = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry_path = entry?.path();
            if entry_path.is_dir() {
                directories.push(entry_path);
            }
        }
        directories.sort();
        Ok(directories)
    }

    fn parse_service_bindings(
        &self,
        service_path: &Path,
        bindings: &mut Vec<ServiceBinding>,
    ) -> Result<()> {
        let binding_paths =
            Self::list_directories(service_path).map_err(|e| BindingError::ServiceBindingAccess {
                message: format!(
                    "Unable to access service binding files in '{}'.",
                    service_path.display()
                ),
                path: service_path.to_path_buf(),
                source: e,
            })?;

        let service_name = directory_name(service_path);
        for binding_path in binding_paths {
            let binding_name = directory_name(&binding_path);
            match self.apply_strategies(&service_name, &binding_name, &binding_path) {
                Some(binding) => bindings.push(binding),
                None => tracing::debug!(
                    "No parsing strategy matched '{}', skipping",
                    binding_path.display()
                ),
            }
        }
        Ok(())
    }

    /// Tries each strategy in order; errors count as "not applicable".
    fn apply_strategies(
        &self,
        service_name: &str,
        binding_name: &str,
        binding_path: &Path,
    ) -> Option<ServiceBinding> {
        self.strategies.iter().find_map(|strategy| {
            match strategy.parse(service_name, binding_name, binding_path) {
                Ok(Some(binding)) => {
                    tracing::trace!(
                        "Strategy '{}' parsed '{}'",
                        strategy.name(),
                        binding_path.display()
                    );
                    Some(binding)
                }
                Ok(None) => {
                    tracing::trace!(
                        "Strategy '{}' does not apply to '{}'",
                        strategy.name(),
                        binding_path.display()
                    );
                    None
                }
                Err(e) => {
                    tracing::debug!(
                        "Strategy '{}' failed for '{}': {}",
                        strategy.name(),
                        binding_path.display(),
                        e
                    );
                    None
                }
            }
        })
    }
}

fn directory_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

impl Default for LayeredServiceBindingAccessor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LayeredServiceBindingAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayeredServiceBindingAccessor")
            .field("root_path", &self.root_path)
            .field("strategies", &self.strategy_names())
            .finish()
    }
}

impl ServiceBindingAccessor for LayeredServiceBindingAccessor {
    fn get_service_bindings(&self) -> Result<Vec<ServiceBinding>> {
        tracing::debug!("Scanning service bindings in '{}'", self.root_path.display());

        let service_paths = Self::list_directories(&self.root_path).map_err(|e| {
            BindingError::ServiceBindingAccess {
                message: "Unable to access service binding files.".to_string(),
                path: self.root_path.clone(),
                source: e,
            }
        })?;

        let mut bindings = Vec::new();
        for service_path in service_paths {
            tracing::debug!("Scanning service directory '{}'", service_path.display());
            self.parse_service_bindings(&service_path, &mut bindings)?;
        }

        tracing::debug!(
            "Found {} service bindings in '{}'",
            bindings.len(),
            self.root_path.display()
        );
        Ok(bindings)
    }
}

/// Builder for constructing a `LayeredServiceBindingAccessor`.
///
/// # Examples
///
/// ```rust
/// use bindenv::adapters::SecretKeyParsingStrategy;
/// use bindenv::service::LayeredServiceBindingAccessorBuilder;
///
/// let accessor = LayeredServiceBindingAccessorBuilder::new()
///     .root_path("/tmp/bindings")
///     .with_strategy(Box::new(SecretKeyParsingStrategy::new_default()))
///     .build();
///
/// assert_eq!(accessor.strategy_names(), vec!["secret-key"]);
/// ```
pub struct LayeredServiceBindingAccessorBuilder {
    root_path: PathBuf,
    charset: Charset,
    strategies: Vec<Box<dyn LayeredParsingStrategy>>,
}

impl LayeredServiceBindingAccessorBuilder {
    /// Creates a new builder for the default root path.
    pub fn new() -> Self {
        Self {
            root_path: PathBuf::from(LayeredServiceBindingAccessor::DEFAULT_ROOT_PATH),
            charset: Charset::default(),
            strategies: Vec::new(),
        }
    }

    /// Sets the directory to scan.
    pub fn root_path(mut self, root_path: impl Into<PathBuf>) -> Self {
        self.root_path = root_path.into();
        self
    }

    /// Sets the encoding used by the default strategies.
    ///
    /// Has no effect on strategies added explicitly.
    pub fn charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    /// Appends a strategy after those already added.
    pub fn with_strategy(mut self, strategy: Box<dyn LayeredParsingStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Replaces all strategies added so far.
    pub fn with_strategies(mut self, strategies: Vec<Box<dyn LayeredParsingStrategy>>) -> Self {
        self.strategies = strategies;
        self
    }

    /// Builds the accessor. Without explicit strategies the default set is used.
    pub fn build(self) -> LayeredServiceBindingAccessor {
        let strategies = if self.strategies.is_empty() {
            LayeredServiceBindingAccessor::default_strategies(self.charset)
        } else {
            self.strategies
        };

        LayeredServiceBindingAccessor {
            root_path: self.root_path,
            strategies,
        }
    }
}

impl Default for LayeredServiceBindingAccessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
