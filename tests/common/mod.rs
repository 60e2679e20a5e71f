// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixture helpers for building service binding directory trees.

use bindenv::service::LayeredServiceBindingAccessor;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary `<root>/<service>/<binding>/<file>` tree.
pub struct BindingTree {
    root: TempDir,
}

#[allow(dead_code)]
impl BindingTree {
    /// Creates an empty binding root.
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("create temp dir"),
        }
    }

    /// The root directory.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates (if needed) and returns a binding instance directory.
    pub fn binding_dir(&self, service: &str, binding: &str) -> PathBuf {
        let dir = self.root.path().join(service).join(binding);
        fs::create_dir_all(&dir).expect("create binding dir");
        dir
    }

    /// Writes a file into a binding instance directory.
    pub fn add_file(
        &self,
        service: &str,
        binding: &str,
        file: &str,
        content: impl AsRef<[u8]>,
    ) -> PathBuf {
        let path = self.binding_dir(service, binding).join(file);
        fs::write(&path, content).expect("write binding file");
        path
    }

    /// An accessor over this tree with the default strategies.
    pub fn accessor(&self) -> LayeredServiceBindingAccessor {
        LayeredServiceBindingAccessor::with_root_path(self.path())
    }
}

/// Routes log output of the crate to the test harness.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
