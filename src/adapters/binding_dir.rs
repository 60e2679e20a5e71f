// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filesystem helpers shared by the layered parsing strategies.

use crate::domain::Charset;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A regular file directly inside a binding directory.
#[derive(Debug, Clone)]
pub(crate) struct BindingFile {
    pub(crate) name: String,
    pub(crate) path: PathBuf,
}

/// Lists the regular files in `dir`, sorted by name.
///
/// Symlinks are followed, so Kubernetes secret volumes (where every key is a
/// link into a hidden `..data` directory) list their keys. Subdirectories and
/// dangling links are skipped.
pub(crate) fn list_files(dir: &Path) -> io::Result<Vec<BindingFile>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            files.push(BindingFile {
                name: entry.file_name().to_string_lossy().into_owned(),
                path,
            });
        }
    }
    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

/// Whether `files` holds a file named `name`.
///
/// The flat layouts use this to step aside for directories that carry the
/// designated data document.
pub(crate) fn contains_file(files: &[BindingFile], name: &str) -> bool {
    files.iter().any(|file| file.name == name)
}

/// Reads a whole file and decodes it with `charset`.
pub(crate) fn read_file(path: &Path, charset: Charset) -> io::Result<String> {
    let bytes = fs::read(path)?;
    charset.decode(&bytes)
}
