//! Manifest directory enumeration.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// One raw document buffer and the file name it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestDocument {
    pub source: String,
    pub bytes: Vec<u8>,
}

impl ManifestDocument {
    pub fn new(source: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self { source: source.into(), bytes: bytes.into() }
    }
}

/// Insertion-ordered batch of documents for one run.
pub type DocumentBatch = Vec<ManifestDocument>;

/// Failure while enumerating or reading manifest files.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("failed to read manifest directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read manifest file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read every regular file in `dir` into a [`DocumentBatch`].
///
/// Entries are sorted by file name so batch order is deterministic
/// across platforms. Subdirectories are skipped; an empty directory
/// yields an empty batch.
pub fn read_manifest_dir(dir: &Path) -> Result<DocumentBatch, BatchError> {
    let entries = fs::read_dir(dir)
        .map_err(|e| BatchError::ReadDir { path: dir.to_path_buf(), source: e })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|e| BatchError::ReadDir { path: dir.to_path_buf(), source: e })?;
        let path = entry.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut batch = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes =
            fs::read(&path).map_err(|e| BatchError::ReadFile { path: path.clone(), source: e })?;
        let source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        batch.push(ManifestDocument { source, bytes });
    }

    tracing::debug!(dir = %dir.display(), documents = batch.len(), "enumerated manifest directory");
    Ok(batch)
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
