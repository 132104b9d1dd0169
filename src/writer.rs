//! Destination for generated files.
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Capability to persist rendered output.
pub trait OutputWriter {
    /// Writes `content` to `path`, replacing any existing file.
    ///
    /// # Errors
    /// * `Error::WriteError` if the destination cannot be written
    fn write(&self, path: &Path, content: &str) -> Result<()>;
}

/// Writes straight to the local filesystem.
///
/// Writes are not atomic: an interrupted write can leave a truncated file.
/// Missing parent directories are not created.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalWriter;

impl LocalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for LocalWriter {
    fn write(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content)
            .map_err(|source| Error::WriteError { path: path.display().to_string(), source })
    }
}
