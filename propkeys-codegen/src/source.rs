//! A property file supplied to a generation run.

use std::path::{Path, PathBuf};

use crate::naming;

/// A property file plus the name material derived from its path.
///
/// The path is supplied and owned by the caller; the engine only ever
/// reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySource {
    path: PathBuf,
}

impl PropertySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name as listed in the generated banner.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// File name without its final extension.
    pub fn basename(&self) -> String {
        naming::basename(&self.file_name())
    }
}
