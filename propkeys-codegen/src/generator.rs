//! Orchestration of a generation run.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::properties;
use crate::render;
use crate::source::PropertySource;

/// Outcome of writing a generation run to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The complete document was written to the given path.
    Written(PathBuf),
    /// There were no property sources, so nothing was generated.
    Skipped,
}

/// Ties the key reader and the layout renderer together for one run.
///
/// A generator holds no state beyond its configuration, so independent
/// runs over disjoint inputs may be parallelized freely by the caller.
#[derive(Debug, Clone)]
pub struct Generator {
    config: RenderConfig,
}

impl Generator {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render the constants document for the given property files.
    ///
    /// Returns `Ok(None)` when `paths` is empty: an empty run is a
    /// no-op, not an error. Files are processed in the given order; an
    /// unreadable or malformed file aborts the whole run before any
    /// text is produced.
    pub fn generate(&self, paths: &[PathBuf]) -> Result<Option<String>> {
        if paths.is_empty() {
            return Ok(None);
        }
        let mut sources = Vec::with_capacity(paths.len());
        for path in paths {
            let keys = properties::read_keys(path)?;
            sources.push((PropertySource::new(path), keys));
        }
        Ok(Some(render::render(&self.config, &sources)))
    }

    /// Location of the generated file under the destination root,
    /// derived from the target name (`a.b.C` -> `a/b/C.rs`).
    pub fn output_path(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(self.config.target.relative_path())
    }

    /// Render and write the document under `out_dir`, creating parent
    /// directories as needed. Either the complete document is written
    /// or nothing is; a failed write leaves no valid artifact behind.
    pub fn write(&self, paths: &[PathBuf], out_dir: &Path) -> Result<WriteOutcome> {
        let Some(document) = self.generate(paths)? else {
            return Ok(WriteOutcome::Skipped);
        };
        let path = self.output_path(out_dir);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::write(parent, source))?;
        }
        fs::write(&path, &document).map_err(|source| Error::write(&path, source))?;
        Ok(WriteOutcome::Written(path))
    }
}
