//! Error types for the generation engine.

use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for propkeys-codegen operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// A fatal condition encountered during a generation run.
///
/// There is no partial-success mode: every variant aborts the run, and
/// nothing is written to the destination once one occurs.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// A property file could not be opened or read.
    #[error("failed to read '{path}'")]
    #[diagnostic(code(propkeys::read_error))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A property file contained a malformed escape sequence.
    #[error("failed to parse '{path}'")]
    #[diagnostic(code(propkeys::parse_error))]
    Parse {
        path: PathBuf,
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        message: String,
    },

    /// The generated document could not be written.
    #[error("failed to write '{path}'")]
    #[diagnostic(
        code(propkeys::write_error),
        help("a partially written file is not a valid artifact and should be discarded")
    )]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The target name is not a usable qualified name.
    #[error("invalid target name '{target}': {reason}")]
    #[diagnostic(
        code(propkeys::invalid_target),
        help("expected a dotted path of identifiers, e.g. 'myapp.config.Keys'")
    )]
    InvalidTarget { target: String, reason: String },
}

impl Error {
    /// Create a read error for the given path
    pub fn read(path: &Path, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Create a parse error with source context for the given path
    pub fn parse(
        path: &Path,
        content: &str,
        span: impl Into<SourceSpan>,
        message: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::Parse {
            path: path.to_path_buf(),
            src: NamedSource::new(path.to_string_lossy(), content.to_string()),
            span: span.into(),
            message: message.into(),
        })
    }

    /// Create a write error for the given path
    pub fn write(path: &Path, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Create a target name validation error
    pub fn invalid_target(target: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidTarget {
            target: target.into(),
            reason: reason.into(),
        })
    }
}
