//! Key-to-constant generation engine for property files.
//!
//! Reads the keys declared in `key=value` property files and renders
//! them as Rust string constants, so calling code can reference a
//! property key without hard-coding its literal text. Three layouts are
//! supported: one nested module per file, flat constants prefixed with
//! the file basename, and flat constants without a prefix (the caller
//! accepts the collision risk of the last one).

mod code_builder;
mod config;
mod error;
mod generator;
mod naming;
mod properties;
mod render;
mod source;

// Run configuration
pub use config::{RenderConfig, SourceAccess, SourceLayout, TargetName};
// Errors
pub use error::{Error, Result};
// Orchestration
pub use generator::{Generator, WriteOutcome};
// Identifier transformations
pub use naming::{basename, key_to_identifier, split_words, to_pascal_case, to_upper_snake};
// Key reading
pub use properties::read_keys;
pub use source::PropertySource;
