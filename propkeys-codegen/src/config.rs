//! Render configuration: access level, layout, and target name.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Accessibility of the generated constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceAccess {
    /// Constants visible outside the crate (`pub`). The default.
    #[default]
    Public,
    /// Constants visible within the crate only (`pub(crate)`).
    Crate,
}

impl SourceAccess {
    /// Returns the access level identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceAccess::Public => "public",
            SourceAccess::Crate => "crate",
        }
    }

    /// Visibility prefix emitted in front of generated items, trailing
    /// space included.
    pub(crate) fn modifier(self) -> &'static str {
        match self {
            SourceAccess::Public => "pub ",
            SourceAccess::Crate => "pub(crate) ",
        }
    }
}

impl fmt::Display for SourceAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SourceAccess {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "public" | "pub" => Ok(SourceAccess::Public),
            "crate" | "package" => Ok(SourceAccess::Crate),
            _ => Err(format!(
                "unknown access level '{}', expected 'public' or 'crate'",
                s
            )),
        }
    }
}

/// Structural arrangement of the generated constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceLayout {
    /// One sub-container per property file, named after its basename.
    /// The default layout.
    #[default]
    Nested,
    /// All constants at the top level, each prefixed with the uppercased
    /// basename of its property file.
    FlatPrefixed,
    /// All constants at the top level with no prefix. Convenient for a
    /// single property file; with several files, same-named keys produce
    /// same-named constants and the collision surfaces when the
    /// generated code is compiled, not here.
    FlatUnprefixed,
}

impl SourceLayout {
    /// Returns the layout identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceLayout::Nested => "nested",
            SourceLayout::FlatPrefixed => "flat-prefixed",
            SourceLayout::FlatUnprefixed => "flat-unprefixed",
        }
    }
}

impl fmt::Display for SourceLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SourceLayout {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nested" => Ok(SourceLayout::Nested),
            "flat-prefixed" | "flat-with-prefix" => Ok(SourceLayout::FlatPrefixed),
            "flat-unprefixed" | "flat-without-prefix" => Ok(SourceLayout::FlatUnprefixed),
            _ => Err(format!(
                "unknown layout '{}', expected 'nested', 'flat-prefixed', or 'flat-unprefixed'",
                s
            )),
        }
    }
}

/// Dotted qualified name of the generated container,
/// e.g. `myapp.config.Keys`.
///
/// The final segment names the top-level module; the leading segments
/// become the directory path of the generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetName {
    segments: Vec<String>,
}

impl TargetName {
    /// Parse a dotted qualified name, rejecting empty names, empty
    /// segments, and segments that are not valid identifiers.
    pub fn parse(target: &str) -> Result<Self> {
        if target.is_empty() {
            return Err(Error::invalid_target(target, "name is empty"));
        }
        let segments: Vec<String> = target.split('.').map(str::to_string).collect();
        for segment in &segments {
            if segment.is_empty() {
                return Err(Error::invalid_target(target, "name has an empty segment"));
            }
            if !is_identifier(segment) {
                return Err(Error::invalid_target(
                    target,
                    format!("'{}' is not a valid identifier", segment),
                ));
            }
        }
        Ok(Self { segments })
    }

    /// Name of the top-level container (the final segment).
    pub fn container(&self) -> &str {
        // parse() guarantees at least one segment
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Location of the generated file relative to the destination root,
    /// e.g. `myapp.config.Keys` -> `myapp/config/Keys.rs`.
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self.segments.iter().collect();
        path.set_extension("rs");
        path
    }
}

impl fmt::Display for TargetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl FromStr for TargetName {
    type Err = Box<Error>;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Immutable configuration for one generation run.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub access: SourceAccess,
    pub layout: SourceLayout,
    pub target: TargetName,
}

impl RenderConfig {
    /// Create a configuration with the default access and layout.
    pub fn new(target: TargetName) -> Self {
        Self {
            access: SourceAccess::default(),
            layout: SourceLayout::default(),
            target,
        }
    }

    /// Set the access level of the generated constants.
    pub fn with_access(mut self, access: SourceAccess) -> Self {
        self.access = access;
        self
    }

    /// Set the layout of the generated constants.
    pub fn with_layout(mut self, layout: SourceLayout) -> Self {
        self.layout = layout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_from_str() {
        assert_eq!(SourceAccess::from_str("public").unwrap(), SourceAccess::Public);
        assert_eq!(SourceAccess::from_str("crate").unwrap(), SourceAccess::Crate);
        assert_eq!(SourceAccess::from_str("package").unwrap(), SourceAccess::Crate);
        assert!(SourceAccess::from_str("protected").is_err());
    }

    #[test]
    fn test_layout_from_str() {
        assert_eq!(SourceLayout::from_str("nested").unwrap(), SourceLayout::Nested);
        assert_eq!(
            SourceLayout::from_str("flat-prefixed").unwrap(),
            SourceLayout::FlatPrefixed
        );
        assert_eq!(
            SourceLayout::from_str("flat-without-prefix").unwrap(),
            SourceLayout::FlatUnprefixed
        );
        assert!(SourceLayout::from_str("wide").is_err());
    }

    #[test]
    fn test_target_name() {
        let target = TargetName::parse("myapp.config.Keys").unwrap();
        assert_eq!(target.container(), "Keys");
        assert_eq!(target.relative_path(), PathBuf::from("myapp/config/Keys.rs"));
        assert_eq!(target.to_string(), "myapp.config.Keys");

        let single = TargetName::parse("Keys").unwrap();
        assert_eq!(single.container(), "Keys");
        assert_eq!(single.relative_path(), PathBuf::from("Keys.rs"));
    }

    #[test]
    fn test_target_name_rejections() {
        assert!(TargetName::parse("").is_err());
        assert!(TargetName::parse("a..b").is_err());
        assert!(TargetName::parse(".a").is_err());
        assert!(TargetName::parse("a.").is_err());
        assert!(TargetName::parse("a.1b").is_err());
        assert!(TargetName::parse("a.b-c").is_err());
    }
}
