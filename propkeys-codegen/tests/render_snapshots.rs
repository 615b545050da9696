//! Snapshot tests for the generated constants document.
//!
//! Property files are written to a temporary directory and fed through
//! the engine end to end; the full rendered document is snapshotted.

use std::fs;
use std::path::PathBuf;

use propkeys_codegen::{Generator, RenderConfig, SourceAccess, SourceLayout, TargetName};
use tempfile::TempDir;

/// Write the standard two-file fixture and return the paths in order.
fn fixture(dir: &TempDir) -> Vec<PathBuf> {
    let prop1 = dir.path().join("prop1.properties");
    fs::write(&prop1, "key1=value1\nkey2=value2\n").expect("write prop1");

    let prop2 = dir.path().join("prop2.properties");
    fs::write(&prop2, "uvw.xyz.18=later\nabc.def.17=earlier\n").expect("write prop2");

    vec![prop1, prop2]
}

fn generate(layout: SourceLayout, access: SourceAccess) -> String {
    let dir = TempDir::new().expect("create temp dir");
    let paths = fixture(&dir);
    let config = RenderConfig::new(TargetName::parse("myapp.Keys").expect("valid target"))
        .with_layout(layout)
        .with_access(access);
    Generator::new(config)
        .generate(&paths)
        .expect("generation should succeed")
        .expect("non-empty source list should produce a document")
}

#[test]
fn test_nested_public() {
    let output = generate(SourceLayout::Nested, SourceAccess::Public);
    insta::assert_snapshot!(output, @r#"
    //
    // DO NOT EDIT - File generated by propkeys. Any changes will be overwritten.
    //

    /// Constants for the property keys declared in:
    ///
    /// - `prop1.properties`
    /// - `prop2.properties`
    #[allow(non_snake_case, unused)]
    pub mod Keys {

        /// Keys declared in `prop1.properties`.
        pub mod Prop1 {
            pub const KEY1: &str = "key1";
            pub const KEY2: &str = "key2";
        }

        /// Keys declared in `prop2.properties`.
        pub mod Prop2 {
            pub const ABC_DEF_17: &str = "abc.def.17";
            pub const UVW_XYZ_18: &str = "uvw.xyz.18";
        }
    }
    "#);
}

#[test]
fn test_flat_prefixed_public() {
    let output = generate(SourceLayout::FlatPrefixed, SourceAccess::Public);
    insta::assert_snapshot!(output, @r#"
    //
    // DO NOT EDIT - File generated by propkeys. Any changes will be overwritten.
    //

    /// Constants for the property keys declared in:
    ///
    /// - `prop1.properties`
    /// - `prop2.properties`
    #[allow(non_snake_case, unused)]
    pub mod Keys {

        pub const PROP1_KEY1: &str = "key1";
        pub const PROP1_KEY2: &str = "key2";

        pub const PROP2_ABC_DEF_17: &str = "abc.def.17";
        pub const PROP2_UVW_XYZ_18: &str = "uvw.xyz.18";
    }
    "#);
}

#[test]
fn test_flat_unprefixed_crate() {
    let output = generate(SourceLayout::FlatUnprefixed, SourceAccess::Crate);
    insta::assert_snapshot!(output, @r#"
    //
    // DO NOT EDIT - File generated by propkeys. Any changes will be overwritten.
    //

    /// Constants for the property keys declared in:
    ///
    /// - `prop1.properties`
    /// - `prop2.properties`
    #[allow(non_snake_case, unused)]
    pub(crate) mod Keys {

        pub(crate) const KEY1: &str = "key1";
        pub(crate) const KEY2: &str = "key2";

        pub(crate) const ABC_DEF_17: &str = "abc.def.17";
        pub(crate) const UVW_XYZ_18: &str = "uvw.xyz.18";
    }
    "#);
}
