//! Rendering of key sets into the generated constants document.
//!
//! Pure dispatch on [`SourceLayout`]: one render function per layout,
//! no shared renderer state. Given the same ordered sources, keys, and
//! configuration, the output is byte-identical on every run.

use crate::code_builder::CodeBuilder;
use crate::config::{RenderConfig, SourceLayout};
use crate::naming;
use crate::source::PropertySource;

/// Keys read from one property source, in render order.
pub(crate) type SourceKeys = (PropertySource, Vec<String>);

/// Render the complete generated document.
pub(crate) fn render(config: &RenderConfig, sources: &[SourceKeys]) -> String {
    let modifier = config.access.modifier();

    let mut builder = CodeBuilder::new()
        .line("//")
        .line("// DO NOT EDIT - File generated by propkeys. Any changes will be overwritten.")
        .line("//")
        .blank()
        .line("/// Constants for the property keys declared in:")
        .line("///");

    let mut names: Vec<String> = sources.iter().map(|(source, _)| source.file_name()).collect();
    names.sort();
    for name in &names {
        builder = builder.line(&format!("/// - `{}`", name));
    }

    builder = builder
        .line("#[allow(non_snake_case, unused)]")
        .line(&format!("{}mod {} {{", modifier, config.target.container()))
        .indent();

    builder = match config.layout {
        SourceLayout::Nested => render_nested(builder, modifier, sources),
        SourceLayout::FlatPrefixed => render_flat(builder, modifier, sources, true),
        SourceLayout::FlatUnprefixed => render_flat(builder, modifier, sources, false),
    };

    builder.dedent().line("}").build()
}

/// One sub-module per property file, named after its basename.
fn render_nested(mut builder: CodeBuilder, modifier: &str, sources: &[SourceKeys]) -> CodeBuilder {
    for (source, keys) in sources {
        let container = naming::to_pascal_case(&source.basename());
        builder = builder
            .blank()
            .line(&format!("/// Keys declared in `{}`.", source.file_name()))
            .line(&format!("{}mod {} {{", modifier, container))
            .indent();
        for key in keys {
            builder = builder.line(&constant(modifier, &naming::key_to_identifier(key), key));
        }
        builder = builder.dedent().line("}");
    }
    builder
}

/// All constants directly in the top-level module, optionally prefixed
/// with the uppercased basename of their property file. Duplicate
/// constant names are not detected here; rustc reports them when the
/// generated file is compiled.
fn render_flat(
    mut builder: CodeBuilder,
    modifier: &str,
    sources: &[SourceKeys],
    prefixed: bool,
) -> CodeBuilder {
    for (source, keys) in sources {
        builder = builder.blank();
        let prefix = prefixed.then(|| naming::to_upper_snake(&source.basename()));
        for key in keys {
            let name = match &prefix {
                Some(prefix) => format!("{}_{}", prefix, naming::key_to_identifier(key)),
                None => naming::key_to_identifier(key),
            };
            builder = builder.line(&constant(modifier, &name, key));
        }
    }
    builder
}

/// One constant item. The value is the original key text verbatim,
/// quoted with debug formatting so that quotes, backslashes, and
/// non-printable characters always yield a valid string literal.
fn constant(modifier: &str, name: &str, key: &str) -> String {
    format!("{}const {}: &str = {:?};", modifier, name, key)
}
