//! Builder for generating properly indented Rust source text.

const INDENT: &str = "    ";

/// Fluent API for accumulating lines of generated code.
///
/// # Example
///
/// ```ignore
/// let code = CodeBuilder::new()
///     .line("pub mod keys {")
///     .indent()
///     .line("pub const NAME: &str = \"name\";")
///     .dedent()
///     .line("}")
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub(crate) struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub(crate) fn line(mut self, s: &str) -> Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub(crate) fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub(crate) fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub(crate) fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Consume the builder and return the generated code.
    pub(crate) fn build(self) -> String {
        self.buffer
    }
}
