//! Append-only output stream with indentation support.

use std::fmt;

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building generated text with proper indentation.
///
/// The whole file is buffered in memory; [`CodeBuilder::build`] hands the
/// finished text to the caller.
///
/// # Example
///
/// ```
/// use tabula_codegen::builder::{CodeBuilder, Indent};
///
/// let mut builder = CodeBuilder::new(Indent::LUA);
/// builder
///     .push_line("local tab = {")
///     .push_indent()
///     .push_line("Item = {}")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "local tab = {\n\tItem = {}\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    unit: String,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            unit: indent.unit(),
            buffer: String::new(),
        }
    }

    /// Add a line with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
        }
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the builder and return the generated text.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(&self.unit);
        }
    }
}

/// Formatted writes append raw text at the current position, without
/// indentation, e.g. `writeln!(builder, "-- Version: {version}")`.
impl fmt::Write for CodeBuilder {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.push_str(s);
        Ok(())
    }
}
