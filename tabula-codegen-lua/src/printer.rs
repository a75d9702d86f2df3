use std::fmt::Write;

use tabula_codegen::{
    CodeBuilder, EnumRenderer, Globals, Indent, IndexSpec, Printer, RenderError, TableRenderer,
};
use tabula_model::{Descriptor, Table};

use crate::{indexes::IndexLoop, syntax::LuaSyntax};

/// Printer for the `lua` target.
///
/// Tables land in a `local tab` constructor, index maps and the `Enum`
/// namespace are attached to it afterwards, and the chunk returns `tab`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LuaPrinter;

impl Printer for LuaPrinter {
    fn target(&self) -> &'static str {
        "lua"
    }

    fn tag(&self) -> &'static str {
        ".lua"
    }

    fn file_extension(&self) -> &'static str {
        "lua"
    }

    fn indent(&self) -> Indent {
        Indent::LUA
    }

    fn emit_header(&self, out: &mut CodeBuilder, globals: &Globals) -> Result<(), RenderError> {
        out.push_line("-- Generated by tabula");
        writeln!(out, "-- Version: {}", globals.version)?;
        out.push_blank();
        Ok(())
    }

    fn emit_tables(&self, out: &mut CodeBuilder, tables: &[&Table]) -> Result<(), RenderError> {
        if tables.is_empty() {
            out.push_line("local tab = {}").push_blank();
            return Ok(());
        }

        out.push_line("local tab = {").push_indent();
        TableRenderer::new(&LuaSyntax).render_all(out, tables, false)?;
        out.push_dedent().push_line("}").push_blank();
        Ok(())
    }

    fn builds_indexes(&self) -> bool {
        true
    }

    fn emit_indexes(
        &self,
        out: &mut CodeBuilder,
        indexes: &[IndexSpec<'_>],
    ) -> Result<(), RenderError> {
        for spec in indexes {
            out.emit(&IndexLoop::new(spec));
        }
        Ok(())
    }

    fn emit_enums(&self, out: &mut CodeBuilder, enums: &[&Descriptor]) -> Result<(), RenderError> {
        if enums.is_empty() {
            out.push_line("tab.Enum = {}").push_blank();
            return Ok(());
        }

        out.push_line("tab.Enum = {").push_indent();
        EnumRenderer::new(&LuaSyntax).render_all(out, enums);
        out.push_dedent().push_line("}").push_blank();
        Ok(())
    }

    fn emit_footer(&self, out: &mut CodeBuilder, _globals: &Globals) -> Result<(), RenderError> {
        out.push_line("return tab");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tabula_codegen::testing;

    use super::*;

    #[test]
    fn test_printer_metadata() {
        assert_eq!(LuaPrinter.target(), "lua");
        assert_eq!(LuaPrinter.tag(), ".lua");
        assert_eq!(LuaPrinter.file_extension(), "lua");
    }

    #[test]
    fn test_chunk_returns_tab() {
        let output = LuaPrinter.print(&testing::item_globals()).unwrap();
        assert!(output.content.starts_with("-- Generated by tabula\n-- Version: 1.0.0\n\n"));
        assert!(output.content.ends_with("return tab\n"));
    }
}
