use tabula_codegen::{
    CodeBuilder, EnumRenderer, Globals, Indent, Printer, RenderError, TableRenderer,
};
use tabula_model::{Descriptor, Table};

use crate::syntax::{JsonSyntax, quote};

/// Printer for the `json` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonPrinter;

impl Printer for JsonPrinter {
    fn target(&self) -> &'static str {
        "json"
    }

    fn tag(&self) -> &'static str {
        ".json"
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }

    fn indent(&self) -> Indent {
        Indent::JSON
    }

    // JSON has no comments; the version is not stamped.
    fn emit_header(&self, out: &mut CodeBuilder, _globals: &Globals) -> Result<(), RenderError> {
        out.push_line("{").push_indent();
        Ok(())
    }

    fn emit_tables(&self, out: &mut CodeBuilder, tables: &[&Table]) -> Result<(), RenderError> {
        // The Enum entry always follows the last table.
        TableRenderer::new(&JsonSyntax).render_all(out, tables, true)
    }

    fn emit_enums(&self, out: &mut CodeBuilder, enums: &[&Descriptor]) -> Result<(), RenderError> {
        let key = quote("Enum");
        if enums.is_empty() {
            out.push_line(&format!("{key}: {{}}"));
            return Ok(());
        }

        out.push_line(&format!("{key}: {{")).push_indent();
        EnumRenderer::new(&JsonSyntax).render_all(out, enums);
        out.push_dedent().push_line("}");
        Ok(())
    }

    fn emit_footer(&self, out: &mut CodeBuilder, _globals: &Globals) -> Result<(), RenderError> {
        out.push_dedent().push_line("}");
        Ok(())
    }
}
