//! Enum renderer: name → ordinal lookup blocks.

use tabula_model::Descriptor;

use crate::{builder::CodeBuilder, syntax::LiteralSyntax};

/// Renders every enum descriptor as a map from member name to ordinal.
///
/// The enclosing namespace (`tab.Enum = {`, `"Enum": {`) is emitted by the
/// target; this renderer only writes its entries.
pub struct EnumRenderer<'a, S: ?Sized> {
    syntax: &'a S,
}

impl<'a, S: LiteralSyntax + ?Sized> EnumRenderer<'a, S> {
    pub fn new(syntax: &'a S) -> Self {
        Self { syntax }
    }

    pub fn render_all(&self, out: &mut CodeBuilder, enums: &[&Descriptor]) {
        for (i, descriptor) in enums.iter().enumerate() {
            self.render(out, descriptor, i + 1 < enums.len());
        }
    }

    pub fn render(&self, out: &mut CodeBuilder, descriptor: &Descriptor, separated: bool) {
        let key = self.syntax.field_key(&descriptor.name);
        let object = self.syntax.object();
        let sep = if separated { "," } else { "" };

        if descriptor.fields.is_empty() {
            out.push_line(&format!("{key}{}{sep}", object.empty()));
            return;
        }

        out.push_line(&format!("{key}{}", object.open));
        out.push_indent();
        for (i, field) in descriptor.fields.iter().enumerate() {
            let member_sep = if i + 1 < descriptor.fields.len() { "," } else { "" };
            out.push_line(&format!(
                "{}{}{member_sep}",
                self.syntax.map_key(&field.name),
                field.enum_value
            ));
        }
        out.push_dedent();
        out.push_line(&format!("{}{sep}", object.close));
    }
}

#[cfg(test)]
mod tests {
    use tabula_model::FieldDescriptor;

    use super::*;
    use crate::{
        builder::Indent,
        testing::{TestSyntax, assert_content_eq},
    };

    #[test]
    fn test_ordinals_follow_source_values() {
        let actor = Descriptor::new_enum("ActorType")
            .field(FieldDescriptor::enum_member("None", 0))
            .field(FieldDescriptor::enum_member("Dva", 5))
            .field(FieldDescriptor::enum_member("Pharah", 2));
        let empty = Descriptor::new_enum("Unused");

        let mut out = CodeBuilder::new(Indent::LUA);
        EnumRenderer::new(&TestSyntax).render_all(&mut out, &[&actor, &empty]);

        assert_content_eq(
            "ActorType = {\n\t[\"None\"] = 0,\n\t[\"Dva\"] = 5,\n\t[\"Pharah\"] = 2\n},\nUnused = {}\n",
            &out.build(),
        );
    }

    #[test]
    fn test_no_enums_emits_nothing() {
        let mut out = CodeBuilder::new(Indent::LUA);
        EnumRenderer::new(&TestSyntax).render_all(&mut out, &[]);
        assert!(out.is_empty());
    }
}
