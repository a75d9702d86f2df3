//! Table renderer: walks records and emits literal collections.

use std::collections::HashSet;

use tabula_model::{NodeValue, Record, StructInstance, Table};

use crate::{builder::CodeBuilder, error::RenderError, syntax::LiteralSyntax};

/// Renders tables as entries of an enclosing literal, one record per line.
///
/// ```text
/// Item = {
///     { id = 1, name = "Sword" },
///     { id = 2, name = "Shield" }
/// }
/// ```
pub struct TableRenderer<'a, S: ?Sized> {
    syntax: &'a S,
}

impl<'a, S: LiteralSyntax + ?Sized> TableRenderer<'a, S> {
    pub fn new(syntax: &'a S) -> Self {
        Self { syntax }
    }

    /// Render every table in order.
    ///
    /// `more_follows` tells whether the enclosing literal has another entry
    /// after the last table, so the separator after it is only emitted when
    /// the target grammar needs one.
    pub fn render_all(
        &self,
        out: &mut CodeBuilder,
        tables: &[&Table],
        more_follows: bool,
    ) -> Result<(), RenderError> {
        for (i, table) in tables.iter().enumerate() {
            let separated = more_follows || i + 1 < tables.len();
            self.render(out, table, separated)?;
        }
        Ok(())
    }

    /// Render one table, followed by a comma when `separated` is set.
    pub fn render(
        &self,
        out: &mut CodeBuilder,
        table: &Table,
        separated: bool,
    ) -> Result<(), RenderError> {
        tracing::debug!(table = %table.name, records = table.records.len(), "rendering table");

        let key = self.syntax.field_key(&table.name);
        let collection = self.syntax.collection();
        let sep = if separated { "," } else { "" };

        if table.records.is_empty() {
            out.push_line(&format!("{key}{}{sep}", collection.empty()));
            return Ok(());
        }

        out.push_line(&format!("{key}{}", collection.open));
        out.push_indent();
        for (index, record) in table.records.iter().enumerate() {
            let literal = self.record(table, index, record)?;
            let record_sep = if index + 1 < table.records.len() { "," } else { "" };
            out.push_line(&format!("{literal}{record_sep}"));
        }
        out.push_dedent();
        out.push_line(&format!("{}{sep}", collection.close));
        Ok(())
    }

    /// Build the literal for one record.
    pub fn record(
        &self,
        table: &Table,
        index: usize,
        record: &Record,
    ) -> Result<String, RenderError> {
        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(record.nodes.len());

        for node in &record.nodes {
            if !seen.insert(node.name.as_str()) {
                return Err(RenderError::DuplicateField {
                    table: table.name.clone(),
                    record: index,
                    field: node.name.clone(),
                });
            }
            let value = self
                .value(&node.value)
                .map_err(|field| RenderError::DuplicateField {
                    table: table.name.clone(),
                    record: index,
                    field: format!("{}.{field}", node.name),
                })?;
            fields.push(format!("{}{value}", self.syntax.field_key(&node.name)));
        }

        Ok(self.syntax.object().wrap_items(fields))
    }

    /// Build the literal for a field value.
    ///
    /// Fails with the name of a field repeated inside a struct instance.
    fn value(&self, value: &NodeValue) -> Result<String, String> {
        let syntax = self.syntax;
        Ok(match value {
            NodeValue::Scalar { ty, value } => syntax.wrap(*ty, value),
            NodeValue::Array { ty, values } => syntax
                .array()
                .wrap_items(values.iter().map(|v| syntax.wrap(*ty, v))),
            NodeValue::Struct(instance) => self.instance(instance)?,
            NodeValue::StructArray(instances) => syntax.array().wrap_items(
                instances
                    .iter()
                    .map(|i| self.instance(i))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
        })
    }

    fn instance(&self, instance: &StructInstance) -> Result<String, String> {
        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(instance.fields.len());
        for leaf in &instance.fields {
            if !seen.insert(leaf.name.as_str()) {
                return Err(leaf.name.clone());
            }
            fields.push(format!(
                "{}{}",
                self.syntax.field_key(&leaf.name),
                self.syntax.wrap(leaf.ty, &leaf.value)
            ));
        }
        Ok(self.syntax.object().wrap_items(fields))
    }
}

#[cfg(test)]
mod tests {
    use tabula_model::{Node, ScalarType, StructInstance};

    use super::*;
    use crate::{
        builder::Indent,
        testing::{TestSyntax, assert_content_eq},
    };

    fn render(tables: &[&Table], more_follows: bool) -> String {
        let mut out = CodeBuilder::new(Indent::LUA);
        TableRenderer::new(&TestSyntax)
            .render_all(&mut out, tables, more_follows)
            .unwrap();
        out.build()
    }

    #[test]
    fn test_two_records() {
        let table = Table::new("Item")
            .record([
                Node::scalar("id", ScalarType::Int32, "1"),
                Node::scalar("name", ScalarType::String, "Sword"),
            ])
            .record([
                Node::scalar("id", ScalarType::Int32, "2"),
                Node::scalar("name", ScalarType::String, "Shield"),
            ]);

        assert_content_eq(
            "Item = {\n\t{ id = 1, name = \"Sword\" },\n\t{ id = 2, name = \"Shield\" }\n}\n",
            &render(&[&table], false),
        );
    }

    #[test]
    fn test_empty_table_is_empty_collection() {
        assert_eq!(render(&[&Table::new("Empty")], false), "Empty = {}\n");
    }

    #[test]
    fn test_table_separators() {
        let a = Table::new("A");
        let b = Table::new("B");
        assert_eq!(render(&[&a, &b], false), "A = {},\nB = {}\n");
        assert_eq!(render(&[&a, &b], true), "A = {},\nB = {},\n");
    }

    #[test]
    fn test_repeated_scalar_separator_count() {
        let table = Table::new("T").record([Node::array(
            "ids",
            ScalarType::Int32,
            ["1", "2", "3", "4"],
        )]);
        let out = render(&[&table], false);
        assert!(out.contains("{ ids = { 1, 2, 3, 4 } }"));
    }

    #[test]
    fn test_empty_repeated_fields() {
        let table = Table::new("T").record([
            Node::array("ids", ScalarType::Int32, Vec::<String>::new()),
            Node::struct_array("skills", Vec::new()),
        ]);
        let out = render(&[&table], false);
        assert!(out.contains("{ ids = {}, skills = {} }"));
    }

    #[test]
    fn test_struct_fields() {
        let table = Table::new("T").record([
            Node::single_struct(
                "pos",
                StructInstance::new()
                    .field("x", ScalarType::Float, "1.5")
                    .field("y", ScalarType::Float, "-2"),
            ),
            Node::struct_array(
                "skills",
                [
                    StructInstance::new().field("id", ScalarType::Int32, "7"),
                    StructInstance::new().field("id", ScalarType::Int32, "9"),
                ],
            ),
        ]);
        let out = render(&[&table], false);
        assert!(out.contains(
            "{ pos = { x = 1.5, y = -2 }, skills = { { id = 7 }, { id = 9 } } }"
        ));
    }

    #[test]
    fn test_duplicate_root_field_aborts() {
        let table = Table::new("T").record([
            Node::scalar("id", ScalarType::Int32, "1"),
            Node::scalar("id", ScalarType::Int32, "2"),
        ]);
        let mut out = CodeBuilder::new(Indent::LUA);
        let err = TableRenderer::new(&TestSyntax)
            .render(&mut out, &table, false)
            .unwrap_err();
        assert!(matches!(
            err,
            RenderError::DuplicateField { record: 0, ref field, .. } if field == "id"
        ));
    }

    #[test]
    fn test_duplicate_struct_field_aborts() {
        let table = Table::new("T").record([Node::struct_array(
            "skills",
            [StructInstance::new()
                .field("id", ScalarType::Int32, "1")
                .field("id", ScalarType::Int32, "2")],
        )]);
        let mut out = CodeBuilder::new(Indent::LUA);
        let err = TableRenderer::new(&TestSyntax)
            .render(&mut out, &table, false)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "record 0 of table 'T' declares field 'skills.id' more than once"
        );
    }
}
