//! Test utilities for printers.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::sync::Mutex;

use tabula_model::{
    Descriptor, FieldDescriptor, FileDescriptor, Model, Node, ScalarType, StructInstance, Table,
};

use crate::{
    Globals,
    builder::{CodeBuilder, Indent},
    enums::EnumRenderer,
    error::RenderError,
    index::IndexSpec,
    printer::{Phase, Printer},
    syntax::{Delimiters, LiteralSyntax},
    table::TableRenderer,
};

/// Version stamped by the fixtures.
pub const VERSION: &str = "1.0.0";

/// The two-record `Item` table indexed by `id`.
pub fn item_model() -> Model {
    let file = FileDescriptor::new([
        Descriptor::new_struct("Item")
            .field(FieldDescriptor::new("id", ScalarType::Int32))
            .field(FieldDescriptor::new("name", ScalarType::String))
            .index("id"),
        Descriptor::combine_struct("Config").field(FieldDescriptor::link("Item", "Item")),
    ]);

    let item = Table::new("Item")
        .record([
            Node::scalar("id", ScalarType::Int32, "1"),
            Node::scalar("name", ScalarType::String, "Sword"),
        ])
        .record([
            Node::scalar("id", ScalarType::Int32, "2"),
            Node::scalar("name", ScalarType::String, "Shield"),
        ]);

    Model::new(file, [item])
}

pub fn item_globals() -> Globals {
    Globals::new(VERSION, item_model())
}

/// A model exercising every field shape, enums, tags and a duplicate key.
///
/// - `Actor`: scalars, enum, repeated scalars, a singular struct, a repeated
///   struct (one record with zero instances), escaped strings
/// - `Item`: indexed by `id` (duplicate value `2`) and `name`
/// - `Empty`: no records
/// - `ServerOnly`: tagged `.server`, never emitted by client targets
pub fn sample_model() -> Model {
    let file = FileDescriptor::new([
        Descriptor::new_enum("ActorType")
            .field(FieldDescriptor::enum_member("None", 0))
            .field(FieldDescriptor::enum_member("Pharah", 1))
            .field(FieldDescriptor::enum_member("Junkrat", 2)),
        Descriptor::new_enum("Element")
            .field(FieldDescriptor::enum_member("Fire", 10))
            .field(FieldDescriptor::enum_member("Ice", 20)),
        Descriptor::new_struct("Actor").field(FieldDescriptor::new("id", ScalarType::Int32)),
        Descriptor::new_struct("Item")
            .field(FieldDescriptor::new("id", ScalarType::Int32))
            .field(FieldDescriptor::new("name", ScalarType::String))
            .index("id")
            .index("name"),
        Descriptor::new_struct("ServerOnly")
            .field(FieldDescriptor::new("id", ScalarType::Int32))
            .index("id")
            .with_tags([".server"]),
        Descriptor::combine_struct("Config")
            .field(FieldDescriptor::link("Actor", "Actor"))
            .field(FieldDescriptor::link("Item", "Item"))
            .field(FieldDescriptor::link("Empty", "Actor"))
            .field(FieldDescriptor::link("ServerOnly", "ServerOnly")),
    ]);

    let actor = Table::new("Actor")
        .record([
            Node::scalar("id", ScalarType::Int32, "100"),
            Node::scalar("name", ScalarType::String, "Fareeha \"Pharah\" Amari"),
            Node::scalar("kind", ScalarType::Enum, "Pharah"),
            Node::scalar("alive", ScalarType::Bool, "true"),
            Node::array("elements", ScalarType::Enum, ["Fire", "Ice"]),
            Node::array("scores", ScalarType::Float, ["1.5", "2", "-0.25"]),
            Node::single_struct(
                "pos",
                StructInstance::new()
                    .field("x", ScalarType::Int32, "3")
                    .field("y", ScalarType::Int32, "4"),
            ),
            Node::struct_array(
                "skills",
                [
                    StructInstance::new()
                        .field("id", ScalarType::Int32, "7")
                        .field("desc", ScalarType::String, "line1\nline2"),
                    StructInstance::new()
                        .field("id", ScalarType::Int32, "8")
                        .field("desc", ScalarType::String, "C:\\path"),
                ],
            ),
        ])
        .record([
            Node::scalar("id", ScalarType::Int32, "101"),
            Node::scalar("name", ScalarType::String, "Junkrat"),
            Node::scalar("kind", ScalarType::Enum, "Junkrat"),
            Node::scalar("alive", ScalarType::Bool, "false"),
            Node::array("elements", ScalarType::Enum, Vec::<String>::new()),
            Node::array("scores", ScalarType::Float, Vec::<String>::new()),
            Node::single_struct(
                "pos",
                StructInstance::new()
                    .field("x", ScalarType::Int32, "0")
                    .field("y", ScalarType::Int32, "0"),
            ),
            Node::struct_array("skills", Vec::new()),
        ]);

    let item = Table::new("Item")
        .record([
            Node::scalar("id", ScalarType::Int32, "1"),
            Node::scalar("name", ScalarType::String, "Sword"),
        ])
        .record([
            Node::scalar("id", ScalarType::Int32, "2"),
            Node::scalar("name", ScalarType::String, "Shield"),
        ])
        .record([
            Node::scalar("id", ScalarType::Int32, "2"),
            Node::scalar("name", ScalarType::String, "Buckler"),
        ]);

    let server_only = Table::new("ServerOnly")
        .with_tags([".server"])
        .record([Node::scalar("id", ScalarType::Int32, "1")]);

    Model::new(file, [actor, item, Table::new("Empty"), server_only])
}

pub fn sample_globals() -> Globals {
    Globals::new(VERSION, sample_model())
}

/// Minimal brace-based syntax for engine tests.
///
/// Strings and enums are quoted with Rust debug formatting.
#[derive(Debug, Default, Clone, Copy)]
pub struct TestSyntax;

impl LiteralSyntax for TestSyntax {
    fn wrap(&self, ty: ScalarType, value: &str) -> String {
        match ty {
            ScalarType::String | ScalarType::Enum => format!("{value:?}"),
            _ => value.to_string(),
        }
    }

    fn field_key(&self, name: &str) -> String {
        format!("{name} = ")
    }

    fn map_key(&self, key: &str) -> String {
        format!("[{key:?}] = ")
    }

    fn collection(&self) -> Delimiters {
        Delimiters::BRACES
    }

    fn array(&self) -> Delimiters {
        Delimiters::BRACES
    }

    fn object(&self) -> Delimiters {
        Delimiters::BRACES
    }
}

/// Printer that records the phases and tables it is asked to emit.
#[derive(Debug, Default)]
pub struct RecordingPrinter {
    pub phases: Mutex<Vec<Phase>>,
    pub tables: Mutex<Vec<String>>,
}

impl RecordingPrinter {
    fn enter(&self, phase: Phase) {
        if let Ok(mut phases) = self.phases.lock() {
            phases.push(phase);
        }
    }
}

impl Printer for RecordingPrinter {
    fn target(&self) -> &'static str {
        "recording"
    }

    fn tag(&self) -> &'static str {
        ".rec"
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }

    fn indent(&self) -> Indent {
        Indent::Spaces(2)
    }

    fn builds_indexes(&self) -> bool {
        true
    }

    fn emit_header(&self, out: &mut CodeBuilder, _globals: &Globals) -> Result<(), RenderError> {
        self.enter(Phase::Header);
        out.push_line("header");
        Ok(())
    }

    fn emit_tables(&self, out: &mut CodeBuilder, tables: &[&Table]) -> Result<(), RenderError> {
        self.enter(Phase::Tables);
        if let Ok(mut names) = self.tables.lock() {
            names.extend(tables.iter().map(|t| t.name.clone()));
        }
        TableRenderer::new(&TestSyntax).render_all(out, tables, false)
    }

    fn emit_indexes(
        &self,
        out: &mut CodeBuilder,
        indexes: &[IndexSpec<'_>],
    ) -> Result<(), RenderError> {
        self.enter(Phase::Indexes);
        for spec in indexes {
            out.push_line(&spec.map_name);
        }
        Ok(())
    }

    fn emit_enums(&self, out: &mut CodeBuilder, enums: &[&Descriptor]) -> Result<(), RenderError> {
        self.enter(Phase::Enums);
        EnumRenderer::new(&TestSyntax).render_all(out, enums);
        Ok(())
    }

    fn emit_footer(&self, out: &mut CodeBuilder, _globals: &Globals) -> Result<(), RenderError> {
        self.enter(Phase::Footer);
        out.push_line("footer");
        Ok(())
    }
}

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {:?}\n", exp));
                diff.push_str(&format!("  actual:   {:?}\n", act));
            }
        }

        if diff.is_empty() {
            diff.push_str("  (difference in trailing newlines)\n");
        }

        panic!("Content mismatch:\n{}", diff);
    }
}
