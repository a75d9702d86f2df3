//! Whole-file output tests for the JSON printer.

use serde_json::{Value, json};
use tabula_codegen::{Globals, Printer, testing};
use tabula_codegen_json::JsonPrinter;
use tabula_model::{Descriptor, FieldDescriptor, FileDescriptor, Model, ScalarType, Table};

fn print(globals: &Globals) -> String {
    JsonPrinter.print(globals).expect("JSON printer failed").content
}

#[test]
fn test_item_file() {
    let output = print(&testing::item_globals());

    insta::assert_snapshot!(output, @r#"
    {
      "Item": [
        { "id": 1, "name": "Sword" },
        { "id": 2, "name": "Shield" }
      ],
      "Enum": {}
    }
    "#);
}

#[test]
fn test_sample_output_is_valid_json() {
    let output = print(&testing::sample_globals());
    let value: Value = serde_json::from_str(&output).expect("output is not valid JSON");

    assert_eq!(
        value["Actor"][0],
        json!({
            "id": 100,
            "name": "Fareeha \"Pharah\" Amari",
            "kind": "Pharah",
            "alive": true,
            "elements": ["Fire", "Ice"],
            "scores": [1.5, 2, -0.25],
            "pos": { "x": 3, "y": 4 },
            "skills": [
                { "id": 7, "desc": "line1\nline2" },
                { "id": 8, "desc": "C:\\path" }
            ]
        })
    );
    assert_eq!(value["Actor"][1]["skills"], json!([]));
    assert_eq!(value["Empty"], json!([]));
    assert_eq!(value["Item"].as_array().map(Vec::len), Some(3));
    assert_eq!(
        value["Enum"],
        json!({
            "ActorType": { "None": 0, "Pharah": 1, "Junkrat": 2 },
            "Element": { "Fire": 10, "Ice": 20 }
        })
    );
}

#[test]
fn test_no_index_code() {
    let output = print(&testing::sample_globals());
    assert!(!output.contains("ItemById"));
}

#[test]
fn test_tag_filter() {
    let output = print(&testing::sample_globals());
    let value: Value = serde_json::from_str(&output).unwrap();

    assert!(value.get("ServerOnly").is_none());
    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    assert!(keys.contains(&"Actor".to_string()));
}

#[test]
fn test_empty_model() {
    let output = print(&Globals::new(testing::VERSION, Model::default()));
    assert_eq!(output, "{\n  \"Enum\": {}\n}\n");
}

#[test]
fn test_json_tagged_table() {
    let model = Model::new(
        FileDescriptor::default(),
        [
            Table::new("LuaOnly").with_tags([".lua"]),
            Table::new("Shared"),
        ],
    );
    let output = print(&Globals::new(testing::VERSION, model));
    assert_eq!(output, "{\n  \"Shared\": [],\n  \"Enum\": {}\n}\n");
}

fn indexed_item(key: &str) -> FileDescriptor {
    FileDescriptor::new([
        Descriptor::new_struct("Item")
            .field(FieldDescriptor::new("id", ScalarType::Int32))
            .index(key),
        Descriptor::combine_struct("Config")
            .field(FieldDescriptor::link("Item", "Item"))
            .field(FieldDescriptor::link("Shared", "Shared")),
        Descriptor::new_struct("Shared"),
    ])
}

#[test]
fn test_indexed_table_filtered_by_tag() {
    let model = Model::new(
        indexed_item("id"),
        [
            Table::new("Item").with_tags([".lua"]),
            Table::new("Shared"),
        ],
    );
    let output = print(&Globals::new(testing::VERSION, model));
    assert_eq!(output, "{\n  \"Shared\": [],\n  \"Enum\": {}\n}\n");
}

#[test]
fn test_index_declarations_are_not_checked() {
    // Only targets that build index maps resolve index keys
    let model = Model::new(indexed_item("code"), [Table::new("Item")]);
    let output = print(&Globals::new(testing::VERSION, model));
    assert_eq!(output, "{\n  \"Item\": [],\n  \"Enum\": {}\n}\n");
}
