//! Index planning for combine-struct lookup maps.
//!
//! A combine struct enumerates every table as one of its fields. When the
//! struct linked from such a field declares index keys, the target emits code
//! that builds a `<Table>By<Key>` map at load time.

use std::collections::HashSet;

use tabula_core::to_pascal_case;
use tabula_model::{FieldDescriptor, FileDescriptor, Table, Tagged};

use crate::error::RenderError;

/// One lookup map to build from an emitted table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSpec<'a> {
    /// Name the table data is bound to.
    pub table: &'a str,
    /// Key field of the table's records.
    pub key: &'a FieldDescriptor,
    /// Name of the map, e.g. `ItemById`.
    pub map_name: String,
}

impl<'a> IndexSpec<'a> {
    pub fn new(table: &'a str, key: &'a FieldDescriptor) -> Self {
        Self {
            table,
            key,
            map_name: format!("{table}By{}", to_pascal_case(&key.name)),
        }
    }
}

/// Name the enum namespace is bound to, next to the tables.
pub const ENUM_NAMESPACE: &str = "Enum";

/// Collect the index maps a target with output tag `tag` must emit.
///
/// Fields whose linked descriptor fails the tag filter or declares no keys
/// are skipped, as are fields whose table is not in `emitted` (it was
/// excluded by its own tags). Every map name must be unique among the
/// emitted tables, the enum namespace and the other maps, since they all
/// share one namespace in the generated code.
pub fn plan_indexes<'a>(
    file: &'a FileDescriptor,
    tag: &str,
    emitted: &[&Table],
) -> Result<Vec<IndexSpec<'a>>, RenderError> {
    let mut taken: HashSet<String> = emitted.iter().map(|t| t.name.clone()).collect();
    taken.insert(ENUM_NAMESPACE.to_string());
    let mut specs = Vec::new();

    for combine in file.combine_structs() {
        for field in &combine.fields {
            let Some(link) = field.complex.as_deref() else {
                continue;
            };
            let linked = file
                .get(link)
                .ok_or_else(|| RenderError::UnknownDescriptor {
                    owner: combine.name.clone(),
                    field: field.name.clone(),
                    descriptor: link.to_string(),
                })?;

            if !linked.match_tag(tag) {
                tracing::debug!(table = %field.name, tag, "index skipped by output tag");
                continue;
            }
            if linked.indexes.is_empty() {
                continue;
            }
            if !emitted.iter().any(|t| t.name == field.name) {
                tracing::debug!(table = %field.name, tag, "index skipped, table not emitted");
                continue;
            }

            for key in linked.index_fields() {
                let key = key.map_err(|key| RenderError::UnknownIndexKey {
                    descriptor: linked.name.clone(),
                    key: key.to_string(),
                })?;
                let spec = IndexSpec::new(&field.name, key);

                if !taken.insert(spec.map_name.clone()) {
                    return Err(RenderError::NameClash {
                        name: spec.map_name,
                        origin: format!("index of table '{}' on key '{}'", field.name, key.name),
                    });
                }
                specs.push(spec);
            }
        }
    }

    Ok(specs)
}

#[cfg(test)]
mod tests {
    use tabula_model::{Descriptor, ScalarType};

    use super::*;

    fn file(item: Descriptor) -> FileDescriptor {
        FileDescriptor::new([
            item,
            Descriptor::combine_struct("Config").field(FieldDescriptor::link("Item", "Item")),
        ])
    }

    fn item() -> Descriptor {
        Descriptor::new_struct("Item")
            .field(FieldDescriptor::new("id", ScalarType::Int32))
            .field(FieldDescriptor::new("name", ScalarType::String))
    }

    #[test]
    fn test_map_name_convention() {
        let key = FieldDescriptor::new("id", ScalarType::Int32);
        assert_eq!(IndexSpec::new("Item", &key).map_name, "ItemById");
    }

    #[test]
    fn test_plan_one_index_per_key() {
        let file = file(item().index("id").index("name"));
        let table = Table::new("Item");

        let specs = plan_indexes(&file, ".lua", &[&table]).unwrap();
        let names: Vec<_> = specs.iter().map(|s| s.map_name.as_str()).collect();
        assert_eq!(names, ["ItemById", "ItemByName"]);
    }

    #[test]
    fn test_descriptor_without_keys_is_skipped() {
        let file = file(item());
        let specs = plan_indexes(&file, ".lua", &[]).unwrap();
        assert!(specs.is_empty());
    }

    #[test]
    fn test_tag_filter_skips_field() {
        let file = file(item().index("id").with_tags([".json"]));
        let specs = plan_indexes(&file, ".lua", &[]).unwrap();
        assert!(specs.is_empty());
    }

    #[test]
    fn test_unknown_descriptor() {
        let file = FileDescriptor::new([
            Descriptor::combine_struct("Config").field(FieldDescriptor::link("Item", "Missing")),
        ]);
        let err = plan_indexes(&file, ".lua", &[]).unwrap_err();
        assert!(matches!(err, RenderError::UnknownDescriptor { .. }));
    }

    #[test]
    fn test_unknown_index_key() {
        let file = file(item().index("code"));
        let err = plan_indexes(&file, ".lua", &[&Table::new("Item")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "descriptor 'Item' declares unknown index key 'code'"
        );
    }

    #[test]
    fn test_table_not_emitted_is_skipped() {
        let file = file(item().index("id"));
        let specs = plan_indexes(&file, ".lua", &[]).unwrap();
        assert!(specs.is_empty());
    }

    #[test]
    fn test_map_names_from_different_keys_clash() {
        let item = Descriptor::new_struct("Item")
            .field(FieldDescriptor::new("item_id", ScalarType::Int32))
            .field(FieldDescriptor::new("itemId", ScalarType::Int32))
            .index("item_id")
            .index("itemId");
        let file = file(item);

        let err = plan_indexes(&file, ".lua", &[&Table::new("Item")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "'ItemByItemId' (index of table 'Item' on key 'itemId') clashes with another name in \
             the output"
        );
    }

    #[test]
    fn test_map_name_clashes_with_table() {
        let file = file(item().index("id"));
        let item = Table::new("Item");
        let taken = Table::new("ItemById");

        let err = plan_indexes(&file, ".lua", &[&item, &taken]).unwrap_err();
        assert!(matches!(err, RenderError::NameClash { ref name, .. } if name == "ItemById"));
    }

    #[test]
    fn test_plain_struct_fields_are_ignored() {
        let file = FileDescriptor::new([
            item().index("id"),
            Descriptor::new_struct("NotCombined").field(FieldDescriptor::link("Item", "Item")),
        ]);
        assert!(plan_indexes(&file, ".lua", &[]).unwrap().is_empty());
    }
}
