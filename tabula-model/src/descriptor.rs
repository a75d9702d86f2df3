//! Schema-level metadata: enums, structs and the combine struct.

use serde::{Deserialize, Serialize};

use crate::FieldType;

/// Output tags restricting which targets include a table or descriptor.
///
/// An empty tag set matches every target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputTags(Vec<String>);

impl OutputTags {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tags.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Check whether a target tag (e.g. `.lua`) is included.
    pub fn matches(&self, tag: &str) -> bool {
        self.0.is_empty() || self.0.iter().any(|t| t == tag)
    }
}

/// Anything that can be filtered by output tag.
pub trait Tagged {
    fn tags(&self) -> &OutputTags;

    fn match_tag(&self, tag: &str) -> bool {
        self.tags().matches(tag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptorKind {
    Enum,
    Struct,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptorUsage {
    #[default]
    None,
    /// Synthetic descriptor whose fields enumerate every table.
    CombineStruct,
}

/// Metadata for one field of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: FieldType,
    #[serde(default)]
    pub repeated: bool,
    /// Ordinal, meaningful for enum descriptors only.
    #[serde(default)]
    pub enum_value: i32,
    /// Name of the linked nested descriptor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complex: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, ty: impl Into<FieldType>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            repeated: false,
            enum_value: 0,
            complex: None,
        }
    }

    /// An enum member with the given ordinal.
    pub fn enum_member(name: impl Into<String>, value: i32) -> Self {
        Self {
            enum_value: value,
            ..Self::new(name, crate::ScalarType::Int32)
        }
    }

    /// A repeated struct field linked to the named descriptor.
    pub fn link(name: impl Into<String>, descriptor: impl Into<String>) -> Self {
        Self {
            repeated: true,
            complex: Some(descriptor.into()),
            ..Self::new(name, FieldType::STRUCT)
        }
    }
}

/// Schema metadata for an enum or struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    pub name: String,
    pub kind: DescriptorKind,
    #[serde(default)]
    pub usage: DescriptorUsage,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    /// Field names declared as lookup keys.
    #[serde(default)]
    pub indexes: Vec<String>,
    #[serde(default)]
    pub tags: OutputTags,
}

impl Descriptor {
    fn new(name: impl Into<String>, kind: DescriptorKind) -> Self {
        Self {
            name: name.into(),
            kind,
            usage: DescriptorUsage::None,
            fields: Vec::new(),
            indexes: Vec::new(),
            tags: OutputTags::default(),
        }
    }

    pub fn new_enum(name: impl Into<String>) -> Self {
        Self::new(name, DescriptorKind::Enum)
    }

    pub fn new_struct(name: impl Into<String>) -> Self {
        Self::new(name, DescriptorKind::Struct)
    }

    pub fn combine_struct(name: impl Into<String>) -> Self {
        Self {
            usage: DescriptorUsage::CombineStruct,
            ..Self::new(name, DescriptorKind::Struct)
        }
    }

    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn index(mut self, key: impl Into<String>) -> Self {
        self.indexes.push(key.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = OutputTags::new(tags);
        self
    }

    pub fn is_enum(&self) -> bool {
        self.kind == DescriptorKind::Enum
    }

    pub fn is_combine_struct(&self) -> bool {
        self.usage == DescriptorUsage::CombineStruct
    }

    pub fn get_field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Resolve declared index keys to their fields.
    ///
    /// Yields `Err(name)` for a key that names no field.
    pub fn index_fields(&self) -> impl Iterator<Item = Result<&FieldDescriptor, &str>> {
        self.indexes
            .iter()
            .map(|key| self.get_field(key).ok_or(key.as_str()))
    }
}

impl Tagged for Descriptor {
    fn tags(&self) -> &OutputTags {
        &self.tags
    }
}

/// All descriptors of one export, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileDescriptor {
    pub descriptors: Vec<Descriptor>,
}

impl FileDescriptor {
    pub fn new(descriptors: impl IntoIterator<Item = Descriptor>) -> Self {
        Self {
            descriptors: descriptors.into_iter().collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    pub fn enums(&self) -> impl Iterator<Item = &Descriptor> {
        self.descriptors.iter().filter(|d| d.is_enum())
    }

    pub fn combine_structs(&self) -> impl Iterator<Item = &Descriptor> {
        self.descriptors.iter().filter(|d| d.is_combine_struct())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScalarType;

    #[test]
    fn test_empty_tags_match_everything() {
        let tags = OutputTags::default();
        assert!(tags.matches(".lua"));
        assert!(tags.matches(".json"));
    }

    #[test]
    fn test_tags_restrict_targets() {
        let tags = OutputTags::new([".lua", ".cs"]);
        assert!(tags.matches(".lua"));
        assert!(!tags.matches(".json"));
    }

    #[test]
    fn test_index_fields_resolution() {
        let item = Descriptor::new_struct("Item")
            .field(FieldDescriptor::new("id", ScalarType::Int32))
            .index("id")
            .index("missing");

        let resolved: Vec<_> = item.index_fields().collect();
        assert_eq!(resolved[0].map(|f| f.name.as_str()), Ok("id"));
        assert_eq!(resolved[1], Err("missing"));
    }

    #[test]
    fn test_file_descriptor_filters_keep_order() {
        let file = FileDescriptor::new([
            Descriptor::new_enum("B"),
            Descriptor::new_struct("Item"),
            Descriptor::new_enum("A"),
            Descriptor::combine_struct("Config"),
        ]);

        let enums: Vec<_> = file.enums().map(|d| d.name.as_str()).collect();
        assert_eq!(enums, ["B", "A"]);
        assert_eq!(file.combine_structs().count(), 1);
        assert!(file.get("Item").is_some());
    }

    #[test]
    fn test_descriptor_from_json() {
        let d: Descriptor = serde_json::from_str(
            r#"{
                "name": "Config",
                "kind": "struct",
                "usage": "combine_struct",
                "fields": [{ "name": "Item", "type": "struct", "repeated": true, "complex": "Item" }]
            }"#,
        )
        .unwrap();

        assert!(d.is_combine_struct());
        assert_eq!(d.fields[0].complex.as_deref(), Some("Item"));
        assert!(d.tags.is_empty());
    }
}
