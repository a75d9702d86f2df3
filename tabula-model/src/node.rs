//! Typed value tree: tables, records and field nodes.

use crate::{OutputTags, ScalarType, Tagged};

/// A single scalar field inside a struct instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub name: String,
    pub ty: ScalarType,
    /// Raw literal text as produced by the loader.
    pub value: String,
}

impl Leaf {
    pub fn new(name: impl Into<String>, ty: ScalarType, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty,
            value: value.into(),
        }
    }
}

/// One instance of a struct-typed field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructInstance {
    pub fields: Vec<Leaf>,
}

impl StructInstance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field (builder style).
    pub fn field(
        mut self,
        name: impl Into<String>,
        ty: ScalarType,
        value: impl Into<String>,
    ) -> Self {
        self.fields.push(Leaf::new(name, ty, value));
        self
    }
}

/// Payload of a field node.
///
/// The repeated bit and the struct bit compose independently, so each of the
/// four combinations has its own variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeValue {
    /// Non-repeated scalar.
    Scalar { ty: ScalarType, value: String },
    /// Repeated scalar, one entry per array element.
    Array { ty: ScalarType, values: Vec<String> },
    /// Non-repeated struct.
    Struct(StructInstance),
    /// Repeated struct, possibly empty.
    StructArray(Vec<StructInstance>),
}

/// A root-level field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub value: NodeValue,
}

impl Node {
    pub fn scalar(name: impl Into<String>, ty: ScalarType, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: NodeValue::Scalar {
                ty,
                value: value.into(),
            },
        }
    }

    pub fn array<I, S>(name: impl Into<String>, ty: ScalarType, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            value: NodeValue::Array {
                ty,
                values: values.into_iter().map(Into::into).collect(),
            },
        }
    }

    pub fn single_struct(name: impl Into<String>, instance: StructInstance) -> Self {
        Self {
            name: name.into(),
            value: NodeValue::Struct(instance),
        }
    }

    pub fn struct_array(
        name: impl Into<String>,
        instances: impl IntoIterator<Item = StructInstance>,
    ) -> Self {
        Self {
            name: name.into(),
            value: NodeValue::StructArray(instances.into_iter().collect()),
        }
    }

    /// Whether this node holds a variable-length array.
    pub fn is_repeated(&self) -> bool {
        matches!(
            self.value,
            NodeValue::Array { .. } | NodeValue::StructArray(_)
        )
    }

    /// Whether this node holds struct instances.
    pub fn is_struct(&self) -> bool {
        matches!(self.value, NodeValue::Struct(_) | NodeValue::StructArray(_))
    }
}

/// One row of a table. Node order is output column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub nodes: Vec<Node>,
}

impl Record {
    pub fn new(nodes: impl IntoIterator<Item = Node>) -> Self {
        Self {
            nodes: nodes.into_iter().collect(),
        }
    }
}

/// A named collection of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub tags: OutputTags,
    pub records: Vec<Record>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: OutputTags::default(),
            records: Vec::new(),
        }
    }

    /// Restrict the table to the given output tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = OutputTags::new(tags);
        self
    }

    /// Append a record (builder style).
    pub fn record(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.records.push(Record::new(nodes));
        self
    }
}

impl Tagged for Table {
    fn tags(&self) -> &OutputTags {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_and_struct_bits_compose() {
        let scalar = Node::scalar("id", ScalarType::Int32, "1");
        let array = Node::array("ids", ScalarType::Int32, ["1", "2"]);
        let single = Node::single_struct("pos", StructInstance::new());
        let many = Node::struct_array("skills", Vec::new());

        assert!(!scalar.is_repeated() && !scalar.is_struct());
        assert!(array.is_repeated() && !array.is_struct());
        assert!(!single.is_repeated() && single.is_struct());
        assert!(many.is_repeated() && many.is_struct());
    }

    #[test]
    fn test_table_builder_keeps_record_order() {
        let table = Table::new("Item")
            .record([Node::scalar("id", ScalarType::Int32, "1")])
            .record([Node::scalar("id", ScalarType::Int32, "2")]);

        let ids: Vec<_> = table
            .records
            .iter()
            .map(|r| match &r.nodes[0].value {
                NodeValue::Scalar { value, .. } => value.as_str(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn test_table_tags() {
        let table = Table::new("Item").with_tags([".lua"]);
        assert!(table.match_tag(".lua"));
        assert!(!table.match_tag(".json"));
        assert!(Table::new("Any").match_tag(".json"));
    }
}
