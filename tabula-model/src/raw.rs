//! Loader wire form of the value tree and its lowering into [`Node`].
//!
//! The loader hands over a uniform node shape where the type tag, the
//! repeated bit and the child list together describe the value. Lowering
//! checks the shape invariants once so renderers can rely on the typed tree.

use serde::Deserialize;
use thiserror::Error;

use crate::{FieldType, Leaf, Node, NodeValue, ScalarType, StructInstance};

/// Generic value node as produced by the loader.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawNode {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub ty: Option<FieldType>,
    #[serde(default)]
    pub repeated: bool,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub child: Vec<RawNode>,
}

impl RawNode {
    /// A bare value node, as found in child lists.
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn field(name: impl Into<String>, ty: impl Into<FieldType>) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty.into()),
            ..Self::default()
        }
    }

    /// A non-repeated scalar field holding one value node.
    pub fn scalar(name: impl Into<String>, ty: ScalarType, value: impl Into<String>) -> Self {
        Self::field(name, ty).child(Self::value(value))
    }

    pub fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }

    pub fn child(mut self, child: RawNode) -> Self {
        self.child.push(child);
        self
    }
}

/// A shape violation found while lowering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LowerError {
    #[error("{path}: field has no type")]
    MissingType { path: String },

    #[error("{path}: expected exactly one value node, found {found}")]
    ValueArity { path: String, found: usize },

    #[error("{path}: non-repeated struct must hold exactly one instance, found {found}")]
    StructArity { path: String, found: usize },

    #[error("{path}: struct fields inside a struct instance are not supported")]
    NestedStruct { path: String },
}

impl LowerError {
    /// Path of the offending node, e.g. `Item[1].skills[0].lv`.
    pub fn path(&self) -> &str {
        match self {
            Self::MissingType { path }
            | Self::ValueArity { path, .. }
            | Self::StructArity { path, .. }
            | Self::NestedStruct { path } => path,
        }
    }
}

/// Lower one root-level field node. `prefix` locates the node for errors
/// and may be empty.
pub fn lower_node(raw: RawNode, prefix: &str) -> Result<Node, LowerError> {
    let path = if prefix.is_empty() {
        raw.name.clone()
    } else {
        format!("{prefix}.{}", raw.name)
    };
    let ty = raw.ty.ok_or_else(|| LowerError::MissingType { path: path.clone() })?;

    let value = match (ty.scalar(), raw.repeated) {
        (Some(ty), false) => NodeValue::Scalar {
            ty,
            value: single_value(raw.child, &path)?,
        },
        (Some(ty), true) => NodeValue::Array {
            ty,
            values: raw.child.into_iter().map(|c| c.value).collect(),
        },
        (None, repeated) => {
            let mut instances = raw
                .child
                .into_iter()
                .enumerate()
                .map(|(i, inst)| lower_instance(inst, &format!("{path}[{i}]")))
                .collect::<Result<Vec<_>, _>>()?;

            if repeated {
                NodeValue::StructArray(instances)
            } else if instances.len() == 1 {
                NodeValue::Struct(instances.remove(0))
            } else {
                return Err(LowerError::StructArity {
                    path,
                    found: instances.len(),
                });
            }
        }
    };

    Ok(Node {
        name: raw.name,
        value,
    })
}

fn lower_instance(raw: RawNode, path: &str) -> Result<StructInstance, LowerError> {
    let fields = raw
        .child
        .into_iter()
        .map(|field| {
            let field_path = format!("{path}.{}", field.name);
            let ty = match field.ty {
                Some(FieldType::Scalar(ty)) => ty,
                Some(FieldType::Struct(_)) => {
                    return Err(LowerError::NestedStruct { path: field_path });
                }
                None => return Err(LowerError::MissingType { path: field_path }),
            };
            Ok(Leaf {
                value: single_value(field.child, &field_path)?,
                name: field.name,
                ty,
            })
        })
        .collect::<Result<_, _>>()?;

    Ok(StructInstance { fields })
}

fn single_value(mut child: Vec<RawNode>, path: &str) -> Result<String, LowerError> {
    if child.len() != 1 {
        return Err(LowerError::ValueArity {
            path: path.to_string(),
            found: child.len(),
        });
    }
    Ok(child.remove(0).value)
}

impl TryFrom<RawNode> for Node {
    type Error = LowerError;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        lower_node(raw, "")
    }
}
