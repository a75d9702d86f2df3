use std::fmt;

use serde::{Deserialize, Serialize};

/// Type of a leaf value.
///
/// Determines how a value is wrapped when it is emitted: strings are escaped
/// and quoted, enums are quoted by their symbolic name and everything else is
/// passed through verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    String,
    Int32,
    Int64,
    UInt32,
    UInt64,
    Float,
    Double,
    Bool,
    Enum,
}

impl ScalarType {
    /// Lower-case name as it appears in model documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
            Self::Float => "float",
            Self::Double => "double",
            Self::Bool => "bool",
            Self::Enum => "enum",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared type of a field: a scalar or a nested struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldType {
    Scalar(ScalarType),
    Struct(StructTag),
}

/// Marker deserialized from the literal `"struct"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructTag {
    Struct,
}

impl FieldType {
    pub const STRUCT: Self = Self::Struct(StructTag::Struct);

    /// The scalar type, or `None` for struct fields.
    pub fn scalar(&self) -> Option<ScalarType> {
        match self {
            Self::Scalar(ty) => Some(*ty),
            Self::Struct(_) => None,
        }
    }

    pub fn is_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }
}

impl From<ScalarType> for FieldType {
    fn from(ty: ScalarType) -> Self {
        Self::Scalar(ty)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(ty) => ty.fmt(f),
            Self::Struct(_) => f.write_str("struct"),
        }
    }
}
