//! Value and descriptor model for the tabula table exporter.
//!
//! The model is produced by a loader and is read-only while it is rendered:
//!
//! ```text
//! model.json → tabula-model (lowering) → Model → tabula-codegen printers
//! ```
//!
//! - [`Node`] / [`NodeValue`] - typed value tree of a record
//! - [`Descriptor`] / [`FileDescriptor`] - enum and struct metadata
//! - [`OutputTags`] / [`Tagged`] - per-target filtering
//! - [`RawNode`] - the loader's generic node shape, lowered with [`Node::try_from`]

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod descriptor;
mod document;
mod error;
mod node;
pub mod raw;
mod types;

pub use descriptor::{
    Descriptor, DescriptorKind, DescriptorUsage, FieldDescriptor, FileDescriptor, OutputTags,
    Tagged,
};
pub use document::Model;
pub use error::{Error, Result};
pub use node::{Leaf, Node, NodeValue, Record, StructInstance, Table};
pub use raw::{LowerError, RawNode};
pub use types::{FieldType, ScalarType, StructTag};
