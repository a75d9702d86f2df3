//! Target-independent rendering engine for the tabula table exporter.
//!
//! This crate turns a loaded [`tabula_model::Model`] into the text of one
//! output file per target. Targets share the walking algorithms and differ
//! only in their literal syntax and file layout.
//!
//! # Module Organization
//!
//! - [`builder`] - Output stream (CodeBuilder, CodeFragment, Indent)
//! - [`syntax`] - Value wrapping contract implemented per target
//! - [`table`] / [`enums`] - Shared table and enum renderers
//! - [`index`] - Lookup-map planning for combine structs
//! - [`printer`] - Printer trait and phase sequence
//! - [`registry`] - Target registry
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod enums;
mod error;
mod globals;
pub mod index;
pub mod printer;
pub mod registry;
pub mod syntax;
pub mod table;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use enums::EnumRenderer;
pub use error::{PrintError, RenderError};
pub use globals::Globals;
pub use index::{IndexSpec, plan_indexes};
pub use printer::{Phase, PrintOutput, Printer, run};
pub use registry::{PrinterRegistry, RegistryError};
pub use syntax::{Delimiters, LiteralSyntax};
pub use table::TableRenderer;
