//! JSON printer for the tabula table exporter.
//!
//! A data-only target: one object keyed by table name, plus an `Enum`
//! object mapping every enum member to its ordinal. Index maps are left
//! to the consumer.

mod printer;
mod syntax;

pub use printer::JsonPrinter;
pub use syntax::{JsonSyntax, quote};
