//! Core utilities for the tabula table exporter.
//!
//! This crate provides small helpers shared by the code generators and the
//! command line tool.

mod file;
mod utils;

// File operations
pub use file::{File, WriteResult};
// String utilities
pub use utils::to_pascal_case;
