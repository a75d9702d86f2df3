//! Core operations.
//!
//! Business logic for tabula commands, separated from CLI argument parsing
//! and terminal output.

pub mod render;

pub use render::{FileStatus, RenderOptions, render};
