use std::fmt;

use thiserror::Error;

use crate::printer::Phase;

/// A structural failure that prevents a renderer from producing valid output.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("record {record} of table '{table}' declares field '{field}' more than once")]
    DuplicateField {
        table: String,
        record: usize,
        field: String,
    },

    #[error("field '{field}' of '{owner}' links unknown descriptor '{descriptor}'")]
    UnknownDescriptor {
        owner: String,
        field: String,
        descriptor: String,
    },

    #[error("descriptor '{descriptor}' declares unknown index key '{key}'")]
    UnknownIndexKey { descriptor: String, key: String },

    #[error("'{name}' ({origin}) clashes with another name in the output")]
    NameClash { name: String, origin: String },

    #[error("failed to format output")]
    Format(#[from] fmt::Error),
}

/// A printer run that was aborted. No output is produced.
#[derive(Debug, Error)]
#[error("{target} printer aborted while emitting {phase}")]
pub struct PrintError {
    pub target: &'static str,
    pub phase: Phase,
    #[source]
    pub source: RenderError,
}
