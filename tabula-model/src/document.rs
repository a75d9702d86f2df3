//! JSON model documents.

use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{
    Error, FileDescriptor, OutputTags, RawNode, Record, Result, Table, raw::lower_node,
};

/// Descriptor model plus value model for one export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    pub file: FileDescriptor,
    pub tables: Vec<Table>,
}

#[derive(Debug, Deserialize)]
struct ModelDocument {
    #[serde(default)]
    descriptors: FileDescriptor,
    #[serde(default)]
    tables: Vec<TableDocument>,
}

#[derive(Debug, Deserialize)]
struct TableDocument {
    name: String,
    #[serde(default)]
    tags: OutputTags,
    #[serde(default)]
    records: Vec<Vec<RawNode>>,
}

impl FromStr for Model {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "model.json")
    }
}

impl Model {
    pub fn new(file: FileDescriptor, tables: impl IntoIterator<Item = Table>) -> Self {
        Self {
            file,
            tables: tables.into_iter().collect(),
        }
    }

    /// Load a model document from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a model document with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let doc: ModelDocument =
            serde_json::from_str(content).map_err(|e| Error::parse(e, content, filename))?;

        let tables = doc
            .tables
            .into_iter()
            .map(lower_table)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            file: doc.descriptors,
            tables,
        })
    }
}

fn lower_table(doc: TableDocument) -> Result<Table> {
    let mut records = Vec::with_capacity(doc.records.len());
    for (index, row) in doc.records.into_iter().enumerate() {
        let prefix = format!("{}[{index}]", doc.name);
        let nodes = row
            .into_iter()
            .map(|raw| lower_node(raw, &prefix))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|source| {
                Box::new(Error::Lower {
                    table: doc.name.clone(),
                    source,
                })
            })?;
        records.push(Record { nodes });
    }

    Ok(Table {
        name: doc.name,
        tags: doc.tags,
        records,
    })
}
