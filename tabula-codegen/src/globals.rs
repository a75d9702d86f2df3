use tabula_model::{FileDescriptor, Model, Table};

/// Read-only input of one printer run.
///
/// Shared by reference between runs, so several targets can render the same
/// model concurrently.
#[derive(Debug, Clone)]
pub struct Globals {
    /// Generator version stamped into file headers.
    pub version: String,
    pub model: Model,
}

impl Globals {
    pub fn new(version: impl Into<String>, model: Model) -> Self {
        Self {
            version: version.into(),
            model,
        }
    }

    pub fn file(&self) -> &FileDescriptor {
        &self.model.file
    }

    pub fn tables(&self) -> &[Table] {
        &self.model.tables
    }
}
