use std::path::{Path, PathBuf};

use eyre::Result;

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already held the same content and was left untouched
    Unchanged,
}

/// A rendered output file waiting to be persisted
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file, creating parent directories as needed.
    ///
    /// Files whose content is already up to date are not rewritten, so
    /// modification times only change when the output does.
    pub fn write(&self) -> Result<WriteResult> {
        if std::fs::read_to_string(&self.path).is_ok_and(|existing| existing == self.content) {
            return Ok(WriteResult::Unchanged);
        }
        write_file(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}
