use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::LowerError;

/// Result type for model loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check the `model` path in tabula.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model document")]
    #[diagnostic(code(tabula::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed value tree in table '{table}'")]
    #[diagnostic(
        code(tabula::malformed_tree),
        help("the exporter expects one value node per non-repeated field")
    )]
    Lower {
        table: String,
        #[source]
        source: LowerError,
    },
}

impl Error {
    /// Create a parse error from a serde_json error with source context
    pub fn parse(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = offset_of(src, source.line(), source.column()).map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

/// Convert a 1-based line/column pair into a byte offset.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of() {
        let src = "{\n  \"a\": x\n}";
        assert_eq!(offset_of(src, 1, 1), Some(0));
        assert_eq!(offset_of(src, 2, 8), Some(9));
        assert_eq!(offset_of(src, 0, 0), None);
    }

    #[test]
    fn test_parse_error_has_span() {
        let src = "{ \"tables\": [ }";
        let err = serde_json::from_str::<serde_json::Value>(src).unwrap_err();
        match *Error::parse(err, src, "model.json") {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
