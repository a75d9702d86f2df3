//! `tabula.toml` project configuration.
//!
//! ```toml
//! [project]
//! model = "model.json"
//!
//! [[output]]
//! target = "lua"
//! path = "out/config.lua"
//! ```
//!
//! Paths are relative to the directory holding the configuration file.

use std::{
    collections::HashMap,
    ops::Range,
    path::{Path, PathBuf},
};

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use thiserror::Error;
use toml::Spanned;

/// Result type for configuration loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a tabula.toml or point --config at one"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse tabula.toml")]
    #[diagnostic(code(tabula::config::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown target '{target}'")]
    #[diagnostic(
        code(tabula::config::unknown_target),
        help("available targets: {available}")
    )]
    UnknownTarget {
        #[source_code]
        src: NamedSource<String>,
        #[label("no printer is registered for this target")]
        span: SourceSpan,
        target: String,
        available: String,
    },

    #[error("output path '{path}' is used more than once")]
    #[diagnostic(code(tabula::config::duplicate_output))]
    DuplicateOutput {
        #[source_code]
        src: NamedSource<String>,
        #[label("first used here")]
        first: SourceSpan,
        #[label("used again here")]
        second: SourceSpan,
        path: String,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub project: ProjectSection,
    #[serde(default, rename = "output")]
    pub outputs: Vec<OutputSection>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSection {
    /// Model document to render.
    pub model: PathBuf,
}

/// One `[[output]]` entry: a target and the file it renders to.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    pub target: Spanned<String>,
    pub path: Spanned<PathBuf>,
}

impl Config {
    /// Parse and validate against the registered target identifiers.
    pub fn parse(content: &str, filename: &str, targets: &[&str]) -> Result<Self> {
        let src = || NamedSource::new(filename, content.to_string());

        let config: Self = toml::from_str(content).map_err(|source| {
            Box::new(Error::Parse {
                src: src(),
                span: source.span().map(SourceSpan::from),
                source,
            })
        })?;

        let mut seen: HashMap<&Path, Range<usize>> = HashMap::new();
        for output in &config.outputs {
            let target = output.target.get_ref();
            if !targets.contains(&target.as_str()) {
                return Err(Box::new(Error::UnknownTarget {
                    src: src(),
                    span: output.target.span().into(),
                    target: target.clone(),
                    available: targets.join(", "),
                }));
            }

            let path = output.path.get_ref();
            if let Some(first) = seen.insert(path, output.path.span()) {
                return Err(Box::new(Error::DuplicateOutput {
                    src: src(),
                    first: first.into(),
                    second: output.path.span().into(),
                    path: path.display().to_string(),
                }));
            }
        }

        Ok(config)
    }
}

/// A configuration loaded from disk.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    config: Config,
}

impl Project {
    pub fn open(path: impl AsRef<Path>, targets: &[&str]) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let config = Config::parse(&content, &path.display().to_string(), targets)?;

        Ok(Self {
            root: path.parent().map(Path::to_path_buf).unwrap_or_default(),
            config,
        })
    }

    pub fn model_path(&self) -> PathBuf {
        self.root.join(&self.config.project.model)
    }

    /// Configured outputs as `(target, resolved path)`, in file order.
    pub fn outputs(&self) -> impl Iterator<Item = (&str, PathBuf)> {
        self.config
            .outputs
            .iter()
            .map(|o| (o.target.get_ref().as_str(), self.root.join(o.path.get_ref())))
    }
}
