//! Render operation: run every configured output and persist the results.

use eyre::{Context, Result};
use tabula_codegen::{Globals, PrinterRegistry};
use tabula_core::{File, WriteResult};

use crate::config::Project;

/// Options for the render operation.
pub struct RenderOptions<'a> {
    /// Restrict rendering to these targets. Empty means every output.
    pub only: &'a [String],
    /// Render without writing files.
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Preview,
    Written,
    Unchanged,
}

#[derive(Debug)]
pub struct RenderedFile {
    pub target: &'static str,
    pub file: File,
    pub status: FileStatus,
}

/// Render every selected output of `project`.
///
/// Each output runs on its own scoped thread against the shared `globals`.
/// Files are only written once every output rendered successfully, so a
/// failing target leaves all outputs untouched.
pub fn render(
    project: &Project,
    registry: &PrinterRegistry,
    globals: &Globals,
    opts: RenderOptions<'_>,
) -> Result<Vec<RenderedFile>> {
    let jobs = project
        .outputs()
        .filter(|(target, _)| opts.only.is_empty() || opts.only.iter().any(|t| t == target))
        .map(|(target, path)| registry.get(target).map(|printer| (printer, path)))
        .collect::<Result<Vec<_>, _>>()?;

    let rendered: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = jobs
            .iter()
            .map(|(printer, path)| {
                s.spawn(move || {
                    printer
                        .print(globals)
                        .map(|output| (output.target, File::new(path.clone(), output.content)))
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    });

    let files = rendered
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .wrap_err("rendering aborted, no output was written")?;

    files
        .into_iter()
        .map(|(target, file)| -> Result<RenderedFile> {
            let status = if opts.dry_run {
                FileStatus::Preview
            } else {
                match file
                    .write()
                    .wrap_err_with(|| format!("failed to write {}", file.path().display()))?
                {
                    WriteResult::Written => FileStatus::Written,
                    WriteResult::Unchanged => FileStatus::Unchanged,
                }
            };
            tracing::info!(output = target, path = %file.path().display(), ?status, "rendered");
            Ok(RenderedFile {
                target,
                file,
                status,
            })
        })
        .collect()
}
