use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use tabula_codegen::Globals;
use tabula_model::Model;

use super::UnwrapOrExit;
use crate::{
    config::Project,
    ops::{self, FileStatus, RenderOptions},
    registry,
};

#[derive(Args)]
pub struct RenderCommand {
    /// Path to tabula.toml (defaults to ./tabula.toml)
    #[arg(short, long, default_value = "tabula.toml")]
    pub config: PathBuf,

    /// Only render outputs for this target (repeatable)
    #[arg(short = 't', long = "target")]
    pub targets: Vec<String>,

    /// Print rendered output without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl RenderCommand {
    pub fn run(&self) -> Result<()> {
        let registry = registry::builtin()?;
        for target in &self.targets {
            registry.get(target)?;
        }

        let known: Vec<&str> = registry.targets().collect();
        let project = Project::open(&self.config, &known).unwrap_or_exit();
        let model = Model::from_file(project.model_path()).unwrap_or_exit();
        let globals = Globals::new(env!("CARGO_PKG_VERSION"), model);

        let opts = RenderOptions {
            only: &self.targets,
            dry_run: self.dry_run,
        };
        let files = ops::render(&project, &registry, &globals, opts)
            .wrap_err_with(|| format!("failed to render {}", self.config.display()))?;

        if files.is_empty() {
            println!("No outputs selected");
            return Ok(());
        }

        for rendered in &files {
            let path = rendered.file.path().display();
            match rendered.status {
                FileStatus::Preview => {
                    println!("── {} ({}) ──", path, rendered.target);
                    println!("{}", rendered.file.content());
                }
                FileStatus::Written => println!("  wrote     {path}"),
                FileStatus::Unchanged => println!("  unchanged {path}"),
            }
        }

        if self.dry_run {
            println!("── Summary ──");
            println!("{} files would be written", files.len());
        }
        Ok(())
    }
}
