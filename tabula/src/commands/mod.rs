mod completions;
mod render;
mod targets;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use miette::Diagnostic;
use render::RenderCommand;
use targets::TargetsCommand;

/// Extension trait for exiting on file errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for std::result::Result<T, Box<E>>
where
    E: Diagnostic + Send + Sync + 'static,
{
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "tabula")]
#[command(version)]
#[command(about = "Render exported table data as Lua and JSON")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Render(cmd) => cmd.run(),
            Commands::Targets(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render every output listed in tabula.toml
    Render(RenderCommand),

    /// List the available output targets
    Targets(TargetsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
