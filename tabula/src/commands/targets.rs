use clap::Args;
use eyre::Result;

use crate::registry;

#[derive(Args)]
pub struct TargetsCommand {}

impl TargetsCommand {
    pub fn run(&self) -> Result<()> {
        let registry = registry::builtin()?;

        println!("Targets:");
        for printer in registry.printers() {
            println!(
                "  {:<8} tag {:<8} .{}",
                printer.target(),
                printer.tag(),
                printer.file_extension()
            );
        }
        Ok(())
    }
}
