//! Printer trait and the per-run phase sequence.

use std::{collections::HashSet, fmt};

use tabula_model::{Descriptor, Table, Tagged};

use crate::{
    Globals,
    builder::{CodeBuilder, Indent},
    error::{PrintError, RenderError},
    index::{ENUM_NAMESPACE, IndexSpec, plan_indexes},
};

/// Phases of a printer run, in emission order.
///
/// Index code comes after the tables because it reads the emitted table data
/// by name when the output is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Header,
    Tables,
    Indexes,
    Enums,
    Footer,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::Header,
        Phase::Tables,
        Phase::Indexes,
        Phase::Enums,
        Phase::Footer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Header => "header",
            Phase::Tables => "tables",
            Phase::Indexes => "indexes",
            Phase::Enums => "enums",
            Phase::Footer => "footer",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for per-target printers.
///
/// Implement this trait to add an output target. The shared [`run`] drives
/// the phases, applies the output-tag filter and plans indexes; a printer
/// only decides how each phase is spelled.
pub trait Printer: Send + Sync {
    /// Target identifier used for registration (e.g., "lua", "json")
    fn target(&self) -> &'static str;

    /// Output tag tables must match to be included (e.g., ".lua")
    fn tag(&self) -> &'static str;

    /// File extension of the output, without dot
    fn file_extension(&self) -> &'static str;

    fn indent(&self) -> Indent;

    fn emit_header(&self, out: &mut CodeBuilder, globals: &Globals) -> Result<(), RenderError>;

    /// Emit the tables that passed the tag filter, in model order.
    fn emit_tables(&self, out: &mut CodeBuilder, tables: &[&Table]) -> Result<(), RenderError>;

    /// Whether this target emits load-time index code.
    ///
    /// Indexes are only planned, and their declarations only checked, for
    /// targets that return `true`. Override together with [`Printer::emit_indexes`].
    fn builds_indexes(&self) -> bool {
        false
    }

    /// Emit load-time index construction.
    ///
    /// Default implementation emits nothing (data-only targets).
    #[allow(unused_variables)]
    fn emit_indexes(
        &self,
        out: &mut CodeBuilder,
        indexes: &[IndexSpec<'_>],
    ) -> Result<(), RenderError> {
        Ok(())
    }

    /// Emit the enum lookup block. Enums are never filtered by tag.
    fn emit_enums(&self, out: &mut CodeBuilder, enums: &[&Descriptor]) -> Result<(), RenderError>;

    #[allow(unused_variables)]
    fn emit_footer(&self, out: &mut CodeBuilder, globals: &Globals) -> Result<(), RenderError> {
        Ok(())
    }

    /// Run all phases for this printer.
    fn print(&self, globals: &Globals) -> Result<PrintOutput, PrintError> {
        run(self, globals)
    }
}

/// Fully assembled output of a successful run.
#[derive(Debug, Clone)]
pub struct PrintOutput {
    pub target: &'static str,
    pub extension: &'static str,
    pub content: String,
}

/// Run a printer over `globals`.
///
/// Phases run in [`Phase::ALL`] order. The first failing phase aborts the run
/// and the partially built buffer is discarded.
pub fn run<P: Printer + ?Sized>(printer: &P, globals: &Globals) -> Result<PrintOutput, PrintError> {
    let mut out = CodeBuilder::new(printer.indent());
    let tables = select_tables(printer, globals);

    for phase in Phase::ALL {
        tracing::debug!(printer = printer.target(), %phase, "emitting");

        let result = match phase {
            Phase::Header => printer.emit_header(&mut out, globals),
            Phase::Tables => {
                check_table_names(&tables).and_then(|()| printer.emit_tables(&mut out, &tables))
            }
            Phase::Indexes if printer.builds_indexes() => {
                plan_indexes(globals.file(), printer.tag(), &tables)
                    .and_then(|specs| printer.emit_indexes(&mut out, &specs))
            }
            Phase::Indexes => Ok(()),
            Phase::Enums => {
                let enums: Vec<&Descriptor> = globals.file().enums().collect();
                printer.emit_enums(&mut out, &enums)
            }
            Phase::Footer => printer.emit_footer(&mut out, globals),
        };

        if let Err(source) = result {
            tracing::error!(printer = printer.target(), %phase, error = %source, "printer aborted");
            return Err(PrintError {
                target: printer.target(),
                phase,
                source,
            });
        }
    }

    Ok(PrintOutput {
        target: printer.target(),
        extension: printer.file_extension(),
        content: out.build(),
    })
}

/// Table names share one namespace with each other and with the enum block.
fn check_table_names(tables: &[&Table]) -> Result<(), RenderError> {
    let mut seen = HashSet::from([ENUM_NAMESPACE]);
    for table in tables {
        if !seen.insert(table.name.as_str()) {
            return Err(RenderError::NameClash {
                name: table.name.clone(),
                origin: "table".to_string(),
            });
        }
    }
    Ok(())
}

fn select_tables<'g, P: Printer + ?Sized>(printer: &P, globals: &'g Globals) -> Vec<&'g Table> {
    globals
        .tables()
        .iter()
        .filter(|table| {
            let keep = table.match_tag(printer.tag());
            if !keep {
                tracing::info!(
                    printer = printer.target(),
                    table = %table.name,
                    "table ignored by output tag"
                );
            }
            keep
        })
        .collect()
}
