//! Registry of output targets.
//!
//! The registry is an explicit object built once at startup and passed to
//! whoever dispatches printer runs:
//!
//! ```ignore
//! let registry = PrinterRegistry::new()
//!     .with(LuaPrinter)?
//!     .with(JsonPrinter)?;
//!
//! let printer = registry.get("lua")?;
//! let output = printer.print(&globals)?;
//! ```

use std::fmt;

use indexmap::IndexMap;
use thiserror::Error;

use crate::printer::Printer;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("a printer for target '{0}' is already registered")]
    Duplicate(String),

    #[error("unknown target '{target}' (available: {available})")]
    Unknown { target: String, available: String },
}

/// Printers keyed by target identifier, in registration order.
#[derive(Default)]
pub struct PrinterRegistry {
    printers: IndexMap<&'static str, Box<dyn Printer>>,
}

impl PrinterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a printer under its target identifier.
    pub fn register(&mut self, printer: impl Printer + 'static) -> Result<(), RegistryError> {
        let target = printer.target();
        if self.printers.contains_key(target) {
            return Err(RegistryError::Duplicate(target.to_string()));
        }
        self.printers.insert(target, Box::new(printer));
        Ok(())
    }

    /// Register a printer (builder style).
    pub fn with(mut self, printer: impl Printer + 'static) -> Result<Self, RegistryError> {
        self.register(printer)?;
        Ok(self)
    }

    /// Look up the printer for a target.
    pub fn get(&self, target: &str) -> Result<&dyn Printer, RegistryError> {
        self.printers
            .get(target)
            .map(Box::as_ref)
            .ok_or_else(|| RegistryError::Unknown {
                target: target.to_string(),
                available: self.targets().collect::<Vec<_>>().join(", "),
            })
    }

    /// Registered target identifiers, in registration order.
    pub fn targets(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.printers.keys().copied()
    }

    pub fn printers(&self) -> impl Iterator<Item = &dyn Printer> {
        self.printers.values().map(Box::as_ref)
    }

    pub fn len(&self) -> usize {
        self.printers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.printers.is_empty()
    }
}

impl fmt::Debug for PrinterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrinterRegistry")
            .field("targets", &self.targets().collect::<Vec<_>>())
            .finish()
    }
}
