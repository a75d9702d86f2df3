//! Lua printer for the tabula table exporter.
//!
//! The generated file is a Lua chunk returning a single table:
//!
//! ```lua
//! -- Generated by tabula
//! -- Version: 0.1.0
//!
//! local tab = {
//! 	Item = {
//! 		{ id = 1, name = "Sword" }
//! 	}
//! }
//!
//! -- Item by id
//! tab.ItemById = {}
//! for _, rec in ipairs(tab.Item) do
//! 	tab.ItemById[rec.id] = rec
//! end
//!
//! tab.Enum = {}
//!
//! return tab
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use tabula_codegen::{Globals, Printer};
//! use tabula_codegen_lua::LuaPrinter;
//!
//! let output = LuaPrinter.print(&globals)?;
//! std::fs::write("config.lua", output.content)?;
//! ```

mod indexes;
mod naming;
mod printer;
mod syntax;

pub use indexes::IndexLoop;
pub use naming::{LUA_KEYWORDS, field_access, is_identifier, table_key};
pub use printer::LuaPrinter;
pub use syntax::{LuaSyntax, escape_string};
