use tabula_codegen::{PrinterRegistry, RegistryError};
use tabula_codegen_json::JsonPrinter;
use tabula_codegen_lua::LuaPrinter;

/// Registry holding every built-in target.
pub fn builtin() -> Result<PrinterRegistry, RegistryError> {
    PrinterRegistry::new().with(LuaPrinter)?.with(JsonPrinter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_targets() {
        let registry = builtin().unwrap();
        assert_eq!(registry.targets().collect::<Vec<_>>(), ["lua", "json"]);
        assert_eq!(registry.get("json").unwrap().tag(), ".json");
    }
}
