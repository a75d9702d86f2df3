use serde_json::Value;
use tabula_codegen::{Delimiters, LiteralSyntax};
use tabula_model::ScalarType;

/// Quote `value` as a JSON string.
pub fn quote(value: &str) -> String {
    Value::String(value.to_owned()).to_string()
}

/// JSON literal syntax. Tables and repeated fields are arrays.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSyntax;

impl LiteralSyntax for JsonSyntax {
    fn wrap(&self, ty: ScalarType, value: &str) -> String {
        match ty {
            ScalarType::String | ScalarType::Enum => quote(value),
            _ => value.to_string(),
        }
    }

    fn field_key(&self, name: &str) -> String {
        format!("{}: ", quote(name))
    }

    fn map_key(&self, key: &str) -> String {
        format!("{}: ", quote(key))
    }

    fn collection(&self) -> Delimiters {
        Delimiters::BRACKETS
    }

    fn array(&self) -> Delimiters {
        Delimiters::BRACKETS
    }

    fn object(&self) -> Delimiters {
        Delimiters::BRACES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("a\"b"), r#""a\"b""#);
        assert_eq!(quote("line1\nline2"), r#""line1\nline2""#);
        assert_eq!(quote("C:\\path"), r#""C:\\path""#);
    }

    #[test]
    fn test_wrap_by_type() {
        assert_eq!(JsonSyntax.wrap(ScalarType::Enum, "Fire"), "\"Fire\"");
        assert_eq!(JsonSyntax.wrap(ScalarType::UInt64, "7"), "7");
        assert_eq!(JsonSyntax.wrap(ScalarType::Bool, "false"), "false");
    }

    #[test]
    fn test_keys() {
        assert_eq!(JsonSyntax.field_key("id"), "\"id\": ");
        assert_eq!(JsonSyntax.map_key("None"), "\"None\": ");
    }
}
