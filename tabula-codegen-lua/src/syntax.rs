use tabula_codegen::{Delimiters, LiteralSyntax};
use tabula_model::ScalarType;

use crate::naming::table_key;

/// Quote `value` as a Lua string literal.
///
/// Control characters without a short escape are written as decimal
/// escapes (`\ddd`), so the literal always stays on one line.
pub fn escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => out.push_str(&format!("\\{:03}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Lua table-constructor syntax.
#[derive(Debug, Default, Clone, Copy)]
pub struct LuaSyntax;

impl LiteralSyntax for LuaSyntax {
    fn wrap(&self, ty: ScalarType, value: &str) -> String {
        match ty {
            ScalarType::String | ScalarType::Enum => escape_string(value),
            _ => value.to_string(),
        }
    }

    fn field_key(&self, name: &str) -> String {
        format!("{} = ", table_key(name))
    }

    fn map_key(&self, key: &str) -> String {
        format!("[{}] = ", escape_string(key))
    }

    fn collection(&self) -> Delimiters {
        Delimiters::BRACES
    }

    fn array(&self) -> Delimiters {
        Delimiters::BRACES
    }

    fn object(&self) -> Delimiters {
        Delimiters::BRACES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_string() {
        assert_eq!(escape_string("plain"), "\"plain\"");
        assert_eq!(escape_string("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(escape_string("a\\b"), "\"a\\\\b\"");
        assert_eq!(escape_string("l1\nl2\r\tx"), "\"l1\\nl2\\r\\tx\"");
        assert_eq!(escape_string("bell\u{7}"), "\"bell\\007\"");
        assert_eq!(escape_string("剑"), "\"剑\"");
    }

    #[test]
    fn test_wrap_by_type() {
        let lua = LuaSyntax;
        assert_eq!(lua.wrap(ScalarType::String, "Sword"), "\"Sword\"");
        assert_eq!(lua.wrap(ScalarType::Enum, "Fire"), "\"Fire\"");
        assert_eq!(lua.wrap(ScalarType::Int64, "-42"), "-42");
        assert_eq!(lua.wrap(ScalarType::Double, "0.5"), "0.5");
        assert_eq!(lua.wrap(ScalarType::Bool, "true"), "true");
    }

    #[test]
    fn test_keys() {
        let lua = LuaSyntax;
        assert_eq!(lua.field_key("id"), "id = ");
        assert_eq!(lua.field_key("end"), "[\"end\"] = ");
        assert_eq!(lua.map_key("None"), "[\"None\"] = ");
    }
}
