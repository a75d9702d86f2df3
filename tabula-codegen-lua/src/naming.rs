//! Lua identifier rules.

use crate::syntax::escape_string;

/// Reserved words of Lua 5.4.
pub const LUA_KEYWORDS: &[&str] = &[
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if", "in",
    "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

/// Whether `name` can be written as a bare Lua name.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !LUA_KEYWORDS.contains(&name)
}

/// Key of a table constructor entry: `name` or `["name"]`.
pub fn table_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        format!("[{}]", escape_string(name))
    }
}

/// Member access expression: `base.name` or `base["name"]`.
pub fn field_access(base: &str, name: &str) -> String {
    if is_identifier(name) {
        format!("{base}.{name}")
    } else {
        format!("{base}[{}]", escape_string(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("id"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("Item2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2nd"));
        assert!(!is_identifier("max-hp"));
        assert!(!is_identifier("名字"));
    }

    #[test]
    fn test_keywords_are_not_identifiers() {
        assert!(!is_identifier("end"));
        assert!(!is_identifier("function"));
        assert!(is_identifier("End"));
    }

    #[test]
    fn test_table_key() {
        assert_eq!(table_key("id"), "id");
        assert_eq!(table_key("end"), "[\"end\"]");
        assert_eq!(table_key("max-hp"), "[\"max-hp\"]");
    }

    #[test]
    fn test_field_access() {
        assert_eq!(field_access("rec", "id"), "rec.id");
        assert_eq!(field_access("rec", "end"), "rec[\"end\"]");
        assert_eq!(field_access("tab", "ItemById"), "tab.ItemById");
    }
}
