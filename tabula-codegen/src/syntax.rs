//! Target literal syntax and the value wrapping contract.

use tabula_model::ScalarType;

/// Opening and closing tokens of a literal collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub open: &'static str,
    pub close: &'static str,
}

impl Delimiters {
    pub const BRACES: Self = Self {
        open: "{",
        close: "}",
    };

    pub const BRACKETS: Self = Self {
        open: "[",
        close: "]",
    };

    /// Comma-join `items` inside the delimiters.
    ///
    /// No separator follows the last item, and an empty sequence renders as
    /// the empty literal (`{}` / `[]`).
    pub fn wrap_items<I>(&self, items: I) -> String
    where
        I: IntoIterator<Item = String>,
    {
        let items: Vec<String> = items.into_iter().collect();
        if items.is_empty() {
            format!("{}{}", self.open, self.close)
        } else {
            format!("{} {} {}", self.open, items.join(", "), self.close)
        }
    }

    /// The empty literal, e.g. `{}`.
    pub fn empty(&self) -> String {
        format!("{}{}", self.open, self.close)
    }
}

/// Literal-data grammar of one output target.
///
/// The shared renderers walk the model and ask the syntax how to spell each
/// piece; everything target specific about *values* lives here.
pub trait LiteralSyntax: Send + Sync {
    /// Wrap a raw literal for a value site.
    ///
    /// Strings are escaped and quoted, enums are quoted by symbolic name and
    /// all other scalars are emitted verbatim. Must be a pure function.
    fn wrap(&self, ty: ScalarType, value: &str) -> String;

    /// Key prefix of a named field or table, e.g. `name = ` or `"name": `.
    fn field_key(&self, name: &str) -> String;

    /// Key prefix of a string-keyed map entry, e.g. `["Fire"] = `.
    fn map_key(&self, key: &str) -> String;

    /// Delimiters around a table's records.
    fn collection(&self) -> Delimiters;

    /// Delimiters around a repeated field.
    fn array(&self) -> Delimiters;

    /// Delimiters around a record, struct instance or map.
    fn object(&self) -> Delimiters;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_items_has_no_trailing_separator() {
        let text = Delimiters::BRACES.wrap_items(["1", "2", "3"].map(String::from));
        assert_eq!(text, "{ 1, 2, 3 }");
        assert_eq!(text.matches(", ").count(), 2);
    }

    #[test]
    fn test_wrap_items_single() {
        assert_eq!(Delimiters::BRACKETS.wrap_items(["x".to_string()]), "[ x ]");
    }

    #[test]
    fn test_wrap_items_empty() {
        assert_eq!(Delimiters::BRACES.wrap_items(Vec::new()), "{}");
        assert_eq!(Delimiters::BRACKETS.empty(), "[]");
    }
}
