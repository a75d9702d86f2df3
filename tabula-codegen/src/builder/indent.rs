//! Indentation configuration for generated output.

/// Indentation style for generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// Tab indentation (Lua).
    pub const LUA: Self = Self::Tab;

    /// 2-space indentation (JSON).
    pub const JSON: Self = Self::Spaces(2);

    /// Text of one indent level.
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(usize::from(*width)),
            Self::Tab => "\t".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_unit() {
        assert_eq!(Indent::Spaces(2).unit(), "  ");
        assert_eq!(Indent::Spaces(3).unit(), "   ");
        assert_eq!(Indent::Spaces(4).unit(), "    ");
        assert_eq!(Indent::Spaces(0).unit(), "");
        assert_eq!(Indent::Tab.unit(), "\t");
    }

    #[test]
    fn test_indent_constants() {
        assert_eq!(Indent::LUA, Indent::Tab);
        assert_eq!(Indent::JSON, Indent::Spaces(2));
    }
}
