#![forbid(unsafe_code)]

//! Extracted definitions and their docstrings

use crate::types::{OwnerKind, QuoteStyle};

/// A docstring literal as it appears in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Docstring {
    /// The literal exactly as written, prefix and quotes included
    pub raw: String,

    /// String prefix letters (`r`, `u`, `ur`, ...), possibly empty
    pub prefix: String,

    /// Delimiter style of the literal
    pub quote_style: QuoteStyle,

    /// Opening delimiter actually used; for concatenated literals, that of the first part
    pub quotes: String,

    /// Text between the delimiters (of the first part for concatenated literals)
    pub body: String,

    /// Text preceding the literal on its first line
    pub indent: String,

    /// Line of the opening quotes (1-indexed)
    pub start_line: u32,

    /// Line of the closing quotes (1-indexed)
    pub end_line: u32,

    /// Consecutive blank lines between the definition header and the docstring
    pub blank_lines_before: usize,

    /// Consecutive blank lines between the docstring and the next statement
    ///
    /// `None` when nothing but blank lines follows the docstring inside the
    /// definition.
    pub blank_lines_after: Option<usize>,
}

impl Docstring {
    /// True for prefixes that make the literal raw (`r`, `R`, `ur`, `Rb`, ...)
    pub fn is_raw(&self) -> bool {
        self.prefix.chars().any(|c| c == 'r' || c == 'R')
    }

    /// The body with surrounding whitespace removed
    pub fn trimmed_body(&self) -> &str {
        self.body.trim()
    }

    /// The first line of the trimmed body
    pub fn summary_line(&self) -> &str {
        self.trimmed_body().split('\n').next().unwrap_or("").trim_end()
    }
}

/// One docstring-bearing definition
///
/// Created fresh per analysis pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocstringNode {
    /// Kind of the owning definition
    pub owner_kind: OwnerKind,

    /// Definition name; empty for the module
    pub name: String,

    /// Whether the convention requires this definition to be documented
    pub is_public: bool,

    /// Module nodes only: the unit is a package's `__init__.py`
    pub is_package: bool,

    /// Line of the definition keyword (1-indexed); the module starts at 1
    pub start_line: u32,

    /// Column of the definition keyword (1-indexed)
    pub start_column: u32,

    /// The docstring, if the body starts with one
    pub docstring: Option<Docstring>,
}

impl DocstringNode {
    /// Raw docstring text, or `None` when the definition is undocumented
    pub fn text(&self) -> Option<&str> {
        self.docstring.as_ref().map(|d| d.raw.as_str())
    }

    /// Dunder names such as `__init__` or `__eq__`
    pub fn is_magic(&self) -> bool {
        self.name.len() > 4 && self.name.starts_with("__") && self.name.ends_with("__")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docstring(prefix: &str, body: &str) -> Docstring {
        Docstring {
            raw: format!("{prefix}\"\"\"{body}\"\"\""),
            prefix: prefix.to_string(),
            quote_style: QuoteStyle::TripleDouble,
            quotes: "\"\"\"".to_string(),
            body: body.to_string(),
            indent: "    ".to_string(),
            start_line: 2,
            end_line: 2,
            blank_lines_before: 0,
            blank_lines_after: None,
        }
    }

    #[test]
    fn test_summary_line() {
        let doc = docstring("", "\n    Summary here.\n\n    Details.\n    ");
        assert_eq!(doc.summary_line(), "Summary here.");
        assert_eq!(docstring("", "   ").summary_line(), "");
    }

    #[test]
    fn test_is_raw() {
        assert!(docstring("r", "x").is_raw());
        assert!(docstring("Ur", "x").is_raw());
        assert!(!docstring("u", "x").is_raw());
        assert!(!docstring("", "x").is_raw());
    }

    #[test]
    fn test_is_magic() {
        let mut node = DocstringNode {
            owner_kind: OwnerKind::Method,
            name: "__eq__".to_string(),
            is_public: true,
            is_package: false,
            start_line: 1,
            start_column: 5,
            docstring: None,
        };
        assert!(node.is_magic());
        assert!(node.text().is_none());

        node.name = "__".to_string();
        assert!(!node.is_magic());

        node.name = "_private".to_string();
        assert!(!node.is_magic());
    }
}
