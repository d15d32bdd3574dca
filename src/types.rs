#![forbid(unsafe_code)]

//! Core domain types for pep257
//!
//! This module defines the fundamental value types shared by the extractor,
//! the rules and the reporters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable convention codes reported by the rule set
///
/// Variants are declared in lexical order so that the derived `Ord` matches
/// the string ordering of the codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Code {
    D100,
    D101,
    D102,
    D103,
    D104,
    D105,
    D200,
    D201,
    D202,
    D203,
    D204,
    D205,
    D206,
    D207,
    D208,
    D209,
    D210,
    D300,
    D301,
    D400,
    D401,
    D402,
}

impl Code {
    /// Every known code, in lexical order
    pub const ALL: &'static [Code] = &[
        Code::D100,
        Code::D101,
        Code::D102,
        Code::D103,
        Code::D104,
        Code::D105,
        Code::D200,
        Code::D201,
        Code::D202,
        Code::D203,
        Code::D204,
        Code::D205,
        Code::D206,
        Code::D207,
        Code::D208,
        Code::D209,
        Code::D210,
        Code::D300,
        Code::D301,
        Code::D400,
        Code::D401,
        Code::D402,
    ];

    /// Returns the code as it appears in diagnostics (e.g. `D100`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Code::D100 => "D100",
            Code::D101 => "D101",
            Code::D102 => "D102",
            Code::D103 => "D103",
            Code::D104 => "D104",
            Code::D105 => "D105",
            Code::D200 => "D200",
            Code::D201 => "D201",
            Code::D202 => "D202",
            Code::D203 => "D203",
            Code::D204 => "D204",
            Code::D205 => "D205",
            Code::D206 => "D206",
            Code::D207 => "D207",
            Code::D208 => "D208",
            Code::D209 => "D209",
            Code::D210 => "D210",
            Code::D300 => "D300",
            Code::D301 => "D301",
            Code::D400 => "D400",
            Code::D401 => "D401",
            Code::D402 => "D402",
        }
    }

    /// Short description of the convention, used by `pep257 list`
    pub fn description(&self) -> &'static str {
        match self {
            Code::D100 => "Missing docstring in public module",
            Code::D101 => "Missing docstring in public class",
            Code::D102 => "Missing docstring in public method",
            Code::D103 => "Missing docstring in public function",
            Code::D104 => "Missing docstring in public package",
            Code::D105 => "Missing docstring in magic method",
            Code::D200 => "One-line docstring should fit on one line with quotes",
            Code::D201 => "No blank lines allowed before function docstring",
            Code::D202 => "No blank lines allowed after function docstring",
            Code::D203 => "1 blank line required before class docstring",
            Code::D204 => "1 blank line required after class docstring",
            Code::D205 => "1 blank line required between summary line and description",
            Code::D206 => "Docstring should be indented with spaces, not tabs",
            Code::D207 => "Docstring is under-indented",
            Code::D208 => "Docstring is over-indented",
            Code::D209 => "Multi-line docstring closing quotes should be on a separate line",
            Code::D210 => "No whitespaces allowed surrounding docstring text",
            Code::D300 => "Use \"\"\"triple double quotes\"\"\"",
            Code::D301 => "Use r\"\"\" if any backslashes in a docstring",
            Code::D400 => "First line should end with a period",
            Code::D401 => "First line should be in imperative mood",
            Code::D402 => "First line should not be the function's \"signature\"",
        }
    }

    /// Returns every known code whose text starts with `prefix`
    ///
    /// `"D2"` selects the whole D2xx family, `"D203"` selects exactly one code.
    pub fn matching_prefix(prefix: &str) -> impl Iterator<Item = Code> + '_ {
        Code::ALL
            .iter()
            .copied()
            .filter(move |code| code.as_str().starts_with(prefix))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Code {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Code::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| format!("Unknown code: {}", s))
    }
}

impl TryFrom<String> for Code {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.as_str().to_string()
    }
}

/// What kind of definition owns a docstring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerKind {
    Module,
    Class,
    Function,
    Method,
}

impl OwnerKind {
    /// True for functions and methods
    pub fn is_callable(&self) -> bool {
        matches!(self, OwnerKind::Function | OwnerKind::Method)
    }
}

impl fmt::Display for OwnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OwnerKind::Module => "module",
            OwnerKind::Class => "class",
            OwnerKind::Function => "function",
            OwnerKind::Method => "method",
        };
        f.write_str(name)
    }
}

/// Delimiter style of a docstring literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteStyle {
    /// `"""..."""`
    TripleDouble,
    /// `'''...'''`
    TripleSingle,
    /// `"..."`
    SingleLineDouble,
    /// `'...'`
    SingleLineSingle,
    /// Implicitly concatenated literals (`"a" "b"`)
    Other,
}

impl QuoteStyle {
    /// Classifies the delimiter at the start of `literal` (string prefix already removed)
    pub fn detect(literal: &str) -> Option<Self> {
        if literal.starts_with("\"\"\"") {
            Some(QuoteStyle::TripleDouble)
        } else if literal.starts_with("'''") {
            Some(QuoteStyle::TripleSingle)
        } else if literal.starts_with('"') {
            Some(QuoteStyle::SingleLineDouble)
        } else if literal.starts_with('\'') {
            Some(QuoteStyle::SingleLineSingle)
        } else {
            None
        }
    }

    /// The delimiter text, or `None` for concatenated literals
    pub fn delimiter(&self) -> Option<&'static str> {
        match self {
            QuoteStyle::TripleDouble => Some("\"\"\""),
            QuoteStyle::TripleSingle => Some("'''"),
            QuoteStyle::SingleLineDouble => Some("\""),
            QuoteStyle::SingleLineSingle => Some("'"),
            QuoteStyle::Other => None,
        }
    }
}
