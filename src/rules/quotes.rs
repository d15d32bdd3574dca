#![forbid(unsafe_code)]

//! Quoting conventions (D300, D301)

use crate::rules::{ExecutionContext, Rule, Violation};
use crate::types::{Code, QuoteStyle};

const TRIPLE_DOUBLE: &str = "\"\"\"";

/// Docstrings use `"""`
///
/// `'''` is accepted when the text itself contains `"""`. Concatenated
/// literals are judged by the quotes of their first part.
#[derive(Debug, Default)]
pub struct TripleDoubleQuotes;

impl Rule for TripleDoubleQuotes {
    fn name(&self) -> &'static str {
        "triple-double-quotes"
    }

    fn codes(&self) -> &'static [Code] {
        &[Code::D300]
    }

    fn execute(&self, ctx: &ExecutionContext<'_>) -> Vec<Violation> {
        let Some(docstring) = ctx.docstring() else {
            return vec![];
        };
        let quotes = match docstring.quote_style.delimiter() {
            Some(TRIPLE_DOUBLE) => return vec![],
            Some(quotes) => quotes,
            None if docstring.quotes == TRIPLE_DOUBLE => return vec![],
            None => docstring.quotes.as_str(),
        };
        if docstring.quote_style == QuoteStyle::TripleSingle && docstring.body.contains(TRIPLE_DOUBLE)
        {
            return vec![];
        }
        vec![ctx.violation(
            Code::D300,
            format!("Use \"\"\"triple double quotes\"\"\" (found {quotes}-quotes)"),
        )]
    }
}

/// Docstrings containing backslashes are raw literals
#[derive(Debug, Default)]
pub struct RawBackslashes;

impl Rule for RawBackslashes {
    fn name(&self) -> &'static str {
        "raw-backslashes"
    }

    fn codes(&self) -> &'static [Code] {
        &[Code::D301]
    }

    fn execute(&self, ctx: &ExecutionContext<'_>) -> Vec<Violation> {
        match ctx.docstring() {
            Some(docstring) if docstring.raw.contains('\\') && !docstring.is_raw() => {
                vec![ctx.violation(Code::D301, Code::D301.description())]
            }
            _ => vec![],
        }
    }
}
