#![forbid(unsafe_code)]

//! Docstring shape: one-liners (D200), indentation (D206-D208), closing
//! quotes (D209) and surrounding whitespace (D210)

use crate::rules::{ExecutionContext, Rule, Violation};
use crate::types::Code;

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn leading_whitespace(line: &str) -> &str {
    let end = line.len() - line.trim_start_matches([' ', '\t']).len();
    &line[..end]
}

/// A docstring whose text fits on one line must be written on one line
#[derive(Debug, Default)]
pub struct OneLiner;

impl Rule for OneLiner {
    fn name(&self) -> &'static str {
        "one-liner"
    }

    fn codes(&self) -> &'static [Code] {
        &[Code::D200]
    }

    fn execute(&self, ctx: &ExecutionContext<'_>) -> Vec<Violation> {
        let Some(docstring) = ctx.docstring() else {
            return vec![];
        };
        let lines: Vec<&str> = docstring.body.split('\n').collect();
        if lines.len() < 2 {
            return vec![];
        }
        let non_blank = lines.iter().filter(|line| !is_blank(line)).count();
        if non_blank != 1 {
            return vec![];
        }
        vec![ctx.violation(
            Code::D200,
            format!(
                "One-line docstring should fit on one line with quotes (found {})",
                lines.len()
            ),
        )]
    }
}

/// Continuation lines are indented like the opening quotes, with spaces only
///
/// The first line is exempt. Blank lines are ignored; the closing-quote line
/// counts.
#[derive(Debug, Default)]
pub struct Indentation;

impl Rule for Indentation {
    fn name(&self) -> &'static str {
        "indentation"
    }

    fn codes(&self) -> &'static [Code] {
        &[Code::D206, Code::D207, Code::D208]
    }

    fn execute(&self, ctx: &ExecutionContext<'_>) -> Vec<Violation> {
        let Some(docstring) = ctx.docstring() else {
            return vec![];
        };
        let indents: Vec<&str> = docstring
            .raw
            .split('\n')
            .skip(1)
            .filter(|line| !is_blank(line))
            .map(leading_whitespace)
            .collect();
        let Some(last) = indents.last() else {
            return vec![];
        };

        let indent = docstring.indent.as_str();
        let width = indent.chars().count();
        let widths: Vec<usize> = indents.iter().map(|i| i.chars().count()).collect();

        let mut violations = Vec::new();

        let whitespace = indents.iter().chain(std::iter::once(&indent));
        let (mut spaces, mut tabs) = (false, false);
        for chunk in whitespace {
            spaces |= chunk.contains(' ');
            tabs |= chunk.contains('\t');
        }
        if spaces && tabs {
            violations.push(ctx.violation(Code::D206, Code::D206.description()));
        }

        let body_over = widths.len() > 1
            && widths[..widths.len() - 1]
                .iter()
                .min()
                .is_some_and(|min| *min > width);
        if body_over || last.chars().count() > width {
            violations.push(ctx.violation(Code::D208, Code::D208.description()));
        }

        if widths.iter().min().is_some_and(|min| *min < width) {
            violations.push(ctx.violation(Code::D207, Code::D207.description()));
        }

        violations
    }
}

/// Multi-line docstrings end with the closing quotes on their own line
#[derive(Debug, Default)]
pub struct ClosingQuotes;

impl Rule for ClosingQuotes {
    fn name(&self) -> &'static str {
        "closing-quotes"
    }

    fn codes(&self) -> &'static [Code] {
        &[Code::D209]
    }

    fn execute(&self, ctx: &ExecutionContext<'_>) -> Vec<Violation> {
        let Some(docstring) = ctx.docstring() else {
            return vec![];
        };
        let non_blank = docstring
            .body
            .split('\n')
            .filter(|line| !is_blank(line))
            .count();
        if non_blank < 2 {
            return vec![];
        }

        let last = docstring.raw.rsplit('\n').next().unwrap_or("").trim();
        if last == "\"\"\"" || last == "'''" {
            return vec![];
        }
        vec![ctx.violation(Code::D209, Code::D209.description())]
    }
}

/// No whitespace between the quotes and the text
#[derive(Debug, Default)]
pub struct SurroundingWhitespace;

impl Rule for SurroundingWhitespace {
    fn name(&self) -> &'static str {
        "surrounding-whitespace"
    }

    fn codes(&self) -> &'static [Code] {
        &[Code::D210]
    }

    fn execute(&self, ctx: &ExecutionContext<'_>) -> Vec<Violation> {
        let Some(docstring) = ctx.docstring() else {
            return vec![];
        };
        let lines: Vec<&str> = docstring.body.split('\n').collect();
        let first = lines[0];
        let padded_start = first.starts_with([' ', '\t']);
        let padded_end = lines.len() == 1 && first.ends_with([' ', '\t']);
        if padded_start || padded_end {
            return vec![ctx.violation(Code::D210, Code::D210.description())];
        }
        vec![]
    }
}
