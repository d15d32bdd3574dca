#![forbid(unsafe_code)]

//! Blank lines around docstrings (D201-D204) and after the summary (D205)

use crate::rules::{ExecutionContext, Rule, Violation};
use crate::types::{Code, OwnerKind};

/// Blank lines between a definition header, its docstring and the next statement
///
/// Functions and methods allow none on either side; classes require exactly
/// one on each side. The trailing check only applies when something follows
/// the docstring.
#[derive(Debug, Default)]
pub struct BlankLinesAroundDocstring;

impl Rule for BlankLinesAroundDocstring {
    fn name(&self) -> &'static str {
        "blank-lines-around-docstring"
    }

    fn codes(&self) -> &'static [Code] {
        &[Code::D201, Code::D202, Code::D203, Code::D204]
    }

    fn execute(&self, ctx: &ExecutionContext<'_>) -> Vec<Violation> {
        let Some(docstring) = ctx.docstring() else {
            return vec![];
        };
        let before = docstring.blank_lines_before;
        let after = docstring.blank_lines_after;

        let mut violations = Vec::new();
        match ctx.node.owner_kind {
            OwnerKind::Function | OwnerKind::Method => {
                if before != 0 {
                    violations.push(ctx.violation(
                        Code::D201,
                        format!("No blank lines allowed before function docstring (found {before})"),
                    ));
                }
                if let Some(after) = after
                    && after != 0
                {
                    violations.push(ctx.violation(
                        Code::D202,
                        format!("No blank lines allowed after function docstring (found {after})"),
                    ));
                }
            }
            OwnerKind::Class => {
                if before != 1 {
                    violations.push(ctx.violation(
                        Code::D203,
                        format!("1 blank line required before class docstring (found {before})"),
                    ));
                }
                if let Some(after) = after
                    && after != 1
                {
                    violations.push(ctx.violation(
                        Code::D204,
                        format!("1 blank line required after class docstring (found {after})"),
                    ));
                }
            }
            OwnerKind::Module => {}
        }
        violations
    }
}

/// Exactly one blank line between the summary line and the description
#[derive(Debug, Default)]
pub struct BlankLineAfterSummary;

impl Rule for BlankLineAfterSummary {
    fn name(&self) -> &'static str {
        "blank-line-after-summary"
    }

    fn codes(&self) -> &'static [Code] {
        &[Code::D205]
    }

    fn execute(&self, ctx: &ExecutionContext<'_>) -> Vec<Violation> {
        let Some(docstring) = ctx.docstring() else {
            return vec![];
        };
        let lines: Vec<&str> = docstring.trimmed_body().split('\n').collect();
        if lines.len() < 2 {
            return vec![];
        }

        let blanks = lines[1..]
            .iter()
            .take_while(|line| line.trim().is_empty())
            .count();
        if blanks == 1 {
            return vec![];
        }
        vec![ctx.violation(
            Code::D205,
            format!("1 blank line required between summary line and description (found {blanks})"),
        )]
    }
}
