#![forbid(unsafe_code)]

//! Summary line content (D400, D402)

use crate::rules::{ExecutionContext, Rule, Violation};
use crate::types::Code;

/// Renders a character the way the message quotes it: `'c'`, or `"'"` for a quote
fn quoted_char(c: char) -> String {
    match c {
        '\'' => "\"'\"".to_string(),
        '\\' => "'\\\\'".to_string(),
        c => format!("'{c}'"),
    }
}

/// The summary line ends with a period
#[derive(Debug, Default)]
pub struct EndsWithPeriod;

impl Rule for EndsWithPeriod {
    fn name(&self) -> &'static str {
        "ends-with-period"
    }

    fn codes(&self) -> &'static [Code] {
        &[Code::D400]
    }

    fn execute(&self, ctx: &ExecutionContext<'_>) -> Vec<Violation> {
        let Some(docstring) = ctx.docstring() else {
            return vec![];
        };
        match docstring.summary_line().chars().last() {
            Some('.') | None => vec![],
            Some(last) => vec![ctx.violation(
                Code::D400,
                format!(
                    "First line should end with a period (not {})",
                    quoted_char(last)
                ),
            )],
        }
    }
}

/// The summary line of a callable does not repeat its signature
#[derive(Debug, Default)]
pub struct NoSignature;

impl Rule for NoSignature {
    fn name(&self) -> &'static str {
        "no-signature"
    }

    fn codes(&self) -> &'static [Code] {
        &[Code::D402]
    }

    fn execute(&self, ctx: &ExecutionContext<'_>) -> Vec<Violation> {
        if !ctx.node.owner_kind.is_callable() {
            return vec![];
        }
        let Some(docstring) = ctx.docstring() else {
            return vec![];
        };

        let summary: String = docstring
            .summary_line()
            .chars()
            .filter(|c| *c != ' ')
            .collect();
        if summary.contains(&format!("{}(", ctx.node.name)) {
            return vec![ctx.violation(Code::D402, Code::D402.description())];
        }
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleConfig;
    use crate::extract::{Docstring, DocstringNode};
    use crate::types::{OwnerKind, QuoteStyle};

    fn node(kind: OwnerKind, name: &str, body: &str) -> DocstringNode {
        DocstringNode {
            owner_kind: kind,
            name: name.to_string(),
            is_public: true,
            is_package: false,
            start_line: 1,
            start_column: 1,
            docstring: Some(Docstring {
                raw: format!("\"\"\"{body}\"\"\""),
                prefix: String::new(),
                quote_style: QuoteStyle::TripleDouble,
                quotes: "\"\"\"".to_string(),
                body: body.to_string(),
                indent: String::new(),
                start_line: 2,
                end_line: 2,
                blank_lines_before: 0,
                blank_lines_after: None,
            }),
        }
    }

    fn messages(rule: &dyn Rule, node: &DocstringNode) -> Vec<String> {
        let config = RuleConfig::default();
        rule.execute(&ExecutionContext {
            node,
            config: &config,
        })
        .into_iter()
        .map(|v| v.message)
        .collect()
    }

    #[test]
    fn test_missing_period_reports_last_char() {
        let doc = node(OwnerKind::Function, "run", "Run the job");
        assert_eq!(
            messages(&EndsWithPeriod, &doc),
            vec!["First line should end with a period (not 'b')"]
        );

        let quoted = node(OwnerKind::Module, "", "Parse 'value'");
        assert_eq!(
            messages(&EndsWithPeriod, &quoted),
            vec!["First line should end with a period (not \"'\")"]
        );
    }

    #[test]
    fn test_period_checks_first_line_only() {
        let doc = node(OwnerKind::Class, "Job", "A job.\n\n    Details follow\n    ");
        assert!(messages(&EndsWithPeriod, &doc).is_empty());

        let multi = node(OwnerKind::Class, "Job", "\n    A job\n\n    Details.\n    ");
        assert_eq!(messages(&EndsWithPeriod, &multi).len(), 1);
    }

    #[test]
    fn test_empty_docstring_is_skipped() {
        assert!(messages(&EndsWithPeriod, &node(OwnerKind::Function, "f", "  ")).is_empty());
        assert!(messages(&NoSignature, &node(OwnerKind::Function, "f", "")).is_empty());
    }

    #[test]
    fn test_signature_in_summary() {
        let doc = node(OwnerKind::Function, "fetch", "fetch (url, timeout) -> bytes");
        assert_eq!(
            messages(&NoSignature, &doc),
            vec!["First line should not be the function's \"signature\""]
        );

        let method = node(OwnerKind::Method, "get", "get(key) returns the value.");
        assert_eq!(messages(&NoSignature, &method).len(), 1);

        let fine = node(OwnerKind::Function, "fetch", "Fetch the resource.");
        assert!(messages(&NoSignature, &fine).is_empty());
    }

    #[test]
    fn test_signature_ignored_for_classes() {
        let doc = node(OwnerKind::Class, "Point", "Point(x, y) in the plane.");
        assert!(messages(&NoSignature, &doc).is_empty());
    }
}
