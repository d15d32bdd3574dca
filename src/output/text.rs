#![forbid(unsafe_code)]

//! Diagnostic lines in the `label:line:column: CODE message` format

use crate::engine::ExecutionResult;
use crate::extract::SourceLabel;
use crate::rules::Violation;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Renders one violation as a diagnostic line, without the trailing newline
pub fn render(label: &SourceLabel, violation: &Violation) -> String {
    format!(
        "{}:{}:{}: {} {}",
        label, violation.line, violation.column, violation.code, violation.message
    )
}

/// Text formatter for check results
///
/// Writes one line per violation to stdout, grouped by unit in input order.
/// Only the code is colored so the lines stay grep-friendly.
pub struct TextFormatter {
    color: ColorChoice,
}

impl TextFormatter {
    pub fn new(color: ColorChoice) -> Self {
        Self { color }
    }

    /// Formats the result without color
    pub fn format(&self, result: &ExecutionResult) -> String {
        let mut output = String::new();
        for report in &result.reports {
            for violation in report.violations() {
                output.push_str(&render(&report.label, violation));
                output.push('\n');
            }
        }
        output
    }

    /// Writes the result to a color-capable writer
    pub fn write(&self, result: &ExecutionResult, out: &mut impl WriteColor) -> io::Result<()> {
        let mut code_spec = ColorSpec::new();
        code_spec.set_fg(Some(Color::Red)).set_bold(true);

        for report in &result.reports {
            for v in report.violations() {
                write!(out, "{}:{}:{}: ", report.label, v.line, v.column)?;
                out.set_color(&code_spec)?;
                write!(out, "{}", v.code)?;
                out.reset()?;
                writeln!(out, " {}", v.message)?;
            }
        }
        out.flush()
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, result: &ExecutionResult) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color);
        self.write(result, &mut stdout)
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorChoice::Auto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::FileReport;
    use crate::error::CheckError;
    use crate::types::Code;
    use std::path::PathBuf;
    use termcolor::{Ansi, NoColor};

    fn violation(line: u32, code: Code, message: &str) -> Violation {
        Violation {
            code,
            line,
            column: 1,
            message: message.to_string(),
        }
    }

    fn result() -> ExecutionResult {
        ExecutionResult {
            reports: vec![
                FileReport {
                    label: PathBuf::from("./sample_module.py").into(),
                    outcome: Ok(vec![
                        violation(1, Code::D100, "Missing docstring in public module"),
                        violation(
                            14,
                            Code::D203,
                            "1 blank line required before class docstring (found 0)",
                        ),
                    ]),
                },
                FileReport {
                    label: SourceLabel::Stdin,
                    outcome: Err(CheckError::Syntax {
                        label: "stdin".to_string(),
                        line: 1,
                        column: 1,
                    }),
                },
            ],
            files_checked: 2,
        }
    }

    #[test]
    fn test_render() {
        let v = violation(
            5,
            Code::D300,
            "Use \"\"\"triple double quotes\"\"\" (found '''-quotes)",
        );
        assert_eq!(
            render(&PathBuf::from("./sample_module.py").into(), &v),
            "./sample_module.py:5:1: D300 Use \"\"\"triple double quotes\"\"\" (found '''-quotes)"
        );
        assert_eq!(
            render(&SourceLabel::Stdin, &v),
            "stdin:5:1: D300 Use \"\"\"triple double quotes\"\"\" (found '''-quotes)"
        );
    }

    #[test]
    fn test_format_skips_failed_units() {
        let output = TextFormatter::default().format(&result());
        assert_eq!(
            output,
            "./sample_module.py:1:1: D100 Missing docstring in public module\n\
             ./sample_module.py:14:1: D203 1 blank line required before class docstring (found 0)\n"
        );
    }

    #[test]
    fn test_write_without_color_matches_format() {
        let formatter = TextFormatter::new(ColorChoice::Never);
        let mut out = NoColor::new(Vec::new());
        formatter.write(&result(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out.into_inner()).unwrap(),
            formatter.format(&result())
        );
    }

    #[test]
    fn test_write_with_color_highlights_code() {
        let formatter = TextFormatter::new(ColorChoice::Always);
        let mut out = Ansi::new(Vec::new());
        formatter.write(&result(), &mut out).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert!(text.contains("\x1b["));
        assert!(text.contains("D100"));
        assert!(text.starts_with("./sample_module.py:1:1: "));
    }
}
