#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line in a deterministic order:
//! 1. All violation records (unit order, then line, column and code)
//! 2. One summary record

use crate::engine::ExecutionResult;
use crate::types::Code;
use serde::Serialize;

/// JSONL output formatter
///
/// Formats check results as JSON Lines (one JSON object per line).
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the check result as JSONL
    pub fn format(&self, result: &ExecutionResult) -> String {
        let mut output = String::new();

        for report in &result.reports {
            let file = report.label.to_string();
            for violation in report.violations() {
                let record = ViolationRecord {
                    record_type: "violation",
                    file: &file,
                    line: violation.line,
                    column: violation.column,
                    code: violation.code,
                    message: &violation.message,
                };
                if let Ok(json) = serde_json::to_string(&record) {
                    output.push_str(&json);
                    output.push('\n');
                }
            }
        }

        let summary = SummaryRecord {
            record_type: "summary",
            files_checked: result.files_checked as u64,
            files_failed: result.files_failed() as u64,
            violations: result.violation_count() as u64,
        };
        if let Ok(json) = serde_json::to_string(&summary) {
            output.push_str(&json);
            output.push('\n');
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, result: &ExecutionResult) {
        print!("{}", self.format(result));
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Violation record for JSONL output
#[derive(Debug, Serialize)]
struct ViolationRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    file: &'a str,
    line: u32,
    column: u32,
    code: Code,
    message: &'a str,
}

/// Summary record for JSONL output
#[derive(Debug, Serialize)]
struct SummaryRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    files_checked: u64,
    files_failed: u64,
    violations: u64,
}
