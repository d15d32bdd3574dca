#![forbid(unsafe_code)]

//! Rule list output formatters
//!
//! This module provides formatters for the `pep257 list` command. It supports
//! both human-readable and JSONL output formats.

use crate::config::RuleConfig;
use crate::types::Code;
use serde::Serialize;

/// One catalog entry as shown by `pep257 list`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    pub code: Code,
    pub description: String,
    pub enabled: bool,
}

impl RuleEntry {
    /// Every known code, with its state under `config`
    pub fn catalog(config: &RuleConfig) -> Vec<RuleEntry> {
        Code::ALL
            .iter()
            .map(|code| RuleEntry {
                code: *code,
                description: code.description().to_string(),
                enabled: config.is_enabled(*code),
            })
            .collect()
    }
}

/// Human-readable formatter for the rule list
pub struct RuleListHumanFormatter;

impl RuleListHumanFormatter {
    /// Create a new human formatter
    pub fn new() -> Self {
        RuleListHumanFormatter
    }

    /// Format the rule list for human consumption
    pub fn format(&self, entries: &[RuleEntry]) -> String {
        let enabled = entries.iter().filter(|e| e.enabled).count();
        let mut output = format!("Rules ({} of {} enabled):\n\n", enabled, entries.len());

        for entry in entries {
            let marker = if entry.enabled { " " } else { "-" };
            output.push_str(&format!("{} {} {}\n", marker, entry.code, entry.description));
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, entries: &[RuleEntry]) {
        print!("{}", self.format(entries));
    }
}

impl Default for RuleListHumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// JSONL output structure for one rule
#[derive(Debug, Serialize)]
struct JsonlRuleEntry<'a> {
    code: Code,
    description: &'a str,
    enabled: bool,
}

/// JSONL formatter for the rule list
pub struct RuleListJsonlFormatter;

impl RuleListJsonlFormatter {
    /// Create a new JSONL formatter
    pub fn new() -> Self {
        RuleListJsonlFormatter
    }

    /// Format the rule list as JSONL, one object per rule
    pub fn format(&self, entries: &[RuleEntry]) -> String {
        let mut output = String::new();

        for entry in entries {
            let record = JsonlRuleEntry {
                code: entry.code,
                description: &entry.description,
                enabled: entry.enabled,
            };

            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, entries: &[RuleEntry]) {
        print!("{}", self.format(entries));
    }
}

impl Default for RuleListJsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn config_without(disabled: &[Code]) -> RuleConfig {
        let enabled: BTreeSet<Code> = Code::ALL
            .iter()
            .copied()
            .filter(|c| !disabled.contains(c))
            .collect();
        RuleConfig::default().with_enabled(enabled)
    }

    #[test]
    fn test_catalog_lists_every_code() {
        let entries = RuleEntry::catalog(&config_without(&[Code::D203]));
        assert_eq!(entries.len(), Code::ALL.len());
        let d203 = entries.iter().find(|e| e.code == Code::D203).unwrap();
        assert!(!d203.enabled);
        assert_eq!(d203.description, "1 blank line required before class docstring");
        assert!(entries.iter().filter(|e| e.code != Code::D203).all(|e| e.enabled));
    }

    #[test]
    fn test_human_formatter() {
        let entries = RuleEntry::catalog(&config_without(&[Code::D203, Code::D204]));
        let output = RuleListHumanFormatter::new().format(&entries);

        assert!(output.starts_with("Rules (20 of 22 enabled):"));
        assert!(output.contains("  D100 Missing docstring in public module\n"));
        assert!(output.contains("- D203 1 blank line required before class docstring\n"));
    }

    #[test]
    fn test_jsonl_formatter() {
        let entries = RuleEntry::catalog(&config_without(&[Code::D401]));
        let output = RuleListJsonlFormatter::new().format(&entries);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), Code::ALL.len());

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["code"], "D100");
        assert_eq!(first["enabled"], true);

        let d401 = lines
            .iter()
            .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap())
            .find(|v| v["code"] == "D401")
            .unwrap();
        assert_eq!(d401["enabled"], false);
        assert_eq!(d401["description"], "First line should be in imperative mood");
    }

    #[test]
    fn test_jsonl_formatter_empty() {
        assert_eq!(RuleListJsonlFormatter::new().format(&[]), "");
    }
}
