#![forbid(unsafe_code)]

//! Minimal INI reader for `tox.ini`, `setup.cfg` and `.pep257`
//!
//! Follows the conventions these files share: `[section]` headers, `key = value`
//! or `key: value` entries, full-line `#` and `;` comments, and indented
//! continuation lines that extend the previous value. Keys are lowercased.
//! A section that appears twice is merged, later entries winning.

use regex::Regex;
use std::sync::LazyLock;

static SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(?P<name>[^\]]+)\]\s*$").expect("valid section regex"));

/// INI syntax error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {message}")]
pub struct IniError {
    /// Line number (1-indexed)
    pub line: usize,
    pub message: String,
}

/// One `[section]` and its entries, in file order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IniSection {
    pub name: String,
    entries: Vec<(String, String)>,
}

impl IniSection {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    fn set(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Value of `key`; keys are matched case-insensitively
    pub fn get(&self, key: &str) -> Option<&str> {
        let key = key.to_ascii_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All entries in file order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A parsed INI file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IniDocument {
    sections: Vec<IniSection>,
}

impl IniDocument {
    /// Parses INI text
    pub fn parse(text: &str) -> Result<Self, IniError> {
        let mut doc = IniDocument::default();
        let mut current: Option<usize> = None;
        let mut last_key: Option<String> = None;

        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            let trimmed = line.trim();

            if trimmed.is_empty() {
                // A blank line ends any continuation.
                last_key = None;
                continue;
            }
            if trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            let indented = line.starts_with([' ', '\t']);
            if indented
                && let (Some(section), Some(key)) = (current, last_key.as_ref())
            {
                let section = &mut doc.sections[section];
                let value = section.get(key).unwrap_or_default();
                let joined = if value.is_empty() {
                    trimmed.to_string()
                } else {
                    format!("{value}\n{trimmed}")
                };
                section.set(key.clone(), joined);
                continue;
            }

            if let Some(caps) = SECTION_HEADER.captures(trimmed) {
                let name = caps["name"].trim();
                current = Some(doc.section_index_or_insert(name));
                last_key = None;
                continue;
            }

            let Some(section) = current else {
                return Err(IniError {
                    line: line_no,
                    message: format!("entry outside of any section: '{trimmed}'"),
                });
            };

            let Some(split) = trimmed.find(['=', ':']) else {
                return Err(IniError {
                    line: line_no,
                    message: format!("expected 'key = value', found '{trimmed}'"),
                });
            };
            let key = trimmed[..split].trim().to_ascii_lowercase();
            if key.is_empty() {
                return Err(IniError {
                    line: line_no,
                    message: "entry has an empty key".to_string(),
                });
            }
            let value = trimmed[split + 1..].trim().to_string();
            doc.sections[section].set(key.clone(), value);
            last_key = Some(key);
        }

        Ok(doc)
    }

    fn section_index_or_insert(&mut self, name: &str) -> usize {
        match self.sections.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                self.sections.push(IniSection::new(name));
                self.sections.len() - 1
            }
        }
    }

    /// Section named exactly `name`
    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// All sections in order of first appearance
    pub fn sections(&self) -> &[IniSection] {
        &self.sections
    }
}
