#![forbid(unsafe_code)]

//! Configuration file discovery and resolution
//!
//! Looks for configuration in one directory, checking candidate files in a
//! fixed order:
//!
//! 1. `tox.ini` (`[flake8]` and `[pep257]` sections)
//! 2. `setup.cfg` (`[flake8]` and `[pep257]` sections)
//! 3. `.pep257` (`[pep257]` section)
//!
//! The first file that exists and has a recognised section is the only one
//! read. Within that file `[pep257]` overrides `[flake8]` key by key. When no
//! file qualifies the defaults apply.

use crate::config::ini::{IniDocument, IniSection};
use crate::config::rule_config::{DEFAULT_MATCH, DEFAULT_MATCH_DIR, MatchPattern, RuleConfig};
use crate::error::ConfigError;
use crate::types::Code;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Candidate file names and the sections each may carry, lowest precedence first
const CANDIDATES: &[(&str, &[&str])] = &[
    ("tox.ini", &["flake8", "pep257"]),
    ("setup.cfg", &["flake8", "pep257"]),
    (".pep257", &["pep257"]),
];

/// Settings read from one or more sections, before validation
///
/// `None` means the key was not given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub match_pattern: Option<String>,
    pub match_dir: Option<String>,
    pub ignore: Option<String>,
    pub select: Option<String>,
}

impl Settings {
    /// Picks the recognised keys out of a section
    ///
    /// Keys are case-insensitive and `match_dir` is the same as `match-dir`.
    /// Unknown keys belong to other tools and are skipped.
    pub fn from_section(section: &IniSection) -> Self {
        let mut settings = Settings::default();
        for (key, value) in section.entries() {
            let value = unquote(value).to_string();
            match key.to_ascii_lowercase().replace('_', "-").as_str() {
                "match" => settings.match_pattern = Some(value),
                "match-dir" => settings.match_dir = Some(value),
                "ignore" => settings.ignore = Some(value),
                "select" => settings.select = Some(value),
                _ => {}
            }
        }
        settings
    }

    /// Field-by-field merge where `higher` wins
    pub fn overlay(self, higher: Settings) -> Settings {
        Settings {
            match_pattern: higher.match_pattern.or(self.match_pattern),
            match_dir: higher.match_dir.or(self.match_dir),
            ignore: higher.ignore.or(self.ignore),
            select: higher.select.or(self.select),
        }
    }

    /// Validates the settings and fills in defaults
    pub fn into_rule_config(self) -> Result<RuleConfig, ConfigError> {
        let match_pattern = MatchPattern::new(
            "match",
            self.match_pattern.as_deref().unwrap_or(DEFAULT_MATCH),
        )?;
        let match_dir_pattern = MatchPattern::new(
            "match-dir",
            self.match_dir.as_deref().unwrap_or(DEFAULT_MATCH_DIR),
        )?;

        let mut enabled: BTreeSet<Code> = match self.select.as_deref() {
            Some(select) => parse_codes("select", select),
            None => Code::ALL.iter().copied().collect(),
        };
        if let Some(ignore) = self.ignore.as_deref() {
            for code in parse_codes("ignore", ignore) {
                enabled.remove(&code);
            }
        }

        Ok(RuleConfig::new(enabled, match_pattern, match_dir_pattern))
    }
}

/// Strips one pair of matching surrounding quotes
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2
            && let Some(inner) = value
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Expands a comma or whitespace separated list of codes and code prefixes
fn parse_codes(key: &str, value: &str) -> BTreeSet<Code> {
    let mut codes = BTreeSet::new();
    for entry in value
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|e| !e.is_empty())
    {
        let mut matched = Code::matching_prefix(entry).peekable();
        if matched.peek().is_none() {
            tracing::debug!("Ignoring unknown code '{}' in '{}'", entry, key);
        }
        codes.extend(matched);
    }
    codes
}

/// A configuration file that was found and applies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    /// Path of the file
    pub path: PathBuf,

    /// Sections that contributed settings, lowest precedence first
    pub sections: Vec<String>,

    /// Merged settings of those sections
    pub settings: Settings,
}

/// Finds and reads the configuration for one run
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    dir: PathBuf,
}

impl ConfigResolver {
    /// Resolver that searches `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory that is searched
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Finds the configuration file that applies, if any
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a candidate exists but cannot be read or is
    /// not valid INI.
    pub fn discover(&self) -> Result<Option<ConfigSource>, ConfigError> {
        for (name, section_names) in CANDIDATES {
            let path = self.dir.join(name);
            if !path.is_file() {
                continue;
            }

            let text = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
            let doc = IniDocument::parse(&text).map_err(|source| ConfigError::Syntax {
                path: path.clone(),
                source,
            })?;

            let mut sections = Vec::new();
            let mut settings = Settings::default();
            for section_name in section_names.iter() {
                if let Some(section) = doc.section(section_name) {
                    settings = settings.overlay(Settings::from_section(section));
                    sections.push(section_name.to_string());
                }
            }

            if sections.is_empty() {
                tracing::debug!(
                    "Skipping {}: no {} section",
                    path.display(),
                    section_names.join(" or ")
                );
                continue;
            }

            tracing::debug!("Found config: {} [{}]", path.display(), sections.join(", "));
            return Ok(Some(ConfigSource {
                path,
                sections,
                settings,
            }));
        }

        tracing::debug!("No config found in {}, using defaults", self.dir.display());
        Ok(None)
    }

    /// Discovers the configuration and turns it into a `RuleConfig`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for unreadable or malformed files and for
    /// `match`/`match-dir` values that are not valid regular expressions.
    pub fn resolve(&self) -> Result<RuleConfig, ConfigError> {
        let settings = self
            .discover()?
            .map(|source| source.settings)
            .unwrap_or_default();
        settings.into_rule_config()
    }
}
