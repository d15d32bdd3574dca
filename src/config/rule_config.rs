#![forbid(unsafe_code)]

//! Resolved, immutable settings of one run

use crate::error::ConfigError;
use crate::types::Code;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

/// Default `match`: Python files not named like tests
pub const DEFAULT_MATCH: &str = r"(?!test_).*\.py";

/// Default `match-dir`: directories that are not hidden
pub const DEFAULT_MATCH_DIR: &str = r"[^\.].*";

static DEFAULT_MATCH_PATTERN: LazyLock<MatchPattern> = LazyLock::new(|| {
    MatchPattern::new("match", DEFAULT_MATCH).expect("default match pattern is valid")
});

static DEFAULT_MATCH_DIR_PATTERN: LazyLock<MatchPattern> = LazyLock::new(|| {
    MatchPattern::new("match-dir", DEFAULT_MATCH_DIR).expect("default match-dir pattern is valid")
});

/// A user-supplied name pattern that must match a whole name
///
/// Patterns may use look-around, so they are compiled with `fancy-regex`.
#[derive(Clone)]
pub struct MatchPattern {
    source: String,
    regex: fancy_regex::Regex,
}

impl MatchPattern {
    /// Compiles `pattern`, anchored at both ends
    ///
    /// `key` names the setting the pattern came from and only appears in the
    /// error.
    pub fn new(key: &str, pattern: &str) -> Result<Self, ConfigError> {
        let regex = fancy_regex::Regex::new(&format!("^(?:{pattern})$")).map_err(|e| {
            ConfigError::InvalidPattern {
                key: key.to_string(),
                pattern: pattern.to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// True if the whole of `name` matches
    ///
    /// A pattern that exceeds the backtracking limit on some input is logged
    /// and treated as not matching.
    pub fn is_full_match(&self, name: &str) -> bool {
        match self.regex.is_match(name) {
            Ok(matched) => matched,
            Err(e) => {
                tracing::warn!("Pattern '{}' failed on '{}': {}", self.source, name, e);
                false
            }
        }
    }

    /// The pattern as written in the configuration
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Debug for MatchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MatchPattern").field(&self.source).finish()
    }
}

impl PartialEq for MatchPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

/// Resolved settings: which codes are reported and which names are in scope
///
/// Built once per run and shared read-only by every worker.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleConfig {
    enabled: BTreeSet<Code>,
    match_pattern: MatchPattern,
    match_dir_pattern: MatchPattern,
}

impl RuleConfig {
    pub fn new(
        enabled: BTreeSet<Code>,
        match_pattern: MatchPattern,
        match_dir_pattern: MatchPattern,
    ) -> Self {
        Self {
            enabled,
            match_pattern,
            match_dir_pattern,
        }
    }

    /// Replaces the enabled code set
    pub fn with_enabled(mut self, enabled: BTreeSet<Code>) -> Self {
        self.enabled = enabled;
        self
    }

    /// Replaces the file name pattern
    pub fn with_match_pattern(mut self, pattern: MatchPattern) -> Self {
        self.match_pattern = pattern;
        self
    }

    pub fn is_enabled(&self, code: Code) -> bool {
        self.enabled.contains(&code)
    }

    pub fn enabled_codes(&self) -> &BTreeSet<Code> {
        &self.enabled
    }

    pub fn match_pattern(&self) -> &MatchPattern {
        &self.match_pattern
    }

    pub fn match_dir_pattern(&self) -> &MatchPattern {
        &self.match_dir_pattern
    }

    /// True if a file called `file_name` is in scope
    pub fn matches_file(&self, file_name: &str) -> bool {
        self.match_pattern.is_full_match(file_name)
    }

    /// True if a directory called `dir_name` should be descended into
    pub fn matches_dir(&self, dir_name: &str) -> bool {
        self.match_dir_pattern.is_full_match(dir_name)
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            enabled: Code::ALL.iter().copied().collect(),
            match_pattern: DEFAULT_MATCH_PATTERN.clone(),
            match_dir_pattern: DEFAULT_MATCH_DIR_PATTERN.clone(),
        }
    }
}
