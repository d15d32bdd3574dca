#![forbid(unsafe_code)]

//! Per-unit checking: extraction, rule evaluation and result ordering

use crate::config::RuleConfig;
use crate::error::CheckError;
use crate::extract::{DocstringExtractor, SourceLabel, SourceUnit};
use crate::rules::{RuleRegistry, Violation};
use std::path::Path;
use std::sync::Arc;

/// Checks source units against the resolved configuration
///
/// Holds no per-unit state, so one checker can be shared by every worker.
#[derive(Clone)]
pub struct Checker {
    config: Arc<RuleConfig>,
    registry: Arc<RuleRegistry>,
}

impl Checker {
    /// Checker running every built-in rule
    pub fn new(config: RuleConfig) -> Self {
        Self::with_registry(config, RuleRegistry::builtin())
    }

    /// Checker running the rules of `registry`
    pub fn with_registry(config: RuleConfig, registry: RuleRegistry) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
        }
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// True if the unit behind `label` is in scope
    ///
    /// Files are matched by name against `match`. Standard input has no name
    /// and is always checked.
    pub fn should_check(&self, label: &SourceLabel) -> bool {
        match label {
            SourceLabel::Stdin => true,
            SourceLabel::Path(_) => label
                .file_name()
                .is_some_and(|name| self.config.matches_file(name)),
        }
    }

    /// True if the directory at `path` should be descended into
    pub fn should_check_dir(&self, path: &Path) -> bool {
        match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => self.config.matches_dir(name),
            // `.`, `..` and roots have no name to match
            None => true,
        }
    }

    /// Checks one unit
    ///
    /// Violations come back ordered by line, column and code, without
    /// duplicates. The label only affects error messages, never the result.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::Syntax` if the unit cannot be parsed.
    pub fn check(&self, unit: &SourceUnit) -> Result<Vec<Violation>, CheckError> {
        let mut extractor = DocstringExtractor::new()?;
        let nodes = extractor.extract(unit)?;

        let mut violations: Vec<Violation> = nodes
            .iter()
            .flat_map(|node| self.registry.evaluate(node, &self.config))
            .collect();

        violations.sort_by_key(Violation::sort_key);
        violations.dedup_by_key(|v| v.sort_key());

        tracing::trace!(
            "{}: {} definitions, {} violations",
            unit.label(),
            nodes.len(),
            violations.len()
        );
        Ok(violations)
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new(RuleConfig::default())
    }
}
