#![forbid(unsafe_code)]

//! Rule registry for managing and evaluating rules
//!
//! The RuleRegistry is responsible for:
//! - Holding the built-in rule catalog
//! - Evaluating every rule against one extracted definition
//! - Dropping violations whose code is disabled by configuration

use crate::config::RuleConfig;
use crate::extract::DocstringNode;
use crate::rules::{
    BlankLineAfterSummary, BlankLinesAroundDocstring, ClosingQuotes, EndsWithPeriod,
    ExecutionContext, ImperativeMood, Indentation, MissingDocstring, NoSignature, OneLiner,
    RawBackslashes, Rule, SurroundingWhitespace, TripleDoubleQuotes, Violation,
};
use crate::types::Code;
use std::collections::BTreeSet;

/// Registry for storing and evaluating rules
///
/// Rules are stored as trait objects in registration order. Evaluation order
/// does not matter: callers sort the combined output.
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a new empty RuleRegistry
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Registry holding every built-in rule
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(MissingDocstring));
        registry.register(Box::new(OneLiner));
        registry.register(Box::new(BlankLinesAroundDocstring));
        registry.register(Box::new(BlankLineAfterSummary));
        registry.register(Box::new(Indentation));
        registry.register(Box::new(ClosingQuotes));
        registry.register(Box::new(SurroundingWhitespace));
        registry.register(Box::new(TripleDoubleQuotes));
        registry.register(Box::new(RawBackslashes));
        registry.register(Box::new(EndsWithPeriod));
        registry.register(Box::new(ImperativeMood::new()));
        registry.register(Box::new(NoSignature));
        registry
    }

    /// Add a rule to the registry
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Runs every rule against `node` and keeps the enabled violations
    ///
    /// The result is unsorted and may contain the same violation twice if
    /// two rules share a code.
    pub fn evaluate(&self, node: &DocstringNode, config: &RuleConfig) -> Vec<Violation> {
        let ctx = ExecutionContext { node, config };
        let mut violations = Vec::new();

        for rule in &self.rules {
            let found = rule.execute(&ctx);
            debug_assert!(
                found.iter().all(|v| rule.codes().contains(&v.code)),
                "rule '{}' emitted a code it does not declare",
                rule.name()
            );
            violations.extend(found.into_iter().filter(|v| config.is_enabled(v.code)));
        }

        debug_assert!(
            node.docstring.is_some()
                || violations
                    .iter()
                    .all(|v| MissingDocstring::CODES.contains(&v.code)),
            "undocumented node produced a non-missing-docstring violation"
        );

        violations
    }

    /// Iterate over all rules in the registry
    pub fn iter_rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|boxed| boxed.as_ref())
    }

    /// Every code some registered rule can emit
    pub fn codes(&self) -> BTreeSet<Code> {
        self.iter_rules()
            .flat_map(|rule| rule.codes().iter().copied())
            .collect()
    }

    /// Get the number of rules in the registry
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
