#![forbid(unsafe_code)]

//! Core Rule trait and related types for defining and executing rules

use crate::config::RuleConfig;
use crate::extract::{Docstring, DocstringNode};
use crate::types::Code;

/// Execution context provided to rules when they execute
///
/// Rules see one extracted definition at a time, plus the resolved
/// configuration of the run.
#[derive(Debug, Clone, Copy)]
pub struct ExecutionContext<'a> {
    /// The definition being checked
    pub node: &'a DocstringNode,

    /// Resolved configuration of the run
    pub config: &'a RuleConfig,
}

impl<'a> ExecutionContext<'a> {
    /// The node's docstring, if present
    pub fn docstring(&self) -> Option<&'a Docstring> {
        self.node.docstring.as_ref()
    }

    /// Builds a violation located at the node's definition header
    pub fn violation(&self, code: Code, message: impl Into<String>) -> Violation {
        Violation {
            code,
            line: self.node.start_line,
            column: self.node.start_column,
            message: message.into(),
        }
    }
}

/// A single convention violation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Violation {
    /// Convention code
    pub code: Code,

    /// Line number (1-indexed)
    pub line: u32,

    /// Column number (1-indexed)
    pub column: u32,

    /// Human-readable message with rule-specific detail
    pub message: String,
}

impl Violation {
    /// Ordering and deduplication key
    pub fn sort_key(&self) -> (u32, u32, Code) {
        (self.line, self.column, self.code)
    }
}

/// Trait that all rules must implement
///
/// Rules are pure functions of the node they inspect: they hold no state
/// between calls and never depend on other rules. The trait is `Send + Sync`
/// so one registry can be shared by parallel workers.
pub trait Rule: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Every code this rule can emit
    fn codes(&self) -> &'static [Code];

    /// Executes the rule against one definition
    ///
    /// Returns an empty vector if the definition conforms.
    fn execute(&self, ctx: &ExecutionContext<'_>) -> Vec<Violation>;
}
