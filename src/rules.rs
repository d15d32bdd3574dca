#![forbid(unsafe_code)]

//! Rule definitions and registry
//!
//! Each rule inspects one [`DocstringNode`](crate::extract::DocstringNode) and
//! reports zero or more coded violations. Rules are grouped by the part of
//! the docstring they look at.

mod blank_lines;
mod layout;
mod missing;
mod mood;
mod quotes;
mod registry;
mod rule;
mod summary;

pub use blank_lines::{BlankLineAfterSummary, BlankLinesAroundDocstring};
pub use layout::{ClosingQuotes, Indentation, OneLiner, SurroundingWhitespace};
pub use missing::MissingDocstring;
pub use mood::{ImperativeMood, MoodHeuristic, SuffixHeuristic};
pub use quotes::{RawBackslashes, TripleDoubleQuotes};
pub use registry::RuleRegistry;
pub use rule::{ExecutionContext, Rule, Violation};
pub use summary::{EndsWithPeriod, NoSignature};
