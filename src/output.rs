//! Output formatters (text and JSONL)

pub mod jsonl;
pub mod rule_list;
pub mod text;

pub use jsonl::JsonlFormatter;
pub use rule_list::{RuleEntry, RuleListHumanFormatter, RuleListJsonlFormatter};
pub use text::{TextFormatter, render};
