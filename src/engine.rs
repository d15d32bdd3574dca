//! Checking engine: per-unit checker, file discovery and parallel execution

pub mod checker;
pub mod executor;
pub mod file_walker;

pub use checker::Checker;
pub use executor::{ExecutionEngine, ExecutionResult, FileReport};
pub use file_walker::{FileWalker, FileWalkerError, SkipReason, WalkResult};
