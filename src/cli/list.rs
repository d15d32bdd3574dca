//! List command implementation
//!
//! This module implements the `pep257 list` command, which lists every rule
//! code with its message and marks the codes disabled by the resolved
//! configuration.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS};
use crate::output::{RuleEntry, RuleListHumanFormatter, RuleListJsonlFormatter};
use std::path::Path;

/// Run the list command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Configuration error
pub fn run_list(format: OutputFormat, config_dir: Option<&Path>) -> i32 {
    match super::common::load_config(config_dir) {
        Ok(config) => {
            let entries = RuleEntry::catalog(&config);
            match format {
                OutputFormat::Text => RuleListHumanFormatter::new().write_to_stdout(&entries),
                OutputFormat::Jsonl => RuleListJsonlFormatter::new().write_to_stdout(&entries),
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}
