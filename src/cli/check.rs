//! Check command implementation
//!
//! This module implements the `pep257 check` command, which:
//! - Resolves configuration from the config directory
//! - Discovers files under each path, or reads stdin for `-`
//! - Checks all units in parallel
//! - Formats output (text or JSONL)
//! - Returns appropriate exit code

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS, STDIN_ARG};
use crate::engine::{Checker, ExecutionEngine, ExecutionResult};
use crate::error::Pep257Error;
use crate::extract::{SourceLabel, SourceUnit};
use crate::output::{JsonlFormatter, TextFormatter};
use std::io::Read;
use std::path::PathBuf;

/// Options of one `pep257 check` run
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub paths: Vec<String>,
    pub format: OutputFormat,
    pub exit_zero: bool,
    pub jobs: Option<usize>,
    pub config_dir: Option<PathBuf>,
    pub color: ColorChoice,
}

/// Run the check command
///
/// # Returns
///
/// Exit code:
/// - 0: No violations, or `--exit-zero` was given
/// - 1: Violations were found
/// - 2: Configuration or I/O error, or a unit could not be parsed
pub fn run_check(options: &CheckOptions) -> i32 {
    match run_check_inner(options) {
        Ok(result) => {
            for (_, error) in result.failures() {
                eprintln!("Error: {}", error);
            }

            if result.files_failed() > 0 {
                EXIT_ERROR
            } else if result.violation_count() > 0 && !options.exit_zero {
                EXIT_VIOLATIONS
            } else {
                EXIT_SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Internal implementation of check command
fn run_check_inner(options: &CheckOptions) -> Result<ExecutionResult, Pep257Error> {
    let config = super::common::load_config(options.config_dir.as_deref())?;
    let checker = Checker::new(config);

    let result = match options.jobs {
        Some(jobs) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;
            pool.install(|| check_paths(&options.paths, &checker))?
        }
        None => check_paths(&options.paths, &checker)?,
    };

    tracing::debug!(
        "Checked {} units: {} violations, {} failed",
        result.files_checked,
        result.violation_count(),
        result.files_failed()
    );

    match options.format {
        OutputFormat::Text => {
            TextFormatter::new(options.color.for_stdout()).write_to_stdout(&result)?
        }
        OutputFormat::Jsonl => JsonlFormatter::new().write_to_stdout(&result),
    }

    Ok(result)
}

/// Checks every path argument, keeping argument order in the result
///
/// Standard input is read at most once, however often `-` is given.
fn check_paths(paths: &[String], checker: &Checker) -> Result<ExecutionResult, Pep257Error> {
    let engine = ExecutionEngine::new(checker.clone());
    let mut result = ExecutionResult::default();
    let mut stdin_read = false;

    for path in paths {
        if path == STDIN_ARG {
            if stdin_read {
                continue;
            }
            stdin_read = true;
            result.merge(check_stdin(&engine)?);
        } else {
            let files = super::common::discover_files(std::slice::from_ref(path), checker)?;
            if files.is_empty() {
                tracing::debug!("No files in scope under {}", path);
            }
            result.merge(engine.execute(files));
        }
    }

    Ok(result)
}

fn check_stdin(engine: &ExecutionEngine) -> Result<ExecutionResult, Pep257Error> {
    let mut bytes = Vec::new();
    std::io::stdin().read_to_end(&mut bytes)?;

    let result = match SourceUnit::from_bytes(SourceLabel::Stdin, bytes) {
        Ok(unit) => engine.execute_units(vec![unit]),
        Err(e) => ExecutionResult {
            reports: vec![crate::engine::FileReport {
                label: SourceLabel::Stdin,
                outcome: Err(e),
            }],
            files_checked: 1,
        },
    };
    Ok(result)
}
