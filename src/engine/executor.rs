#![forbid(unsafe_code)]

//! Parallel execution engine for checking many files
//!
//! This module provides the ExecutionEngine which reads and checks
//! discovered files in parallel using rayon.

use crate::engine::checker::Checker;
use crate::error::CheckError;
use crate::extract::{SourceLabel, SourceUnit};
use crate::rules::Violation;
use rayon::prelude::*;
use std::path::PathBuf;

/// Outcome of checking one unit
#[derive(Debug)]
pub struct FileReport {
    /// Label the unit was read under
    pub label: SourceLabel,
    /// Sorted violations, or the reason the unit could not be checked
    pub outcome: Result<Vec<Violation>, CheckError>,
}

impl FileReport {
    /// Violations of this unit; empty when checking failed
    pub fn violations(&self) -> &[Violation] {
        match &self.outcome {
            Ok(violations) => violations,
            Err(_) => &[],
        }
    }
}

/// Result of checking all files
#[derive(Debug, Default)]
pub struct ExecutionResult {
    /// One report per unit, in input order
    pub reports: Vec<FileReport>,
    /// Number of units checked
    pub files_checked: usize,
}

impl ExecutionResult {
    /// Total violations across all units
    pub fn violation_count(&self) -> usize {
        self.reports.iter().map(|r| r.violations().len()).sum()
    }

    /// Reports of units that could not be checked
    pub fn failures(&self) -> impl Iterator<Item = (&SourceLabel, &CheckError)> {
        self.reports.iter().filter_map(|r| match &r.outcome {
            Ok(_) => None,
            Err(e) => Some((&r.label, e)),
        })
    }

    /// Number of units that could not be checked
    pub fn files_failed(&self) -> usize {
        self.failures().count()
    }

    /// Appends the reports of a later run, keeping their order
    pub fn merge(&mut self, other: ExecutionResult) {
        self.files_checked += other.files_checked;
        self.reports.extend(other.reports);
    }
}

/// Execution engine that checks units in parallel
///
/// Each unit is read, parsed and checked independently; a failure in one
/// unit is recorded in its report and does not affect the others. Runs on
/// the current rayon pool.
pub struct ExecutionEngine {
    checker: Checker,
}

impl ExecutionEngine {
    pub fn new(checker: Checker) -> Self {
        Self { checker }
    }

    pub fn checker(&self) -> &Checker {
        &self.checker
    }

    /// Reads and checks every file
    ///
    /// Scope filtering is the caller's job; every path given is checked.
    pub fn execute(&self, files: Vec<PathBuf>) -> ExecutionResult {
        let reports: Vec<FileReport> = files
            .into_par_iter()
            .map(|path| {
                let outcome = SourceUnit::read(&path).and_then(|unit| self.checker.check(&unit));
                FileReport {
                    label: SourceLabel::Path(path),
                    outcome,
                }
            })
            .collect();

        Self::finish(reports)
    }

    /// Checks units that are already in memory, such as standard input
    pub fn execute_units(&self, units: Vec<SourceUnit>) -> ExecutionResult {
        let reports: Vec<FileReport> = units
            .into_par_iter()
            .map(|unit| FileReport {
                outcome: self.checker.check(&unit),
                label: unit.label().clone(),
            })
            .collect();

        Self::finish(reports)
    }

    fn finish(reports: Vec<FileReport>) -> ExecutionResult {
        for report in &reports {
            if let Err(e) = &report.outcome {
                tracing::debug!("{} could not be checked: {}", report.label, e);
            }
        }
        ExecutionResult {
            files_checked: reports.len(),
            reports,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_execute_reads_and_checks_files() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.py");
        let bad = dir.path().join("bad.py");
        fs::write(&good, "\"\"\"Good module.\"\"\"\n").unwrap();
        fs::write(&bad, "def f(:\n").unwrap();

        let engine = ExecutionEngine::new(Checker::default());
        let result = engine.execute(vec![good.clone(), bad.clone()]);

        assert_eq!(result.files_checked, 2);
        assert_eq!(result.reports[0].label, SourceLabel::Path(good));
        assert!(result.reports[0].outcome.as_ref().unwrap().is_empty());
        assert_eq!(result.files_failed(), 1);
        assert_eq!(result.violation_count(), 0);

        let (label, error) = result.failures().next().unwrap();
        assert_eq!(label, &SourceLabel::Path(bad));
        assert!(matches!(error, CheckError::Syntax { .. }));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let engine = ExecutionEngine::new(Checker::default());
        let result = engine.execute(vec![dir.path().join("missing.py")]);
        assert!(matches!(
            result.reports[0].outcome,
            Err(CheckError::Io { .. })
        ));
    }

    #[test]
    fn test_execute_units_keeps_order() {
        let engine = ExecutionEngine::new(Checker::default());
        let units = (0..20)
            .map(|i| SourceUnit::new(PathBuf::from(format!("m{i}.py")).into(), "x = 1\n"))
            .collect();
        let result = engine.execute_units(units);

        assert_eq!(result.files_checked, 20);
        assert_eq!(result.violation_count(), 20);
        for (i, report) in result.reports.iter().enumerate() {
            assert_eq!(report.label.to_string(), format!("m{i}.py"));
        }
    }

    #[test]
    fn test_merge_appends_reports() {
        let engine = ExecutionEngine::new(Checker::default());
        let mut result =
            engine.execute_units(vec![SourceUnit::new(PathBuf::from("a.py").into(), "x = 1\n")]);
        result.merge(engine.execute_units(vec![SourceUnit::new(SourceLabel::Stdin, "x = 1\n")]));

        assert_eq!(result.files_checked, 2);
        assert_eq!(result.reports[1].label, SourceLabel::Stdin);
        assert_eq!(result.violation_count(), 2);
    }

    #[test]
    fn test_empty_input() {
        let engine = ExecutionEngine::new(Checker::default());
        let result = engine.execute(vec![]);
        assert_eq!(result.files_checked, 0);
        assert!(result.reports.is_empty());
    }
}
