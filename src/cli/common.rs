//! Common helper functions shared across CLI commands
//!
//! Configuration loading and file discovery, so `check` and `list` resolve
//! settings the same way.

use crate::config::{ConfigResolver, RuleConfig};
use crate::engine::{Checker, FileWalker, FileWalkerError};
use std::path::{Path, PathBuf};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Path argument that stands for standard input
pub const STDIN_ARG: &str = "-";

/// Resolve the configuration from `config_dir`, or the current directory
///
/// # Errors
///
/// Returns `ConfigError` when a config file cannot be read, is not valid INI,
/// or holds an invalid `match`/`match-dir` pattern.
pub(crate) fn load_config(
    config_dir: Option<&Path>,
) -> Result<RuleConfig, crate::error::ConfigError> {
    let dir = config_dir.unwrap_or_else(|| Path::new("."));
    ConfigResolver::new(dir).resolve()
}

/// Discover files to check under every path argument
///
/// Each path is walked with `FileWalker`, so the checker's `match` and
/// `match-dir` patterns apply to explicitly named files as well.
///
/// # Errors
///
/// Returns `FileWalkerError` if a path cannot be walked.
pub(crate) fn discover_files(
    paths: &[String],
    checker: &Checker,
) -> Result<Vec<PathBuf>, FileWalkerError> {
    let mut all_files = Vec::new();

    for path_str in paths {
        let walker = FileWalker::new(Path::new(path_str), checker);
        for result in walker.walk() {
            all_files.push(result?);
        }
    }

    Ok(all_files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_files_with_empty_paths() {
        let files = discover_files(&[], &Checker::default()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_discover_files_across_roots() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();
        fs::create_dir(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("a/one.py"), "").unwrap();
        fs::write(dir.path().join("b/two.py"), "").unwrap();

        let paths = vec![
            dir.path().join("b").to_string_lossy().into_owned(),
            dir.path().join("a").to_string_lossy().into_owned(),
        ];
        let files = discover_files(&paths, &Checker::default()).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("b/two.py"), dir.path().join("a/one.py")]
        );
    }

    #[test]
    fn test_load_config_from_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".pep257"), "[pep257]\nignore = D203\n").unwrap();

        let config = load_config(Some(dir.path())).unwrap();
        assert!(!config.is_enabled(crate::types::Code::D203));
        assert!(config.is_enabled(crate::types::Code::D204));
    }

    #[test]
    fn test_load_config_invalid_pattern() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("setup.cfg"), "[pep257]\nmatch = (\n").unwrap();
        assert!(load_config(Some(dir.path())).is_err());
    }
}
