//! File discovery and traversal with gitignore support
//!
//! Walks each root with the ignore crate, descending only into directories
//! accepted by `match-dir` and yielding only files accepted by `match`.
//! Entries are visited in file name order so output is stable across runs.

use crate::engine::checker::Checker;
use crate::extract::SourceLabel;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during file walking
#[derive(Debug, Error)]
pub enum FileWalkerError {
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
}

/// Reason why a file was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// File name did not match `match`
    ExcludedByPattern,
    /// Entry is not a regular file
    NotAFile,
}

/// Result of file walking - either a file to check or a skipped entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkResult {
    /// File to be checked
    File(PathBuf),
    /// Entry that was skipped with reason
    Skipped { path: PathBuf, reason: SkipReason },
}

/// Iterator source over in-scope files below one root
pub struct FileWalker {
    walker: ignore::Walk,
    checker: Checker,
}

impl FileWalker {
    /// Creates a walker rooted at `root`
    ///
    /// Paths are yielded as `root` joined with the relative path, so walking
    /// `.` produces `./module.py`. A root that is itself a file is yielded
    /// when its name matches.
    pub fn new(root: &Path, checker: &Checker) -> Self {
        let dir_filter = checker.clone();
        let walker = WalkBuilder::new(root)
            .hidden(false) // hidden directories are handled by match-dir
            .git_ignore(true)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                entry.depth() == 0
                    || !entry.file_type().is_some_and(|ft| ft.is_dir())
                    || dir_filter.should_check_dir(entry.path())
            })
            .build();

        Self {
            walker,
            checker: checker.clone(),
        }
    }

    /// Walks the tree and returns an iterator over files in scope
    pub fn walk(self) -> impl Iterator<Item = Result<PathBuf, FileWalkerError>> {
        self.walk_with_skip_info()
            .filter_map(|result| match result {
                Ok(WalkResult::File(path)) => Some(Ok(path)),
                Ok(WalkResult::Skipped { .. }) => None,
                Err(e) => Some(Err(e)),
            })
    }

    /// Walks the tree and returns an iterator with skip information
    pub fn walk_with_skip_info(self) -> impl Iterator<Item = Result<WalkResult, FileWalkerError>> {
        let checker = self.checker;

        self.walker.map(move |result| {
            let entry = result?;
            let path = entry.path().to_path_buf();

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                return Ok(WalkResult::Skipped {
                    path,
                    reason: SkipReason::NotAFile,
                });
            }

            if !checker.should_check(&SourceLabel::Path(path.clone())) {
                tracing::trace!("Skipping {}: name does not match", path.display());
                return Ok(WalkResult::Skipped {
                    path,
                    reason: SkipReason::ExcludedByPattern,
                });
            }

            Ok(WalkResult::File(path))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MatchPattern, RuleConfig};
    use std::fs;
    use tempfile::TempDir;

    fn tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("pkg/sub")).unwrap();
        fs::create_dir_all(root.join(".hidden")).unwrap();
        fs::write(root.join("b.py"), "").unwrap();
        fs::write(root.join("a.py"), "").unwrap();
        fs::write(root.join("test_a.py"), "").unwrap();
        fs::write(root.join("notes.txt"), "").unwrap();
        fs::write(root.join("pkg/__init__.py"), "").unwrap();
        fs::write(root.join("pkg/sub/deep.py"), "").unwrap();
        fs::write(root.join(".hidden/secret.py"), "").unwrap();
        dir
    }

    fn names(dir: &TempDir, checker: &Checker) -> Vec<String> {
        FileWalker::new(dir.path(), checker)
            .walk()
            .map(|r| {
                r.unwrap()
                    .strip_prefix(dir.path())
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_walk_applies_default_patterns() {
        let dir = tree();
        assert_eq!(
            names(&dir, &Checker::default()),
            vec!["a.py", "b.py", "pkg/__init__.py", "pkg/sub/deep.py"]
        );
    }

    #[test]
    fn test_walk_with_custom_match() {
        let dir = tree();
        let config = RuleConfig::default()
            .with_match_pattern(MatchPattern::new("match", r"(?!a).*\.py").unwrap());
        assert_eq!(
            names(&dir, &Checker::new(config)),
            vec!["b.py", "pkg/__init__.py", "pkg/sub/deep.py", "test_a.py"]
        );
    }

    #[test]
    fn test_skip_info() {
        let dir = tree();
        let skipped: Vec<(String, SkipReason)> = FileWalker::new(dir.path(), &Checker::default())
            .walk_with_skip_info()
            .filter_map(|r| match r.unwrap() {
                WalkResult::Skipped { path, reason } => Some((
                    path.file_name().unwrap().to_string_lossy().into_owned(),
                    reason,
                )),
                WalkResult::File(_) => None,
            })
            .collect();

        assert!(skipped.contains(&("notes.txt".to_string(), SkipReason::ExcludedByPattern)));
        assert!(skipped.contains(&("test_a.py".to_string(), SkipReason::ExcludedByPattern)));
        assert!(skipped.contains(&("pkg".to_string(), SkipReason::NotAFile)));
        assert!(!skipped.iter().any(|(name, _)| name == "secret.py"));
    }

    #[test]
    fn test_file_root() {
        let dir = tree();
        let files: Vec<PathBuf> = FileWalker::new(&dir.path().join("a.py"), &Checker::default())
            .walk()
            .map(Result::unwrap)
            .collect();
        assert_eq!(files, vec![dir.path().join("a.py")]);
    }

    #[test]
    fn test_missing_root() {
        let dir = TempDir::new().unwrap();
        let results: Vec<_> = FileWalker::new(&dir.path().join("absent"), &Checker::default())
            .walk()
            .collect();
        assert_eq!(results.len(), 1);
        assert!(results[0].is_err());
    }
}
