//! Error types for pep257
//!
//! This module defines the error types used throughout pep257, following
//! a hierarchical structure with specific error variants for different
//! error categories.

use crate::config::ini::IniError;
use std::path::PathBuf;

/// Configuration-related errors
///
/// Any of these aborts the run: without a valid configuration the set of
/// files in scope cannot be determined.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file is not valid INI
    #[error("Invalid configuration syntax in {path}: {source}")]
    Syntax {
        path: PathBuf,
        #[source]
        source: IniError,
    },

    /// A `match` or `match-dir` value is not a valid regular expression
    #[error("Invalid regular expression for '{key}' ({pattern}): {message}")]
    InvalidPattern {
        key: String,
        pattern: String,
        message: String,
    },

    /// The configuration file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that abort checking of a single source unit
///
/// Other units in the same run are unaffected.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The source could not be parsed as Python
    #[error("{label}:{line}:{column}: syntax error, docstrings were not checked")]
    Syntax {
        label: String,
        line: u32,
        column: u32,
    },

    /// The source bytes are not valid UTF-8
    #[error("{label}: source is not valid UTF-8: {message}")]
    Encoding { label: String, message: String },

    /// The Python grammar could not be loaded into the parser
    #[error("Failed to load the Python grammar: {0}")]
    Grammar(String),

    /// The source could not be read
    #[error("Failed to read {label}: {source}")]
    Io {
        label: String,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error type for pep257
#[derive(Debug, thiserror::Error)]
pub enum Pep257Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Checking a source unit failed
    #[error("{0}")]
    Check(#[from] CheckError),

    /// File discovery failed
    #[error("File walker error: {0}")]
    FileWalker(#[from] crate::engine::file_walker::FileWalkerError),

    /// The worker pool could not be built
    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_display_carries_position() {
        let err = CheckError::Syntax {
            label: "./broken.py".to_string(),
            line: 3,
            column: 7,
        };
        assert_eq!(
            err.to_string(),
            "./broken.py:3:7: syntax error, docstrings were not checked"
        );
    }

    #[test]
    fn test_config_error_converts_into_top_level() {
        let err: Pep257Error = ConfigError::InvalidPattern {
            key: "match".to_string(),
            pattern: "(".to_string(),
            message: "unclosed group".to_string(),
        }
        .into();
        assert!(matches!(err, Pep257Error::Config(_)));
        assert!(err.to_string().contains("Invalid regular expression for 'match'"));
    }
}
