#![forbid(unsafe_code)]

//! pep257: docstring convention checking for Python sources
//!
//! The library extracts the docstring of every module, class, function and
//! method in a Python source, runs the PEP 257 rule set over them and reports
//! violations as `label:line:column: CODE message`. Configuration is read
//! from `tox.ini`, `setup.cfg` or `.pep257`.
//!
//! ```no_run
//! use pep257::{Checker, ConfigResolver, SourceUnit};
//!
//! let config = ConfigResolver::new(".").resolve()?;
//! let checker = Checker::new(config);
//! let unit = SourceUnit::read("module.py".as_ref())?;
//! for violation in checker.check(&unit)? {
//!     println!("{}", pep257::output::render(unit.label(), &violation));
//! }
//! # Ok::<(), pep257::Pep257Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod output;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{CheckError, ConfigError, Pep257Error};

// Re-export the checking surface
pub use config::{ConfigResolver, RuleConfig};
pub use engine::Checker;
pub use extract::{DocstringExtractor, DocstringNode, SourceLabel, SourceUnit};
pub use rules::{RuleRegistry, Violation};
pub use types::{Code, OwnerKind, QuoteStyle};
