//! Test utilities for pep257 integration tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Module with a known set of docstring problems
pub const SAMPLE_MODULE: &str = r#"#!/usr/bin/env python
import sys


def error(message, code=1):
    '''Prints error message to stderr and exits with a status of 1.'''
    if message:
        print('ERROR: {0}'.format(message))
    else:
        print()
    sys.exit(code)


class Test(object):
    '''Does nothing.'''
    pass
"#;

/// Diagnostics for `SAMPLE_MODULE`, without the `label:` prefix
pub const SAMPLE_DIAGNOSTICS: &[&str] = &[
    "1:1: D100 Missing docstring in public module",
    "5:1: D300 Use \"\"\"triple double quotes\"\"\" (found '''-quotes)",
    "5:1: D401 First line should be in imperative mood ('Print', not 'Prints')",
    "14:1: D203 1 blank line required before class docstring (found 0)",
    "14:1: D204 1 blank line required after class docstring (found 0)",
    "14:1: D300 Use \"\"\"triple double quotes\"\"\" (found '''-quotes)",
];

/// Expected text output for `SAMPLE_MODULE` under `label`
pub fn sample_output(label: &str) -> String {
    SAMPLE_DIAGNOSTICS
        .iter()
        .map(|line| format!("{}:{}\n", label, line))
        .collect()
}

/// Config files that each exclude `sample*` from discovery
pub const EXCLUDING_CONFIGS: &[(&str, &str)] = &[
    ("tox.ini", "[flake8]\nmatch = (?!sample).*\\.py\n"),
    ("tox.ini", "[pep257]\nmatch = (?!sample).*\\.py\n"),
    ("setup.cfg", "[pep257]\nmatch = \"(?!sample).*\\.py\"\n"),
    (".pep257", "[pep257]\nmatch = (?!sample).*\\.py\n"),
];

/// Writes `SAMPLE_MODULE` as `sample_module.py` into `dir`
pub fn write_sample(dir: &Path) {
    fs::write(dir.join("sample_module.py"), SAMPLE_MODULE).unwrap();
}
