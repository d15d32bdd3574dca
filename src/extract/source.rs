#![forbid(unsafe_code)]

//! Source units: the text of one file or stream plus its display label

use crate::error::CheckError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Display name attached to a source unit
///
/// Path labels are rendered exactly as the host presented them (including a
/// leading `./` or `.\`); stream input is rendered as `stdin`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceLabel {
    /// A file on disk
    Path(PathBuf),
    /// Content read from standard input
    Stdin,
}

impl SourceLabel {
    /// Marker rendered for stream input
    pub const STDIN_MARKER: &'static str = "stdin";

    /// Returns the path for file labels
    pub fn path(&self) -> Option<&Path> {
        match self {
            SourceLabel::Path(path) => Some(path),
            SourceLabel::Stdin => None,
        }
    }

    /// File name component for path labels
    pub fn file_name(&self) -> Option<&str> {
        self.path()
            .and_then(|path| path.file_name())
            .and_then(|name| name.to_str())
    }

    /// True when the label names a package's `__init__.py`
    pub fn is_package_init(&self) -> bool {
        self.file_name() == Some("__init__.py")
    }
}

impl fmt::Display for SourceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLabel::Path(path) => write!(f, "{}", path.display()),
            SourceLabel::Stdin => f.write_str(Self::STDIN_MARKER),
        }
    }
}

impl From<PathBuf> for SourceLabel {
    fn from(path: PathBuf) -> Self {
        SourceLabel::Path(path)
    }
}

impl From<&Path> for SourceLabel {
    fn from(path: &Path) -> Self {
        SourceLabel::Path(path.to_path_buf())
    }
}

/// The full text of one file or stream
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    label: SourceLabel,
    text: String,
}

impl SourceUnit {
    /// Creates a unit from already-decoded text
    pub fn new(label: SourceLabel, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }

    /// Decodes raw bytes as UTF-8, dropping a leading byte order mark
    ///
    /// # Errors
    ///
    /// Returns `CheckError::Encoding` if the bytes are not valid UTF-8.
    pub fn from_bytes(label: SourceLabel, bytes: Vec<u8>) -> Result<Self, CheckError> {
        let mut text = String::from_utf8(bytes).map_err(|e| CheckError::Encoding {
            label: label.to_string(),
            message: e.utf8_error().to_string(),
        })?;
        if text.starts_with('\u{feff}') {
            text.drain(..'\u{feff}'.len_utf8());
        }
        Ok(Self { label, text })
    }

    /// Reads and decodes a file, labelling it with the path as given
    ///
    /// # Errors
    ///
    /// Returns `CheckError::Io` if the file cannot be read and
    /// `CheckError::Encoding` if it is not valid UTF-8.
    pub fn read(path: &Path) -> Result<Self, CheckError> {
        let bytes = std::fs::read(path).map_err(|source| CheckError::Io {
            label: path.display().to_string(),
            source,
        })?;
        Self::from_bytes(SourceLabel::from(path), bytes)
    }

    pub fn label(&self) -> &SourceLabel {
        &self.label
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_display() {
        let label = SourceLabel::from(PathBuf::from("./pkg/mod.py"));
        assert_eq!(label.to_string(), "./pkg/mod.py");
        assert_eq!(SourceLabel::Stdin.to_string(), "stdin");
    }

    #[test]
    fn test_label_file_name() {
        let label = SourceLabel::from(PathBuf::from("./pkg/__init__.py"));
        assert_eq!(label.file_name(), Some("__init__.py"));
        assert!(label.is_package_init());
        assert_eq!(SourceLabel::Stdin.file_name(), None);
        assert!(!SourceLabel::Stdin.is_package_init());
    }

    #[test]
    fn test_from_bytes_strips_bom() {
        let mut bytes = "\u{feff}".as_bytes().to_vec();
        bytes.extend_from_slice(b"import os\n");
        let unit = SourceUnit::from_bytes(SourceLabel::Stdin, bytes).unwrap();
        assert_eq!(unit.text(), "import os\n");
    }

    #[test]
    fn test_from_bytes_rejects_invalid_utf8() {
        let result = SourceUnit::from_bytes(SourceLabel::Stdin, vec![0x66, 0xff, 0x0a]);
        assert!(matches!(result, Err(CheckError::Encoding { .. })));
    }

    #[test]
    fn test_read_missing_file() {
        let result = SourceUnit::read(Path::new("/nonexistent/definitely/missing.py"));
        assert!(matches!(result, Err(CheckError::Io { .. })));
    }
}
