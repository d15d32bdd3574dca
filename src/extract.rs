#![forbid(unsafe_code)]

//! Source units and docstring extraction

mod extractor;
mod node;
mod source;

pub use extractor::DocstringExtractor;
pub use node::{Docstring, DocstringNode};
pub use source::{SourceLabel, SourceUnit};
