//! Error types for outline extraction
//!
//! Only catastrophic failures are errors here. Syntax errors in the source are
//! recovered by the parser and never surface as an `OutlineError`.

use std::path::PathBuf;
use thiserror::Error as ThisError;

use crate::outline::Dialect;

/// Result type alias for outline operations
pub type Result<T> = std::result::Result<T, OutlineError>;

/// Error types for outline operations
#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum OutlineError {
    /// The grammar could not be loaded into the parser
    #[error("Failed to set language: {0}")]
    Language(String),

    /// The parser produced no tree at all
    #[error("Failed to parse {dialect:?} content")]
    Parse {
        /// Dialect the parser was configured with
        dialect: Dialect,
    },

    /// No dialect matches the file extension
    #[error("Unsupported file: {path}")]
    UnsupportedFile {
        /// The file path
        path: PathBuf,
    },

    /// Reading a source file failed
    #[error("IO error reading {path}: {source}")]
    Io {
        /// The file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}
