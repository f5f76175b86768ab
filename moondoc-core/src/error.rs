//! Error types shared across the moondoc crates.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or deserializing a document source file.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// YAML deserialization failed with file context.
    #[error("parse error in {path}: {message}")]
    Parse {
        /// Path to the document source file.
        path: PathBuf,
        /// Error message from the parser.
        message: String,
    },

    /// YAML parsing error without file context.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O error reading a source file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
