//! Error types for MDX rendering and lint.

use thiserror::Error;

/// Errors that can occur while rendering or checking pages.
#[derive(Debug, Error)]
pub enum DocsError {
    /// The document cannot be rendered as well-formed markup.
    #[error("render error: {0}")]
    Render(String),

    /// Site registry parsing or lookup failed.
    #[error("registry error: {0}")]
    Registry(String),

    /// Document loading failed.
    #[error(transparent)]
    Document(#[from] moondoc_core::error::DocumentError),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
