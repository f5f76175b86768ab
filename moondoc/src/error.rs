//! Error types and exit codes for the moondoc CLI.

use thiserror::Error;

/// Exit codes for moondoc CLI operations, following Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Content error (invalid document source, render failure)
    pub const CONTENT_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Lint findings at error severity
    pub const LINT_ERROR: i32 = 4;

    /// Usage error (invalid arguments)
    pub const USAGE_ERROR: i32 = 64;
}

/// Top-level error type for moondoc operations.
#[derive(Debug, Error)]
pub enum MoondocError {
    /// Document source loading or parsing error.
    #[error(transparent)]
    Document(#[from] moondoc_core::error::DocumentError),

    /// Rendering or registry error.
    #[error(transparent)]
    Docs(#[from] moondoc_docs::error::DocsError),

    /// A checked page has lint findings at error severity.
    #[error("{errors} lint error(s) found")]
    Lint {
        /// Number of error-severity findings.
        errors: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MoondocError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Document(_) | Self::Docs(_) | Self::Json(_) => ExitCode::CONTENT_ERROR,
            Self::Lint { .. } => ExitCode::LINT_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}
