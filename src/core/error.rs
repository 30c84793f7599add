//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`DecoratorError`] which covers every fallible step behind the
//! decoration boundary: decoding virtual-resource identifiers, repository lookups
//! and configuration loading. It uses `thiserror` for ergonomic error definitions
//! and includes constructors for the common failure scenarios.
//!
//! # Public API
//! - [`DecoratorError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, DecoratorError>`
//!
//! # Error Categories
//! - **Malformed input**: bad scheme, unknown resource kind, undecodable payload
//! - **Lookup failures**: repository not found, git2 errors, failed background lookups
//! - **Configuration**: unreadable or unparsable config files
//!
//! None of these escape [`crate::core::router::DecorationResolver::resolve`]; there they
//! all collapse into "no decoration".

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-decorator
#[derive(Error, Debug)]
pub enum DecoratorError {
    // Repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("Invalid UTF-8 path in repository")]
    InvalidUtf8Path,

    #[error("Repository lookup task failed: {0}")]
    LookupTask(#[from] tokio::task::JoinError),

    #[error("Invalidation handlers need a running tokio runtime: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),

    // Virtual resource errors
    #[error("Invalid resource identifier: {0}")]
    InvalidUri(#[from] url::ParseError),

    #[error("Invalid percent-encoding in resource identifier: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    #[error("Unsupported resource scheme '{scheme}'")]
    UnsupportedScheme { scheme: String },

    #[error("Resource identifier has no authority")]
    MissingAuthority,

    #[error("Resource identifier has no payload")]
    MissingPayload,

    #[error("Resource payload has no repository path")]
    MissingRepositoryPath,

    #[error("Invalid status code: '{input}'. Expected a single character such as M, A or ?")]
    InvalidStatusCode { input: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration errors
    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using DecoratorError
pub type Result<T> = std::result::Result<T, DecoratorError>;

impl DecoratorError {
    /// Create an unsupported scheme error
    pub fn unsupported_scheme(scheme: impl Into<String>) -> Self {
        Self::UnsupportedScheme {
            scheme: scheme.into(),
        }
    }

    /// Create an invalid status code error
    pub fn invalid_status_code(input: impl Into<String>) -> Self {
        Self::InvalidStatusCode {
            input: input.into(),
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config write failed error
    pub fn config_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigWriteFailed {
            path: path.into(),
            source,
        }
    }
}
