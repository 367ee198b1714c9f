//! Error types for tsc-lint operations.
//!
//! This module defines [`TscLintError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `TscLintError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `TscLintError::Other`) for unexpected errors
//! - Malformed compiler diagnostics are never errors; the bridge skips them

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tsc-lint operations.
#[derive(Debug, Error)]
pub enum TscLintError {
    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A rule was configured with options it does not accept.
    #[error("Invalid options for rule '{rule}': {message}")]
    InvalidRuleOptions { rule: String, message: String },

    /// Failed to read or parse a program snapshot.
    #[error("Failed to load program snapshot at {path}: {message}")]
    SnapshotError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for tsc-lint operations.
pub type Result<T> = std::result::Result<T, TscLintError>;
