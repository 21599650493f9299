//! Error types for civic-audit operations.
//!
//! This module defines [`CivicAuditError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Data-quality problems are never errors; checks report them as violations
//! - Use `CivicAuditError` for contract violations and environment failures
//! - Use `anyhow::Error` (via `CivicAuditError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for civic-audit operations.
#[derive(Debug, Error)]
pub enum CivicAuditError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Configuration parsed but holds values that cannot be used.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Input is not a bundle at all (wrong top-level shape).
    #[error("Invalid bundle: {message}")]
    BundleShape { message: String },

    /// An API request failed in a way the caller cannot recover from.
    #[error("API request to '{endpoint}' failed: {message}")]
    Api { endpoint: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for civic-audit operations.
pub type Result<T> = std::result::Result<T, CivicAuditError>;
