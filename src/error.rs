//! Error types for dbflavor operations.
//!
//! This module defines [`FlavorError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A version string that cannot be parsed is the only error a capability
//!   query can return; unknown flavors and features answer `false` instead
//! - Filesystem problems during detection never become errors; the affected
//!   element counts as absent
//! - Catalog and config errors are reported when they are loaded
//! - Use `anyhow::Error` (via `FlavorError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::version::VersionParseError;

/// Core error type for dbflavor operations.
#[derive(Debug, Error)]
pub enum FlavorError {
    /// A version string is not well-formed dotted decimal.
    #[error("Invalid version: {0}")]
    VersionParse(#[from] VersionParseError),

    /// The catalog document could not be parsed.
    #[error("Failed to parse catalog {source_name}: {message}")]
    CatalogParseError {
        source_name: String,
        message: String,
    },

    /// A flavor extends or inherits from a flavor not declared before it.
    #[error("Flavor '{flavor}' refers to unknown base flavor '{base}'")]
    UnknownBaseFlavor { flavor: String, base: String },

    /// The same flavor is declared twice in one catalog document.
    #[error("Flavor '{flavor}' is declared more than once")]
    DuplicateFlavor { flavor: String },

    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for dbflavor operations.
pub type Result<T> = std::result::Result<T, FlavorError>;
