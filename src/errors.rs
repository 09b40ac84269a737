//! Shared error types for hdbmatch
//!
//! An empty shortlist is not an error, and neither is a malformed number in a
//! catalog row (it coerces to zero). Errors are reserved for sources that cannot
//! be read at all, configuration that cannot be honoured, and validation
//! failures at the library boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for hdbmatch operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fatal CSV errors (unreadable header, broken stream)
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML configuration parse errors
    #[error("Failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors, accumulated so the caller sees every problem at once
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

impl Error {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error from a single message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(vec![message.into()])
    }

    /// Whether the user can fix this error by changing inputs or configuration
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::Validation(_) | Self::Toml(_) | Self::Json(_)
        )
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
