//! Error types for rolodex.
//!
//! This module defines all error types used throughout the rolodex crate.
//! Validation and lookup failures are expected control flow and carry the
//! messages shown to API clients; storage and configuration failures carry
//! context for diagnostics.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for rolodex operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Validation Errors ===
    /// A required field was empty (or whitespace-only) on create.
    #[error("All fields are required")]
    MissingFields,

    /// A contact with the same name (ignoring case) already exists.
    #[error("Contact already exists")]
    DuplicateContact {
        /// The conflicting name as submitted.
        name: String,
    },

    /// No contact matched the given name.
    #[error("Contact not found")]
    ContactNotFound {
        /// The name that was looked up.
        name: String,
    },

    // === Storage Errors ===
    /// Failed to open or create the record file.
    #[error("failed to open record file at {path}: {source}")]
    StoreOpen {
        /// Path to the record file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The record file exists but its header row is missing or mismatched.
    #[error("record file at {path} has a malformed header (expected `name,phone,email`)")]
    MalformedHeader {
        /// Path to the record file.
        path: PathBuf,
    },

    /// Reading or writing delimited records failed.
    #[error("record file error: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for rolodex operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a duplicate-contact error for the given name.
    #[must_use]
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateContact { name: name.into() }
    }

    /// Create a not-found error for the given name.
    #[must_use]
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ContactNotFound { name: name.into() }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error is a missing-field validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingFields)
    }

    /// Check if this error is a duplicate-name rejection.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateContact { .. })
    }

    /// Check if this error is a failed name lookup.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ContactNotFound { .. })
    }
}
