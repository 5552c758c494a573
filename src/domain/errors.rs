//! Domain error types
//!
//! This module defines the error taxonomy for medrec. All errors are
//! domain-specific and don't expose driver or third-party types; callers
//! pattern-match on the variants instead of inspecting raw database codes.

use thiserror::Error;

/// Main medrec error type
///
/// This is the primary error type used throughout the application.
/// Operations distinguish three outcomes: the input was rejected before
/// touching storage (`InvalidInput`), the targeted row does not exist
/// (`NotFound`), or the storage call itself failed (`Storage`).
#[derive(Debug, Error)]
pub enum MedrecError {
    /// A field value violated a validation rule, a referenced foreign key
    /// does not exist, or the primary key is already taken on create
    #[error("Invalid {field}: {reason}")]
    InvalidInput {
        /// Name of the offending field
        field: String,
        /// Human-readable reason the value was rejected
        reason: String,
    },

    /// The operation targeted a key absent from storage
    #[error("{entity} with ID '{key}' not found")]
    NotFound {
        /// Entity kind, e.g. "Doctor"
        entity: &'static str,
        /// The key that was looked up
        key: String,
    },

    /// An underlying storage call failed
    ///
    /// Carries a human-readable summary plus the original cause, so the
    /// driver error stays reachable through `source()` without leaking its
    /// concrete type into the domain.
    #[error("Storage error: {detail}")]
    Storage {
        /// Human-readable summary of the failure
        detail: String,
        /// Original cause, when one exists
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl MedrecError {
    /// Creates an `InvalidInput` error for the given field
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        MedrecError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a `NotFound` error for the given entity kind and key
    pub fn not_found(entity: &'static str, key: impl std::fmt::Display) -> Self {
        MedrecError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    /// Creates a `Storage` error with a summary but no underlying cause
    pub fn storage(detail: impl Into<String>) -> Self {
        MedrecError::Storage {
            detail: detail.into(),
            source: None,
        }
    }

    /// Creates a `Storage` error wrapping the original cause
    pub fn storage_with(
        detail: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        MedrecError::Storage {
            detail: detail.into(),
            source: Some(source.into()),
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for MedrecError {
    fn from(err: std::io::Error) -> Self {
        MedrecError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for MedrecError {
    fn from(err: toml::de::Error) -> Self {
        MedrecError::Configuration(format!("TOML parse error: {err}"))
    }
}
