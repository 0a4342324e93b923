//! Unified error types for all layers of the user manager.

use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for Deyal.
///
/// The first four variants are the user manager's own failure modes; the rest
/// cover the store, configuration, and internal faults that can surface
/// through the same call paths.
#[derive(Error, Debug)]
pub enum DeyalError {
    // ============ User Manager Errors ============
    /// No resource with the given id.
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// No user registered with the given email.
    #[error("No user registered with email: {0}")]
    EmailNotFound(String),

    /// Email failed syntax validation.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Email is already registered.
    #[error("Email already registered: {0}")]
    EmailExists(String),

    // ============ Store Errors ============
    /// A save lost an optimistic-concurrency race.
    #[error("Concurrent modification of {id}: expected version {expected}, found {actual}")]
    ConcurrentModification { id: String, expected: u64, actual: u64 },

    /// Conflict error (e.g., duplicate id on insert)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    // ============ Infrastructure Errors ============
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DeyalError {
    /// Returns the HTTP status code a calling layer should map this error to.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } | Self::EmailNotFound(_) => 404,
            Self::InvalidEmail(_) | Self::Validation(_) => 400,
            Self::EmailExists(_) | Self::Conflict(_) | Self::ConcurrentModification { .. } => 409,
            Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::EmailNotFound(_) => "EMAIL_NOT_FOUND",
            Self::InvalidEmail(_) => "INVALID_EMAIL",
            Self::EmailExists(_) => "EMAIL_EXISTS",
            Self::ConcurrentModification { .. } => "CONCURRENT_MODIFICATION",
            Self::Conflict(_) => "CONFLICT",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if the caller may retry the whole operation.
    ///
    /// Only a lost version race qualifies; the user manager itself never
    /// retries.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::ConcurrentModification { .. })
    }
}

impl From<serde_json::Error> for DeyalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}
