//! Custom error types for till-audit
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for till-audit operations
#[derive(Error, Debug)]
pub enum AuditError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for ledger input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Ledger persistence errors (durable write failed, file unreadable)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Wrong admin secret on a bulk delete
    #[error("Admin secret mismatch: no records were deleted")]
    Unauthorized,

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Operation journal errors
    #[error("Journal error: {0}")]
    Journal(String),
}

impl AuditError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an authorization rejection
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for AuditError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AuditError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for till-audit operations
pub type AuditResult<T> = Result<T, AuditError>;
