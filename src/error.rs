//! Custom error types for Registro CLI
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Registro CLI operations
#[derive(Error, Debug)]
pub enum RegistroError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for registration input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export was attempted on an empty record set
    #[error("No records to export")]
    EmptyExport,

    /// Export errors (serialization or file handoff)
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl RegistroError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is the empty-export error
    pub fn is_empty_export(&self) -> bool {
        matches!(self, Self::EmptyExport)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for RegistroError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RegistroError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Registro CLI operations
pub type RegistroResult<T> = Result<T, RegistroError>;
