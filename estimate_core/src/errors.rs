//! # Error Types
//!
//! Structured error types for estimate_core.
//!
//! The estimation engine itself never fails: bad numbers degrade to zero and
//! unknown calculators produce an empty result. These errors cover the
//! surrounding operations that genuinely can fail, such as reading a catalog
//! file, parsing a constants override, or resolving a calculator identifier
//! strictly.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::errors::{EstimateError, EstimateResult};
//!
//! fn require_positive(field: &str, value: f64) -> EstimateResult<f64> {
//!     if value <= 0.0 {
//!         return Err(EstimateError::invalid_input(field, value.to_string(), "must be positive"));
//!     }
//!     Ok(value)
//! }
//!
//! assert!(require_positive("width", -1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for estimate_core operations
pub type EstimateResult<T> = Result<T, EstimateError>;

/// Structured error type for the fallible parts of the crate.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EstimateError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Calculator identifier is not in the registry
    #[error("Unknown calculator: {id}")]
    UnknownCalculator { id: String },

    /// Niche name is not one of the known specialties
    #[error("Unknown niche: {name}")]
    UnknownNiche { name: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON or TOML serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Catalog file schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl EstimateError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EstimateError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownCalculator error
    pub fn unknown_calculator(id: impl Into<String>) -> Self {
        EstimateError::UnknownCalculator { id: id.into() }
    }

    /// Create an UnknownNiche error
    pub fn unknown_niche(name: impl Into<String>) -> Self {
        EstimateError::UnknownNiche { name: name.into() }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EstimateError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        EstimateError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EstimateError::InvalidInput { .. } => "INVALID_INPUT",
            EstimateError::UnknownCalculator { .. } => "UNKNOWN_CALCULATOR",
            EstimateError::UnknownNiche { .. } => "UNKNOWN_NICHE",
            EstimateError::FileError { .. } => "FILE_ERROR",
            EstimateError::SerializationError { .. } => "SERIALIZATION_ERROR",
            EstimateError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}
