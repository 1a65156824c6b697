//! # Error Types
//!
//! Structured error types for flexure_core. Every analysis entry point
//! validates its input first and fails fast with one of these variants
//! instead of returning reactions that violate equilibrium.
//!
//! ## Example
//!
//! ```rust
//! use flexure_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length_m: f64) -> CalcResult<()> {
//!     if length_m <= 0.0 {
//!         return Err(CalcError::invalid_geometry(
//!             "length_m",
//!             length_m.to_string(),
//!             "Beam length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_length(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for flexure_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for beam analysis.
///
/// Variants carry the offending field and value so a presentation layer can
/// turn them into user-facing messages without parsing strings.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Beam length is not positive, or a load sits outside the open span (0, L)
    #[error("Invalid geometry for '{field}': {value} - {reason}")]
    InvalidGeometry {
        field: String,
        value: String,
        reason: String,
    },

    /// Multiple-load case with no loads or more than the supported maximum
    #[error("Invalid load count: {count} (expected 1 to {max})")]
    InvalidLoadCount { count: usize, max: usize },

    /// Load magnitude or intensity is not a finite number
    #[error("Invalid magnitude for '{field}': {value} - {reason}")]
    InvalidMagnitude {
        field: String,
        value: String,
        reason: String,
    },

    /// Analysis settings are out of range (e.g. fewer than two samples)
    #[error("Invalid setting '{field}': {value} - {reason}")]
    InvalidSettings {
        field: String,
        value: String,
        reason: String,
    },

    /// Finite inputs whose products overflow to infinity or NaN
    #[error("Non-finite result for '{quantity}': {value} - inputs are too large to analyse")]
    NonFiniteResult { quantity: String, value: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidGeometry error
    pub fn invalid_geometry(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidGeometry {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidLoadCount error
    pub fn invalid_load_count(count: usize, max: usize) -> Self {
        CalcError::InvalidLoadCount { count, max }
    }

    /// Create an InvalidMagnitude error
    pub fn invalid_magnitude(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidMagnitude {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidSettings error
    pub fn invalid_settings(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidSettings {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NonFiniteResult error
    pub fn non_finite_result(quantity: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::NonFiniteResult {
            quantity: quantity.into(),
            value: value.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::InvalidLoadCount { .. } => "INVALID_LOAD_COUNT",
            CalcError::InvalidMagnitude { .. } => "INVALID_MAGNITUDE",
            CalcError::InvalidSettings { .. } => "INVALID_SETTINGS",
            CalcError::NonFiniteResult { .. } => "NON_FINITE_RESULT",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}
