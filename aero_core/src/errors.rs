//! # Error Types
//!
//! Structured error types for aero_core. Only two kinds of failure are hard
//! errors: malformed solver input and a singular lifting-line system. Every
//! other formula in the crate returns NaN or Inf for undefined inputs so that
//! callers can sweep it across a chart.
//!
//! ## Example
//!
//! ```rust
//! use aero_core::errors::{AeroError, AeroResult};
//!
//! fn validate_halfspan(halfspan_m: f64) -> AeroResult<()> {
//!     if halfspan_m <= 0.0 {
//!         return Err(AeroError::invalid_input(
//!             "halfspan_m",
//!             halfspan_m.to_string(),
//!             "Halfspan must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_halfspan(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for aero_core operations
pub type AeroResult<T> = Result<T, AeroError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum AeroError {
    /// An input value is invalid (out of range, wrong length, outside the domain)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The lifting-line matrix is not invertible to working precision
    #[error("Singular system ({size}x{size}): {reason}")]
    SingularSystem { size: usize, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl AeroError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        AeroError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a SingularSystem error
    pub fn singular_system(size: usize, reason: impl Into<String>) -> Self {
        AeroError::SingularSystem {
            size,
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        AeroError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Whether the error was caused by a degenerate station discretization
    pub fn is_singular(&self) -> bool {
        matches!(self, AeroError::SingularSystem { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            AeroError::InvalidInput { .. } => "INVALID_INPUT",
            AeroError::SingularSystem { .. } => "SINGULAR_SYSTEM",
            AeroError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for AeroError {
    fn from(err: serde_json::Error) -> Self {
        AeroError::serialization(err.to_string())
    }
}
