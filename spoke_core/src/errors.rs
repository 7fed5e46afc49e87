//! # Error Types
//!
//! Structured error types for spoke_core. Validation failures carry enough
//! context (field, offending value, reason) for the calling service to show
//! the builder an actionable message, and every variant serializes to JSON
//! so it can be forwarded unchanged.
//!
//! ## Example
//!
//! ```rust
//! use spoke_core::errors::{GeometryError, GeometryResult};
//!
//! fn validate_erd(erd: f64) -> GeometryResult<()> {
//!     if !(erd > 0.0) {
//!         return Err(GeometryError::invalid_dimension(
//!             "erd",
//!             erd,
//!             "ERD must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! let err = validate_erd(-600.0).unwrap_err();
//! assert_eq!(err.error_code(), "INVALID_DIMENSION");
//! assert!(err.is_input_error());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::Side;

/// Result type alias for spoke_core operations
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Structured error type for wheel geometry operations.
///
/// The first three variants are input validation failures and are raised
/// before any computation starts. `NonFiniteResult` signals a defect: the
/// inputs passed validation but the triangle was degenerate.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum GeometryError {
    /// A length is non-positive, negative where it must not be, or not finite
    #[error("Invalid dimension '{field}': {value} - {reason}")]
    InvalidDimension {
        field: String,
        value: String,
        reason: String,
    },

    /// Spoke count is odd, zero, or too small to lace two sides
    #[error("Invalid spoke count {spoke_count}: {reason}")]
    InvalidSpokeCount { spoke_count: u32, reason: String },

    /// Cross number skips more holes than the flange has
    #[error(
        "Invalid cross pattern on {side} side: {cross_pattern} crosses needs fewer than {holes_per_side} holes per flange"
    )]
    InvalidCrossPattern {
        side: Side,
        cross_pattern: u32,
        holes_per_side: u32,
    },

    /// A computed length or angle came out NaN or infinite
    #[error("Non-finite result: {quantity} on {side} side")]
    NonFiniteResult { side: Side, quantity: String },
}

impl GeometryError {
    /// Create an InvalidDimension error
    pub fn invalid_dimension(field: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        GeometryError::InvalidDimension {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidSpokeCount error
    pub fn invalid_spoke_count(spoke_count: u32, reason: impl Into<String>) -> Self {
        GeometryError::InvalidSpokeCount {
            spoke_count,
            reason: reason.into(),
        }
    }

    /// Create an InvalidCrossPattern error
    pub fn invalid_cross_pattern(side: Side, cross_pattern: u32, holes_per_side: u32) -> Self {
        GeometryError::InvalidCrossPattern {
            side,
            cross_pattern,
            holes_per_side,
        }
    }

    /// Create a NonFiniteResult error
    pub fn non_finite(side: Side, quantity: impl Into<String>) -> Self {
        GeometryError::NonFiniteResult {
            side,
            quantity: quantity.into(),
        }
    }

    /// True for validation failures the builder can fix by changing input.
    ///
    /// `NonFiniteResult` is an internal defect and returns false.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, GeometryError::NonFiniteResult { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            GeometryError::InvalidDimension { .. } => "INVALID_DIMENSION",
            GeometryError::InvalidSpokeCount { .. } => "INVALID_SPOKE_COUNT",
            GeometryError::InvalidCrossPattern { .. } => "INVALID_CROSS_PATTERN",
            GeometryError::NonFiniteResult { .. } => "NON_FINITE_RESULT",
        }
    }
}
