//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// The kind of model entity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Alternative,
    Criterion,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Alternative => "Alternative",
            EntityKind::Criterion => "Criterion",
        };
        write!(f, "{}", s)
    }
}

/// Failures raised by operations on an AHP model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AhpError {
    #[error("{entity} '{name}' not found")]
    NotFound { entity: EntityKind, name: String },
}

impl AhpError {
    /// Creates a not-found error for an alternative name.
    pub fn alternative_not_found(name: impl Into<String>) -> Self {
        AhpError::NotFound {
            entity: EntityKind::Alternative,
            name: name.into(),
        }
    }

    /// Creates a not-found error for a criterion name.
    pub fn criterion_not_found(name: impl Into<String>) -> Self {
        AhpError::NotFound {
            entity: EntityKind::Criterion,
            name: name.into(),
        }
    }

    /// Returns true if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AhpError::NotFound { .. })
    }
}
