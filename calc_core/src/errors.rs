//! # Error Types
//!
//! Structured error types for calc_core. Every failure in this crate is a
//! deterministic consequence of the input, so there is exactly one variant:
//! [`CalcError::InvalidInput`]. The [`InputErrorKind`] tells callers which
//! precondition failed, and `reason` carries the user-facing message.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_n(n: i64) -> CalcResult<()> {
//!     if n < 1 {
//!         return Err(CalcError::out_of_range("n", n, "n must be positive"));
//!     }
//!     Ok(())
//! }
//!
//! let err = validate_n(0).unwrap_err();
//! assert_eq!(err.reason(), "n must be positive");
//! assert_eq!(err.error_code(), "OUT_OF_RANGE");
//! ```

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Which precondition an input violated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InputErrorKind {
    /// Text did not parse to a finite number
    NotANumber,
    /// A whole number was required
    NotAnInteger,
    /// Value is outside the operation's supported range
    OutOfRange,
    /// Modulo by zero
    DivisionByZero,
    /// Cross-field constraint (e.g. n < r)
    Constraint,
    /// Unknown arithmetic operation
    InvalidOperation,
}

/// Structured error type for calculation operations.
///
/// Serializes with the same tagged shape as the rest of the JSON API so that
/// front ends can forward it untouched.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-numeric, out of range, cross-field violation)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        kind: InputErrorKind,
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error of the given kind
    pub fn invalid_input(
        kind: InputErrorKind,
        field: impl Into<String>,
        value: impl Display,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            kind,
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a NotANumber error for unparseable text
    pub fn not_a_number(field: impl Into<String>, raw: impl Display) -> Self {
        Self::invalid_input(InputErrorKind::NotANumber, field, raw, "not a number")
    }

    /// Create a NotAnInteger error
    pub fn not_an_integer(field: impl Into<String>, raw: impl Display) -> Self {
        Self::invalid_input(
            InputErrorKind::NotAnInteger,
            field,
            raw,
            "must be a whole number",
        )
    }

    /// Create an OutOfRange error
    pub fn out_of_range(field: impl Into<String>, value: impl Display, reason: impl Into<String>) -> Self {
        Self::invalid_input(InputErrorKind::OutOfRange, field, value, reason)
    }

    /// Create a Constraint error for cross-field violations
    pub fn constraint(field: impl Into<String>, value: impl Display, reason: impl Into<String>) -> Self {
        Self::invalid_input(InputErrorKind::Constraint, field, value, reason)
    }

    /// Create a DivisionByZero error
    pub fn division_by_zero(field: impl Into<String>) -> Self {
        Self::invalid_input(
            InputErrorKind::DivisionByZero,
            field,
            0,
            "Cannot divide by zero",
        )
    }

    /// Create an InvalidOperation error
    pub fn invalid_operation(raw: impl Display) -> Self {
        Self::invalid_input(
            InputErrorKind::InvalidOperation,
            "operation",
            raw,
            "Invalid operation",
        )
    }

    /// Which precondition failed
    pub fn kind(&self) -> InputErrorKind {
        match self {
            CalcError::InvalidInput { kind, .. } => *kind,
        }
    }

    /// Name of the offending input field
    pub fn field(&self) -> &str {
        match self {
            CalcError::InvalidInput { field, .. } => field,
        }
    }

    /// User-facing message, without field or value decoration
    pub fn reason(&self) -> &str {
        match self {
            CalcError::InvalidInput { reason, .. } => reason,
        }
    }

    /// Every error is fixed by supplying different input; none are transient.
    pub fn is_recoverable(&self) -> bool {
        true
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self.kind() {
            InputErrorKind::NotANumber => "NOT_A_NUMBER",
            InputErrorKind::NotAnInteger => "NOT_AN_INTEGER",
            InputErrorKind::OutOfRange => "OUT_OF_RANGE",
            InputErrorKind::DivisionByZero => "DIVISION_BY_ZERO",
            InputErrorKind::Constraint => "CONSTRAINT_VIOLATION",
            InputErrorKind::InvalidOperation => "INVALID_OPERATION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::out_of_range("n", -5, "n must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
        assert!(json.contains("\"type\":\"InvalidInput\""));
        assert!(json.contains("\"kind\":\"out_of_range\""));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::division_by_zero("num2").error_code(), "DIVISION_BY_ZERO");
        assert_eq!(CalcError::not_a_number("num1", "abc").error_code(), "NOT_A_NUMBER");
        assert_eq!(CalcError::invalid_operation("pow").error_code(), "INVALID_OPERATION");
    }

    #[test]
    fn test_display_includes_field_and_reason() {
        let error = CalcError::constraint("r", 7, "n must be greater than or equal to r");
        assert_eq!(
            error.to_string(),
            "Invalid input for 'r': 7 - n must be greater than or equal to r"
        );
        assert_eq!(error.reason(), "n must be greater than or equal to r");
        assert_eq!(error.field(), "r");
    }

    #[test]
    fn test_division_by_zero_message() {
        let error = CalcError::division_by_zero("num2");
        assert_eq!(error.kind(), InputErrorKind::DivisionByZero);
        assert_eq!(error.reason(), "Cannot divide by zero");
        assert!(error.is_recoverable());
    }
}
