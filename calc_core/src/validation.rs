//! # Input Validation
//!
//! Converts raw text (as typed into a form field or passed on a command line)
//! into the typed values the calculations accept. Range checks specific to an
//! operation live in each `*Input::validate()`; this module only answers
//! "is this a number at all?".
//!
//! ## Example
//!
//! ```rust
//! use calc_core::validation::{parse_integer, parse_number};
//!
//! assert_eq!(parse_number("num1", " 2.5 ").unwrap(), 2.5);
//! assert_eq!(parse_integer("n", "10").unwrap(), 10);
//! assert_eq!(parse_number("num1", "abc").unwrap_err().reason(), "not a number");
//! ```

use crate::calculations::basic::Operation;
use crate::errors::{CalcError, CalcResult};

/// Largest integer an `f64` can represent exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Parse a real number. Rejects empty text, `NaN` and infinities.
pub fn parse_number(field: &str, raw: &str) -> CalcResult<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::not_a_number(field, trimmed)),
    }
}

/// Parse a whole number.
///
/// `"7"` and `"7.0"` are accepted; `"7.5"` is rejected rather than truncated.
pub fn parse_integer(field: &str, raw: &str) -> CalcResult<i64> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }

    let value = parse_number(field, trimmed)?;
    integer_from_f64(field, value)
}

/// Convert an already-parsed real into an integer without losing information.
pub fn integer_from_f64(field: &str, value: f64) -> CalcResult<i64> {
    require_finite(field, value)?;
    if value.fract() != 0.0 {
        return Err(CalcError::not_an_integer(field, value));
    }
    if value.abs() > MAX_SAFE_INTEGER as f64 {
        return Err(CalcError::out_of_range(
            field,
            value,
            "Number is too large to represent exactly",
        ));
    }
    Ok(value as i64)
}

/// Parse an arithmetic operation name (`add`, `subtract`, `multiply`, `modulo`).
pub fn parse_operation(raw: &str) -> CalcResult<Operation> {
    raw.trim().parse()
}

/// Reject `NaN` and infinities.
pub fn require_finite(field: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::not_a_number(field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InputErrorKind;

    #[test]
    fn test_parse_number_accepts_reals() {
        assert_eq!(parse_number("x", "42").unwrap(), 42.0);
        assert_eq!(parse_number("x", "-3.25").unwrap(), -3.25);
        assert_eq!(parse_number("x", "  1e3 ").unwrap(), 1000.0);
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        for raw in ["", "   ", "abc", "1,5", "NaN", "inf", "-infinity"] {
            let err = parse_number("x", raw).unwrap_err();
            assert_eq!(err.kind(), InputErrorKind::NotANumber, "input {raw:?}");
            assert_eq!(err.reason(), "not a number");
        }
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("n", "0").unwrap(), 0);
        assert_eq!(parse_integer("n", "-12").unwrap(), -12);
        assert_eq!(parse_integer("n", "7.0").unwrap(), 7);
    }

    #[test]
    fn test_parse_integer_rejects_fractions() {
        let err = parse_integer("n", "7.5").unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::NotAnInteger);
        assert_eq!(err.field(), "n");
    }

    #[test]
    fn test_parse_integer_rejects_non_numbers() {
        let err = parse_integer("n", "seven").unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::NotANumber);
    }

    #[test]
    fn test_integer_from_f64_range() {
        assert!(integer_from_f64("n", 9_007_199_254_740_991.0).is_ok());
        let err = integer_from_f64("n", 1e300).unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::OutOfRange);
    }

    #[test]
    fn test_parse_operation() {
        assert_eq!(parse_operation("modulo").unwrap(), Operation::Modulo);
        let err = parse_operation("divide").unwrap_err();
        assert_eq!(err.reason(), "Invalid operation");
    }
}
