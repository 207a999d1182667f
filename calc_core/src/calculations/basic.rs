//! # Basic Arithmetic
//!
//! Two-operand arithmetic: add, subtract, multiply and modulo.
//!
//! Modulo uses truncating remainder semantics (the sign of the result follows
//! the dividend), so `-5 mod 2 == -1`.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::basic::{calculate, BasicInput, Operation};
//!
//! let input = BasicInput { num1: 5.0, num2: 2.0, operation: Operation::Modulo };
//! assert_eq!(calculate(&input).unwrap().result, 1.0);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::validation::require_finite;

/// Supported two-operand operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Modulo,
}

impl Operation {
    /// All operations, in display order
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Modulo,
    ];

    /// Wire name of the operation
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Modulo => "modulo",
        }
    }

    /// Infix symbol used when rendering an expression
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Modulo => "%",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| CalcError::invalid_operation(s))
    }
}

/// Input parameters for a basic arithmetic calculation.
///
/// ## JSON Example
///
/// ```json
/// { "num1": 12.5, "num2": 4, "operation": "multiply" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicInput {
    /// Left operand
    pub num1: f64,

    /// Right operand
    pub num2: f64,

    /// Operation to apply
    pub operation: Operation,
}

impl BasicInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("num1", self.num1)?;
        require_finite("num2", self.num2)?;
        if self.operation == Operation::Modulo && self.num2 == 0.0 {
            return Err(CalcError::division_by_zero("num2"));
        }
        Ok(())
    }
}

/// Result of a basic arithmetic calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicResult {
    pub result: f64,
}

/// Apply the operation to both operands.
///
/// # Returns
///
/// * `Ok(BasicResult)` - The finite result
/// * `Err(CalcError)` - Non-finite operands, modulo by zero, or a result that overflows `f64`
pub fn calculate(input: &BasicInput) -> CalcResult<BasicResult> {
    input.validate()?;

    let result = match input.operation {
        Operation::Add => input.num1 + input.num2,
        Operation::Subtract => input.num1 - input.num2,
        Operation::Multiply => input.num1 * input.num2,
        Operation::Modulo => input.num1 % input.num2,
    };

    if !result.is_finite() {
        return Err(CalcError::out_of_range(
            "result",
            result,
            "Result is outside the representable range",
        ));
    }

    Ok(BasicResult { result })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InputErrorKind;

    fn run(num1: f64, operation: Operation, num2: f64) -> CalcResult<f64> {
        calculate(&BasicInput { num1, num2, operation }).map(|r| r.result)
    }

    #[test]
    fn test_add_subtract_multiply() {
        assert_eq!(run(2.0, Operation::Add, 3.5).unwrap(), 5.5);
        assert_eq!(run(2.0, Operation::Subtract, 3.5).unwrap(), -1.5);
        assert_eq!(run(-4.0, Operation::Multiply, 2.5).unwrap(), -10.0);
    }

    #[test]
    fn test_modulo_truncates_toward_zero() {
        assert_eq!(run(5.0, Operation::Modulo, 2.0).unwrap(), 1.0);
        assert_eq!(run(-5.0, Operation::Modulo, 2.0).unwrap(), -1.0);
        assert_eq!(run(5.0, Operation::Modulo, -2.0).unwrap(), 1.0);
        assert_eq!(run(5.5, Operation::Modulo, 2.0).unwrap(), 1.5);
    }

    #[test]
    fn test_modulo_by_zero() {
        let err = run(5.0, Operation::Modulo, 0.0).unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::DivisionByZero);
        assert_eq!(err.reason(), "Cannot divide by zero");

        // -0.0 compares equal to zero
        assert!(run(5.0, Operation::Modulo, -0.0).is_err());
    }

    #[test]
    fn test_other_operations_allow_zero() {
        assert_eq!(run(5.0, Operation::Multiply, 0.0).unwrap(), 0.0);
        assert_eq!(run(5.0, Operation::Add, 0.0).unwrap(), 5.0);
    }

    #[test]
    fn test_overflow_is_rejected() {
        let err = run(f64::MAX, Operation::Multiply, 2.0).unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::OutOfRange);
    }

    #[test]
    fn test_non_finite_operands_rejected() {
        let err = run(f64::NAN, Operation::Add, 1.0).unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::NotANumber);
    }

    #[test]
    fn test_operation_parsing() {
        for op in Operation::ALL {
            assert_eq!(op.as_str().parse::<Operation>().unwrap(), op);
        }
        let err = "power".parse::<Operation>().unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::InvalidOperation);
        assert_eq!(err.reason(), "Invalid operation");
    }

    #[test]
    fn test_json_shape() {
        let input: BasicInput =
            serde_json::from_str(r#"{"num1": 7, "num2": 3, "operation": "subtract"}"#).unwrap();
        assert_eq!(input.operation, Operation::Subtract);
        let json = serde_json::to_value(calculate(&input).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({ "result": 4.0 }));
    }
}
