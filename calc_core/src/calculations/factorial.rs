//! # Factorial
//!
//! Exact `n!` for `0 ≤ n ≤ 20`. Results are `u64`; `21!` no longer fits, so
//! larger inputs are rejected instead of being approximated.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::factorial::{calculate, FactorialInput};
//!
//! let result = calculate(&FactorialInput { number: 5 }).unwrap();
//! assert_eq!(result.result, 120);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Largest input whose factorial fits in a `u64`.
pub const MAX_FACTORIAL_INPUT: i64 = 20;

/// Input parameters for a factorial calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorialInput {
    pub number: i64,
}

impl FactorialInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.number < 0 {
            return Err(CalcError::out_of_range(
                "number",
                self.number,
                "Factorial is not defined for negative numbers",
            ));
        }
        if self.number > MAX_FACTORIAL_INPUT {
            return Err(CalcError::out_of_range(
                "number",
                self.number,
                format!("Factorial is only supported up to {MAX_FACTORIAL_INPUT}"),
            ));
        }
        Ok(())
    }
}

/// Result of a factorial calculation.
///
/// ## JSON Example
///
/// ```json
/// { "result": 120, "number": 5 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorialResult {
    pub result: u64,
    pub number: i64,
}

/// `n!` by iterative product; `None` once the product overflows.
pub fn factorial(n: u64) -> Option<u64> {
    (2..=n).try_fold(1u64, |acc, i| acc.checked_mul(i))
}

/// Calculate `number!`.
pub fn calculate(input: &FactorialInput) -> CalcResult<FactorialResult> {
    input.validate()?;

    let result = factorial(input.number as u64).ok_or_else(|| {
        CalcError::out_of_range("number", input.number, "Factorial result is too large")
    })?;

    Ok(FactorialResult {
        result,
        number: input.number,
    })
}
