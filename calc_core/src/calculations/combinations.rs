//! # Combinations (nCr)
//!
//! Number of ways to choose `r` items from `n`, `n! / (r! (n-r)!)`.
//!
//! The value is built up multiplicatively over `min(r, n - r)` steps rather
//! than from three factorials. After step `i` the accumulator holds
//! `C(n - k + i, i)`, which is always a whole number, so every division is exact.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::combinations::{calculate, NcrInput};
//!
//! let result = calculate(&NcrInput { n: 10, r: 3 }).unwrap();
//! assert_eq!(result.result, 120);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Input parameters for an nCr calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NcrInput {
    /// Size of the set
    pub n: i64,
    /// Number of items chosen
    pub r: i64,
}

impl NcrInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.n < 0 {
            return Err(CalcError::out_of_range("n", self.n, "n must be non-negative"));
        }
        if self.r < 0 {
            return Err(CalcError::out_of_range("r", self.r, "r must be non-negative"));
        }
        if self.n < self.r {
            return Err(CalcError::constraint(
                "r",
                self.r,
                "n must be greater than or equal to r",
            ));
        }
        Ok(())
    }
}

/// Result of an nCr calculation.
///
/// ## JSON Example
///
/// ```json
/// { "n": 10, "r": 3, "result": 120 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NcrResult {
    pub n: i64,
    pub r: i64,
    pub result: u64,
}

/// `C(n, r)`, or `None` when `r > n` or the value does not fit in a `u64`.
pub fn binomial(n: u64, r: u64) -> Option<u64> {
    let k = r.min(n.checked_sub(r)?);
    let mut acc: u128 = 1;
    for i in 1..=k as u128 {
        acc = acc.checked_mul(n as u128 - k as u128 + i)? / i;
        // C(n, i) only grows while i <= n / 2
        if acc > u64::MAX as u128 {
            return None;
        }
    }
    u64::try_from(acc).ok()
}

/// Calculate `nCr`.
pub fn calculate(input: &NcrInput) -> CalcResult<NcrResult> {
    input.validate()?;

    let result = binomial(input.n as u64, input.r as u64).ok_or_else(|| {
        CalcError::out_of_range("n", input.n, "Result is too large to represent exactly")
    })?;

    Ok(NcrResult {
        n: input.n,
        r: input.r,
        result,
    })
}
