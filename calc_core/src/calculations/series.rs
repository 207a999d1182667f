//! # Alternating Series Sum
//!
//! Evaluates `1 - 2 + 3 - 4 + ... ± n` by splitting `1..=n` into odd and even
//! terms. Both partial sums have closed forms:
//!
//! - odd terms: `1 + 3 + ... = ceil(n/2)²`
//! - even terms: `2 + 4 + ... = floor(n/2) * (floor(n/2) + 1)`
//!
//! so the result is `ceil(n/2)` for odd `n` and `-n/2` for even `n`.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::series::{calculate, SeriesInput};
//!
//! let result = calculate(&SeriesInput { n: 10 }).unwrap();
//! assert_eq!((result.odd_sum, result.even_sum, result.result), (25, 30, -5));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Terms shown in full by [`SeriesResult::pattern`] before eliding.
const PATTERN_TERMS: i64 = 10;

/// Input parameters for an alternating series sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesInput {
    pub n: i64,
}

impl SeriesInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.n < 1 {
            return Err(CalcError::out_of_range("n", self.n, "n must be positive"));
        }
        Ok(())
    }
}

/// Result of an alternating series sum.
///
/// ## JSON Example
///
/// ```json
/// { "n": 10, "oddSum": 25, "evenSum": 30, "result": -5 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesResult {
    pub n: i64,
    pub odd_sum: i64,
    pub even_sum: i64,
    pub result: i64,
}

impl SeriesResult {
    /// Render the series as text, e.g. `1 - 2 + 3 - 4`.
    ///
    /// Long series keep the first few terms and the last one.
    pub fn pattern(&self) -> String {
        let term = |i: i64| {
            if i == 1 {
                "1".to_string()
            } else if i % 2 == 0 {
                format!("- {i}")
            } else {
                format!("+ {i}")
            }
        };

        if self.n <= PATTERN_TERMS {
            return (1..=self.n).map(term).collect::<Vec<_>>().join(" ");
        }

        let head: Vec<String> = (1..=PATTERN_TERMS / 2).map(term).collect();
        format!("{} ... {}", head.join(" "), term(self.n))
    }
}

/// Calculate the odd sum, even sum and their difference for `1..=n`.
pub fn calculate(input: &SeriesInput) -> CalcResult<SeriesResult> {
    input.validate()?;

    let too_large = || CalcError::out_of_range("n", input.n, "n is too large");

    let odd_terms = input.n / 2 + input.n % 2;
    let even_terms = input.n / 2;

    let odd_sum = odd_terms.checked_mul(odd_terms).ok_or_else(too_large)?;
    let even_sum = even_terms
        .checked_mul(even_terms + 1)
        .ok_or_else(too_large)?;

    Ok(SeriesResult {
        n: input.n,
        odd_sum,
        even_sum,
        result: odd_sum - even_sum,
    })
}
