//! # Prime Check
//!
//! Classifies an integer `n ≥ 2` as prime or composite by trial division with
//! odd divisors up to `floor(sqrt(n))`.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::prime::{calculate, PrimeInput, PrimeLabel};
//!
//! let result = calculate(&PrimeInput { number: 17 }).unwrap();
//! assert!(result.is_prime);
//! assert_eq!(result.label, PrimeLabel::Prime);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::validation::MAX_SAFE_INTEGER;

/// Input parameters for a prime check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeInput {
    pub number: i64,
}

impl PrimeInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.number < 2 {
            return Err(CalcError::out_of_range(
                "number",
                self.number,
                "Number must be greater than 1",
            ));
        }
        if self.number > MAX_SAFE_INTEGER {
            return Err(CalcError::out_of_range(
                "number",
                self.number,
                "Number is too large to check",
            ));
        }
        Ok(())
    }
}

/// Classification of a checked number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimeLabel {
    Prime,
    Composite,
}

impl fmt::Display for PrimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimeLabel::Prime => f.write_str("prime"),
            PrimeLabel::Composite => f.write_str("composite"),
        }
    }
}

/// Result of a prime check.
///
/// ## JSON Example
///
/// ```json
/// { "number": 21, "isPrime": false, "label": "composite" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimeResult {
    pub number: i64,
    pub is_prime: bool,
    pub label: PrimeLabel,
}

/// Primality by odd trial division up to the integer square root.
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut divisor = 3;
    // divisor <= n / divisor is divisor² <= n without overflow
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Check whether `number` is prime.
pub fn calculate(input: &PrimeInput) -> CalcResult<PrimeResult> {
    input.validate()?;

    let is_prime = is_prime(input.number as u64);
    Ok(PrimeResult {
        number: input.number,
        is_prime,
        label: if is_prime {
            PrimeLabel::Prime
        } else {
            PrimeLabel::Composite
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InputErrorKind;

    /// Scan every divisor in 2..n.
    fn brute_force_is_prime(n: u64) -> bool {
        n >= 2 && (2..n).all(|d| n % d != 0)
    }

    #[test]
    fn test_matches_brute_force() {
        for n in 2..5_000u64 {
            assert_eq!(is_prime(n), brute_force_is_prime(n), "n = {n}");
        }
    }

    #[test]
    fn test_small_values() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(!is_prime(9));
        assert!(!is_prime(25));
        assert!(!is_prime(49));
    }

    #[test]
    fn test_large_values() {
        assert!(is_prime(1_000_000_007));
        assert!(!is_prime(1_000_000_007 * 3));
        // 2^53 - 111 is the largest prime below 2^53
        assert!(is_prime(9_007_199_254_740_881));
    }

    #[test]
    fn test_seventeen_is_prime() {
        let result = calculate(&PrimeInput { number: 17 }).unwrap();
        assert_eq!(result.number, 17);
        assert!(result.is_prime);
        assert_eq!(result.label.to_string(), "prime");
    }

    #[test]
    fn test_composite_label() {
        let result = calculate(&PrimeInput { number: 21 }).unwrap();
        assert!(!result.is_prime);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "number": 21, "isPrime": false, "label": "composite" })
        );
    }

    #[test]
    fn test_below_two_rejected() {
        for number in [1, 0, -7] {
            let err = calculate(&PrimeInput { number }).unwrap_err();
            assert_eq!(err.kind(), InputErrorKind::OutOfRange);
            assert_eq!(err.reason(), "Number must be greater than 1");
        }
    }
}
