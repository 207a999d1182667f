//! # Calculations
//!
//! This module contains all calculator operations. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! Every `calculate` runs the input's `validate()` first, so a result is only
//! ever produced from input that satisfies the operation's preconditions.
//!
//! ## Available Calculations
//!
//! - [`basic`] - Add, subtract, multiply, modulo
//! - [`factorial`] - Exact factorial
//! - [`prime`] - Primality check
//! - [`combinations`] - nCr
//! - [`table`] - Multiplication table (1 to 10)
//! - [`series`] - Alternating series sum `1 - 2 + 3 - ...`

pub mod basic;
pub mod combinations;
pub mod factorial;
pub mod prime;
pub mod series;
pub mod table;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

// Re-export commonly used types
pub use basic::{BasicInput, BasicResult, Operation};
pub use combinations::{NcrInput, NcrResult};
pub use factorial::{FactorialInput, FactorialResult};
pub use prime::{PrimeInput, PrimeLabel, PrimeResult};
pub use series::{SeriesInput, SeriesResult};
pub use table::{TableEntry, TableInput, TableResult};

/// Enum wrapper for all calculation inputs.
///
/// Lets a caller hold or transmit any calculation as one value and run it
/// through [`Calculation::evaluate`].
///
/// ## JSON Example
///
/// ```json
/// { "calculation": "ncr", "n": 10, "r": 3 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculation", rename_all = "snake_case")]
pub enum Calculation {
    Basic(BasicInput),
    Factorial(FactorialInput),
    Prime(PrimeInput),
    Ncr(NcrInput),
    Table(TableInput),
    Series(SeriesInput),
}

impl Calculation {
    /// Validate and run the wrapped calculation.
    pub fn evaluate(&self) -> CalcResult<CalculationOutput> {
        Ok(match self {
            Calculation::Basic(input) => CalculationOutput::Basic(basic::calculate(input)?),
            Calculation::Factorial(input) => {
                CalculationOutput::Factorial(factorial::calculate(input)?)
            }
            Calculation::Prime(input) => CalculationOutput::Prime(prime::calculate(input)?),
            Calculation::Ncr(input) => CalculationOutput::Ncr(combinations::calculate(input)?),
            Calculation::Table(input) => CalculationOutput::Table(table::calculate(input)?),
            Calculation::Series(input) => CalculationOutput::Series(series::calculate(input)?),
        })
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            Calculation::Basic(_) => "Basic",
            Calculation::Factorial(_) => "Factorial",
            Calculation::Prime(_) => "Prime",
            Calculation::Ncr(_) => "nCr",
            Calculation::Table(_) => "Table",
            Calculation::Series(_) => "Series",
        }
    }
}

/// Enum wrapper for all calculation results.
///
/// Untagged, so it serializes exactly like the wrapped `*Result`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CalculationOutput {
    Basic(BasicResult),
    Factorial(FactorialResult),
    Prime(PrimeResult),
    Ncr(NcrResult),
    Table(TableResult),
    Series(SeriesResult),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InputErrorKind;

    #[test]
    fn test_tagged_json_dispatch() {
        let calc: Calculation = serde_json::from_str(r#"{"calculation": "ncr", "n": 10, "r": 3}"#).unwrap();
        assert_eq!(calc.calc_type(), "nCr");
        let output = calc.evaluate().unwrap();
        assert_eq!(
            output,
            CalculationOutput::Ncr(NcrResult { n: 10, r: 3, result: 120 })
        );
    }

    #[test]
    fn test_output_serializes_like_inner_result() {
        let calc = Calculation::Factorial(FactorialInput { number: 5 });
        let json = serde_json::to_value(calc.evaluate().unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({ "result": 120, "number": 5 }));
    }

    #[test]
    fn test_evaluate_propagates_validation_errors() {
        let calc = Calculation::Basic(BasicInput {
            num1: 5.0,
            num2: 0.0,
            operation: Operation::Modulo,
        });
        assert_eq!(calc.evaluate().unwrap_err().kind(), InputErrorKind::DivisionByZero);

        let calc = Calculation::Prime(PrimeInput { number: 1 });
        assert_eq!(calc.evaluate().unwrap_err().reason(), "Number must be greater than 1");
    }

    #[test]
    fn test_every_variant_evaluates() {
        let calcs = [
            Calculation::Basic(BasicInput { num1: 1.0, num2: 2.0, operation: Operation::Add }),
            Calculation::Factorial(FactorialInput { number: 3 }),
            Calculation::Prime(PrimeInput { number: 7 }),
            Calculation::Ncr(NcrInput { n: 4, r: 2 }),
            Calculation::Table(TableInput { number: 2.0 }),
            Calculation::Series(SeriesInput { n: 3 }),
        ];
        for calc in &calcs {
            assert!(calc.evaluate().is_ok(), "{} failed", calc.calc_type());
        }
    }
}
