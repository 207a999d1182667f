//! # Multiplication Table
//!
//! Multiples of a number for multipliers 1 through 10, in display order.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::table::{calculate, TableInput};
//!
//! let result = calculate(&TableInput { number: 7.0 }).unwrap();
//! assert_eq!(result.table.len(), 10);
//! assert_eq!(result.table[9].result, 70.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::validation::require_finite;

/// Number of rows in every table.
pub const TABLE_SIZE: u8 = 10;

/// Input parameters for a multiplication table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableInput {
    pub number: f64,
}

impl TableInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("number", self.number)?;
        Ok(())
    }
}

/// One row of the table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableEntry {
    pub multiplier: u8,
    pub result: f64,
}

/// Result of a multiplication table calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "number": 3,
///   "table": [
///     { "multiplier": 1, "result": 3 },
///     { "multiplier": 2, "result": 6 }
///   ]
/// }
/// ```
///
/// (truncated; there are always ten rows)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableResult {
    pub number: f64,
    pub table: Vec<TableEntry>,
}

/// Build the 1..=10 multiplication table for `number`.
pub fn calculate(input: &TableInput) -> CalcResult<TableResult> {
    input.validate()?;

    let table = (1..=TABLE_SIZE)
        .map(|multiplier| {
            let result = input.number * f64::from(multiplier);
            if result.is_finite() {
                Ok(TableEntry { multiplier, result })
            } else {
                Err(CalcError::out_of_range(
                    "number",
                    input.number,
                    "Table value is outside the representable range",
                ))
            }
        })
        .collect::<CalcResult<Vec<_>>>()?;

    Ok(TableResult {
        number: input.number,
        table,
    })
}
