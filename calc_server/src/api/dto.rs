//! REST DTOs for the calculator endpoints.
//!
//! Numeric fields are held as raw JSON values so that a string or `null`
//! gets the validator's "not a number" reason instead of a serde message.
//! Integer fields then follow the text validator's rules: `5.0` is accepted,
//! `5.5` is rejected instead of truncated.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use calc_core::calculations::{
    BasicInput, Calculation, FactorialInput, NcrInput, PrimeInput, SeriesInput, TableInput,
};
use calc_core::validation::{integer_from_f64, parse_operation};
use calc_core::{CalcError, CalcResult};

/// `POST /api/calculate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    pub num1: Value,
    pub num2: Value,
    /// Kept as text so unknown names get the "Invalid operation" message
    pub operation: String,
}

/// `POST /api/factorial`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorialRequest {
    pub number: Value,
}

/// `POST /api/prime-check`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimeCheckRequest {
    pub number: Value,
}

/// `POST /api/ncr`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NcrRequest {
    pub n: Value,
    pub r: Value,
}

/// `POST /api/multiplication-table`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRequest {
    pub number: Value,
}

/// `POST /api/series-sum`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesRequest {
    pub n: Value,
}

/// Error body for every 4xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub code: String,
}

/// A JSON number as `f64`; anything else is not a number.
fn number(field: &str, value: &Value) -> CalcResult<f64> {
    value
        .as_f64()
        .ok_or_else(|| CalcError::not_a_number(field, value))
}

fn integer(field: &str, value: &Value) -> CalcResult<i64> {
    integer_from_f64(field, number(field, value)?)
}

impl TryFrom<CalculateRequest> for Calculation {
    type Error = CalcError;

    fn try_from(req: CalculateRequest) -> Result<Self, Self::Error> {
        Ok(Calculation::Basic(BasicInput {
            num1: number("num1", &req.num1)?,
            num2: number("num2", &req.num2)?,
            operation: parse_operation(&req.operation)?,
        }))
    }
}

impl TryFrom<FactorialRequest> for Calculation {
    type Error = CalcError;

    fn try_from(req: FactorialRequest) -> Result<Self, Self::Error> {
        Ok(Calculation::Factorial(FactorialInput {
            number: integer("number", &req.number)?,
        }))
    }
}

impl TryFrom<PrimeCheckRequest> for Calculation {
    type Error = CalcError;

    fn try_from(req: PrimeCheckRequest) -> Result<Self, Self::Error> {
        Ok(Calculation::Prime(PrimeInput {
            number: integer("number", &req.number)?,
        }))
    }
}

impl TryFrom<NcrRequest> for Calculation {
    type Error = CalcError;

    fn try_from(req: NcrRequest) -> Result<Self, Self::Error> {
        Ok(Calculation::Ncr(NcrInput {
            n: integer("n", &req.n)?,
            r: integer("r", &req.r)?,
        }))
    }
}

impl TryFrom<TableRequest> for Calculation {
    type Error = CalcError;

    fn try_from(req: TableRequest) -> Result<Self, Self::Error> {
        Ok(Calculation::Table(TableInput {
            number: number("number", &req.number)?,
        }))
    }
}

impl TryFrom<SeriesRequest> for Calculation {
    type Error = CalcError;

    fn try_from(req: SeriesRequest) -> Result<Self, Self::Error> {
        Ok(Calculation::Series(SeriesInput {
            n: integer("n", &req.n)?,
        }))
    }
}
