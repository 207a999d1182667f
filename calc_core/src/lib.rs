//! # calc_core - Calculator Suite Engine
//!
//! `calc_core` is the computational heart of the calculator suite. It holds
//! each operation exactly once; the CLI and the HTTP server both call into it.
//! All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Validate first**: Every `calculate` rejects bad input before computing
//! - **Rich Errors**: Structured error types, not just strings
//! - **Exact**: Integer results are exact or refused, never approximated
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::{Calculation, FactorialInput};
//!
//! let calc = Calculation::Factorial(FactorialInput { number: 5 });
//! let output = calc.evaluate().unwrap();
//!
//! // Serialize to JSON for transmission
//! let json = serde_json::to_string(&output).unwrap();
//! assert_eq!(json, r#"{"result":120,"number":5}"#);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The six calculator operations
//! - [`validation`] - Raw text to typed values
//! - [`errors`] - Structured error types
//! - [`storage`] - Injected persistence capability (no-op by default)

pub mod calculations;
pub mod errors;
pub mod storage;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculations::{Calculation, CalculationOutput};
pub use errors::{CalcError, CalcResult, InputErrorKind};
pub use storage::{MemStorage, Storage};
