//! # Calculator Suite CLI
//!
//! Terminal front end for calc_core. Arguments are taken as raw text and go
//! through the same validation as every other caller, so `calc_cli factorial
//! abc` reports "not a number" rather than guessing. Negative numbers are
//! accepted as positional values.
//!
//! ```text
//! calc_cli calculate 5 modulo 2
//! calc_cli --json ncr 10 3
//! ```

mod render;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use calc_core::calculations::{
    BasicInput, Calculation, FactorialInput, NcrInput, PrimeInput, SeriesInput, TableInput,
};
use calc_core::validation::{parse_integer, parse_number, parse_operation};
use calc_core::{CalcResult, CalculationOutput};

#[derive(Parser, Debug)]
#[command(name = "calc_cli", version, about = "Calculator suite - arithmetic, factorial, primes, nCr, tables, series")]
struct Cli {
    /// Print the result record as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add, subtract, multiply or take the modulo of two numbers
    Calculate {
        #[arg(allow_negative_numbers = true)]
        num1: String,
        /// add | subtract | multiply | modulo
        operation: String,
        #[arg(allow_negative_numbers = true)]
        num2: String,
    },

    /// Factorial of a non-negative integer
    Factorial {
        #[arg(allow_negative_numbers = true)]
        number: String,
    },

    /// Check whether a number greater than 1 is prime
    Prime {
        #[arg(allow_negative_numbers = true)]
        number: String,
    },

    /// Combinations: choose r items from n
    Ncr {
        #[arg(allow_negative_numbers = true)]
        n: String,
        #[arg(allow_negative_numbers = true)]
        r: String,
    },

    /// Multiplication table from 1 to 10
    Table {
        #[arg(allow_negative_numbers = true)]
        number: String,
    },

    /// Alternating series 1 - 2 + 3 - ... ± n
    Series {
        #[arg(allow_negative_numbers = true)]
        n: String,
    },
}

impl Commands {
    /// Validate the raw arguments into a typed calculation.
    fn to_calculation(&self) -> CalcResult<Calculation> {
        Ok(match self {
            Commands::Calculate {
                num1,
                operation,
                num2,
            } => Calculation::Basic(BasicInput {
                num1: parse_number("num1", num1)?,
                num2: parse_number("num2", num2)?,
                operation: parse_operation(operation)?,
            }),
            Commands::Factorial { number } => Calculation::Factorial(FactorialInput {
                number: parse_integer("number", number)?,
            }),
            Commands::Prime { number } => Calculation::Prime(PrimeInput {
                number: parse_integer("number", number)?,
            }),
            Commands::Ncr { n, r } => Calculation::Ncr(NcrInput {
                n: parse_integer("n", n)?,
                r: parse_integer("r", r)?,
            }),
            Commands::Table { number } => Calculation::Table(TableInput {
                number: parse_number("number", number)?,
            }),
            Commands::Series { n } => Calculation::Series(SeriesInput {
                n: parse_integer("n", n)?,
            }),
        })
    }
}

fn run(command: &Commands) -> CalcResult<(Calculation, CalculationOutput)> {
    let calculation = command.to_calculation()?;
    debug!(calculation = calculation.calc_type(), "evaluating");
    let output = calculation.evaluate()?;
    Ok((calculation, output))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    match run(&cli.command) {
        Ok((calculation, output)) => {
            if cli.json {
                match serde_json::to_string_pretty(&output) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print!("{}", render::render(&calculation, &output));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            warn!(field = e.field(), code = e.error_code(), "rejected input");
            eprintln!("Error: {}", e.reason());
            if cli.json {
                if let Ok(json) = serde_json::to_string_pretty(&e) {
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}
