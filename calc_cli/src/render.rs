//! Human-readable rendering of calculation results.

use calc_core::calculations::{Calculation, CalculationOutput};

const RULE: &str = "═══════════════════════════════════════";

/// Render a result block for the terminal.
pub fn render(calculation: &Calculation, output: &CalculationOutput) -> String {
    let body: Vec<String> = match (calculation, output) {
        (Calculation::Basic(input), CalculationOutput::Basic(result)) => vec![format!(
            "{} {} {} = {}",
            input.num1,
            input.operation.symbol(),
            input.num2,
            result.result
        )],
        (_, CalculationOutput::Factorial(result)) => {
            vec![format!("{}! = {}", result.number, result.result)]
        }
        (_, CalculationOutput::Prime(result)) => {
            vec![format!("{} is {}", result.number, result.label)]
        }
        (_, CalculationOutput::Ncr(result)) => {
            vec![format!("C({}, {}) = {}", result.n, result.r, result.result)]
        }
        (_, CalculationOutput::Table(result)) => result
            .table
            .iter()
            .map(|entry| {
                format!(
                    "{} × {:>2} = {}",
                    result.number, entry.multiplier, entry.result
                )
            })
            .collect(),
        (_, CalculationOutput::Series(result)) => vec![
            result.pattern(),
            format!("Odd sum:  {}", result.odd_sum),
            format!("Even sum: {}", result.even_sum),
            format!("Result:   {}", result.result),
        ],
        (_, CalculationOutput::Basic(result)) => vec![format!("= {}", result.result)],
    };

    let mut out = format!("{RULE}\n  {}\n{RULE}\n", calculation.calc_type().to_uppercase());
    for line in body {
        out.push_str("  ");
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(RULE);
    out.push('\n');
    out
}
