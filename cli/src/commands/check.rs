use colored::*;

use crate::terminal::{colors, print};
use kaprekar_common::{config::Config, error, numeral::Numeral, success};
use kaprekar_core::routine::{self, StepResult};

/// Numbers with a well-known step count.
const FIXTURES: [(&str, u32); 3] = [("3524", 3), ("2111", 5), ("8532", 1)];

pub fn check(cfg: &Config) -> anyhow::Result<()> {
    let mut failed: usize = 0;

    for (input, expected) in FIXTURES {
        let numeral: Numeral = input.parse()?;
        let actual: StepResult = routine::steps_to_constant(numeral, cfg.max_iterations);
        let ok: bool = actual == StepResult::Converged { steps: expected };

        let got: String = match actual.steps() {
            Some(steps) => steps.to_string(),
            None => String::from("none"),
        };
        let got: ColoredString = if ok { got.color(colors::PRIMARY) } else { got.red().bold() };

        if cfg.quiet < 2 {
            print::print_status(format!("Check {numeral}: expected {expected}, got {got}"));
        }
        if !ok {
            failed += 1;
        }
    }

    if failed > 0 {
        error!("{failed} of {} checks failed", FIXTURES.len());
        anyhow::bail!("sanity checks failed");
    }
    success!("All {} checks passed", FIXTURES.len());
    Ok(())
}
