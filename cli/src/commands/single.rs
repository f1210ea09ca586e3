use std::io::{self, BufRead, IsTerminal};

use anyhow::Context;
use colored::*;
use console::Term;

use crate::kprint;
use crate::terminal::{colors, format, print};
use kaprekar_common::{config::Config, numeral::Numeral, success, warn};
use kaprekar_core::routine::{self, Failure, StepResult};

const PROMPT: &str = "Enter a 4-digit number (not all digits the same): ";
const INVALID_INPUT: &str =
    "Invalid input. Please enter a 4-digit number (digits only) and not all digits the same (e.g., 1111)";

pub fn single(number: Option<String>, cfg: &Config) -> anyhow::Result<()> {
    let start: Numeral = match number {
        Some(number) => parse_number(&number)?,
        None => prompt()?,
    };

    let trace = routine::trace(start, cfg.max_iterations);

    if cfg.quiet < 2 {
        for (idx, step) in trace.steps.iter().enumerate() {
            print::tree_head(idx + 1, &format!("Step {}", idx + 1));
            print::as_tree_one_level(format::step_to_details(step));
            if idx + 1 != trace.steps.len() {
                kprint!();
            }
        }
        if cfg.quiet == 0 && !trace.steps.is_empty() {
            print::fat_separator();
        }
    }

    match trace.outcome {
        StepResult::Converged { steps } => {
            let unit = if steps == 1 { "step" } else { "steps" };
            success!(
                "Reached Kaprekar's constant {} from {} in {} {unit}",
                format::numeral(Numeral::KAPREKAR),
                format::numeral(start),
                steps.to_string().color(colors::ACCENT).bold()
            );
        }
        StepResult::Failed(Failure::CapReached) => {
            warn!(
                "{} did not reach 6174 within {} iterations",
                start, cfg.max_iterations
            );
        }
        StepResult::Failed(reason) => {
            warn!("{} did not reach 6174: {:?}", start, reason);
        }
    }

    Ok(())
}

fn parse_number(input: &str) -> anyhow::Result<Numeral> {
    Numeral::parse_input(input).context(INVALID_INPUT)
}

/// Writes the prompt and reads one line. Line editing is only available on a
/// terminal; piped input goes through plain stdin.
fn prompt() -> anyhow::Result<Numeral> {
    let term = Term::stdout();
    term.write_str(PROMPT).context("failed to write prompt")?;

    if io::stdin().is_terminal() {
        let line = term.read_line().context("failed to read input")?;
        return parse_number(&line);
    }
    read_number(io::stdin().lock())
}

/// Reads a single line and validates it, ignoring the line terminator.
fn read_number<R: BufRead>(mut reader: R) -> anyhow::Result<Numeral> {
    let mut line = String::new();
    reader.read_line(&mut line).context("failed to read input")?;
    parse_number(line.trim_end_matches(['\r', '\n']))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
