//! # Kaprekar Routine
//!
//! One step sorts the digits both ways and subtracts the ascending
//! arrangement from the descending one. Repeating it sends every non-repdigit
//! numeral to 6174 within 7 steps.

use kaprekar_common::numeral::Numeral;

/// Why a numeral produced no step count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// All digits identical; outside the analyzable domain.
    Repdigit,
    /// The trajectory hit `0000`, which maps to itself.
    Collapsed,
    /// The iteration cap ran out before 6174 was reached.
    CapReached,
}

/// Outcome of iterating a numeral towards 6174.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    Converged { steps: u32 },
    Failed(Failure),
}

impl StepResult {
    pub fn steps(self) -> Option<u32> {
        match self {
            StepResult::Converged { steps } => Some(steps),
            StepResult::Failed(_) => None,
        }
    }
}

/// A single application of the Kaprekar operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub largest: Numeral,
    pub smallest: Numeral,
    pub difference: u16,
}

impl Step {
    /// The difference as the numeral the next step starts from.
    pub fn next(&self) -> Numeral {
        // `largest >= smallest` and both are at most 9999.
        Numeral::new(self.difference).unwrap_or(Numeral::ZERO)
    }
}

/// A full trajectory together with how it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub start: Numeral,
    pub steps: Vec<Step>,
    pub outcome: StepResult,
}

/// Splits a numeral into its sorted arrangements and their difference.
pub fn decompose(numeral: Numeral) -> Step {
    let largest = numeral.descending();
    let smallest = numeral.ascending();
    Step {
        largest,
        smallest,
        difference: largest.value() - smallest.value(),
    }
}

/// Applies the Kaprekar operation once.
///
/// Repdigits are accepted and map to `0000`.
pub fn kaprekar_step(numeral: Numeral) -> Numeral {
    decompose(numeral).next()
}

pub fn is_repdigit(numeral: Numeral) -> bool {
    numeral.is_repdigit()
}

/// Counts the steps needed to reach 6174.
///
/// 6174 itself converges in zero steps. Repdigits fail without iterating, a
/// trajectory that lands on `0000` fails as soon as it does, and anything
/// still short of 6174 after `max_iterations` steps fails too.
pub fn steps_to_constant(numeral: Numeral, max_iterations: u32) -> StepResult {
    trajectory(numeral, max_iterations, |_| {})
}

/// Same as [`steps_to_constant`], keeping every intermediate [`Step`].
pub fn trace(numeral: Numeral, max_iterations: u32) -> Trace {
    let mut steps = Vec::new();
    let outcome = trajectory(numeral, max_iterations, |step| steps.push(step));
    Trace {
        start: numeral,
        steps,
        outcome,
    }
}

fn trajectory<F>(numeral: Numeral, max_iterations: u32, mut on_step: F) -> StepResult
where
    F: FnMut(Step),
{
    if numeral.is_repdigit() {
        return StepResult::Failed(Failure::Repdigit);
    }

    let mut current = numeral;
    let mut count: u32 = 0;
    while current != Numeral::KAPREKAR && count < max_iterations {
        let step = decompose(current);
        current = step.next();
        count += 1;
        on_step(step);

        if current == Numeral::ZERO {
            tracing::trace!(start = %numeral, count, "trajectory collapsed to 0000");
            return StepResult::Failed(Failure::Collapsed);
        }
    }

    if current == Numeral::KAPREKAR {
        StepResult::Converged { steps: count }
    } else {
        tracing::trace!(start = %numeral, max_iterations, "iteration cap reached");
        StepResult::Failed(Failure::CapReached)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
