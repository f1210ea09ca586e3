//! # Batch Analyzer
//!
//! Runs the Kaprekar driver over every numeral from `0000` to `9999`.
//!
//! Repdigits are left out of the domain altogether: they are neither counted
//! as converged nor reported as failures, matching how single-number input
//! rejects them up front.

use std::collections::BTreeMap;

use kaprekar_common::numeral::Numeral;
use tracing::debug;

use crate::routine::{self, StepResult};

/// Outcomes of the full-domain run, in ascending numeral order.
#[derive(Debug, Clone, Default)]
pub struct BatchAnalysis {
    /// Step count of every numeral that reached 6174.
    pub converged_counts: Vec<u32>,
    /// Numerals that did not reach 6174.
    pub failures: Vec<Numeral>,
    /// Repdigits skipped before analysis.
    pub excluded: Vec<Numeral>,
    lookup: BTreeMap<Numeral, u32>,
}

impl BatchAnalysis {
    /// Number of numerals that went through the driver.
    pub fn analyzed(&self) -> usize {
        self.converged_counts.len() + self.failures.len()
    }

    /// Step count of a converged numeral.
    pub fn steps_for(&self, numeral: Numeral) -> Option<u32> {
        self.lookup.get(&numeral).copied()
    }

    /// Converged numerals that took exactly `steps` iterations.
    pub fn examples_with_steps(&self, steps: u32) -> impl Iterator<Item = Numeral> + '_ {
        self.lookup
            .iter()
            .filter(move |&(_, &count)| count == steps)
            .map(|(&numeral, _)| numeral)
    }

    fn record(&mut self, numeral: Numeral, result: StepResult) {
        match result {
            StepResult::Converged { steps } => {
                self.converged_counts.push(steps);
                self.lookup.insert(numeral, steps);
            }
            StepResult::Failed(reason) => {
                debug!(%numeral, ?reason, "numeral did not reach 6174");
                self.failures.push(numeral);
            }
        }
    }
}

/// Classifies every non-repdigit numeral.
pub fn analyze_all(max_iterations: u32) -> BatchAnalysis {
    analyze(Numeral::all(), max_iterations)
}

/// Classifies the given numerals, skipping repdigits.
pub fn analyze<I>(numerals: I, max_iterations: u32) -> BatchAnalysis
where
    I: IntoIterator<Item = Numeral>,
{
    let mut analysis = BatchAnalysis::default();

    for numeral in numerals {
        if numeral.is_repdigit() {
            analysis.excluded.push(numeral);
            continue;
        }
        let result = routine::steps_to_constant(numeral, max_iterations);
        analysis.record(numeral, result);
    }

    debug!(
        analyzed = analysis.analyzed(),
        converged = analysis.converged_counts.len(),
        failed = analysis.failures.len(),
        excluded = analysis.excluded.len(),
        "batch analysis finished"
    );
    analysis
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
