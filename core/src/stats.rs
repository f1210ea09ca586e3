//! Summary figures and histogram bins for a [`BatchAnalysis`].

use kaprekar_common::numeral::Numeral;

use crate::analyzer::BatchAnalysis;

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Numerals that reached 6174.
    pub tested: usize,
    pub mean: f64,
    pub max_steps: u32,
    /// Every numeral needing `max_steps` iterations, ascending.
    pub max_examples: Vec<Numeral>,
}

impl Summary {
    /// Returns `None` when nothing converged.
    pub fn from_analysis(analysis: &BatchAnalysis) -> Option<Summary> {
        let counts = &analysis.converged_counts;
        let max_steps = *counts.iter().max()?;
        let total: u64 = counts.iter().map(|&c| c as u64).sum();

        Some(Summary {
            tested: counts.len(),
            mean: total as f64 / counts.len() as f64,
            max_steps,
            max_examples: analysis.examples_with_steps(max_steps).collect(),
        })
    }
}

/// Frequency of each step count, one bin per integer from the smallest to
/// the largest observed count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    min: u32,
    frequencies: Vec<usize>,
}

impl Histogram {
    pub fn from_counts(counts: &[u32]) -> Option<Histogram> {
        let min = *counts.iter().min()?;
        let max = *counts.iter().max()?;

        let mut frequencies = vec![0; (max - min) as usize + 1];
        for &count in counts {
            frequencies[(count - min) as usize] += 1;
        }
        Some(Histogram { min, frequencies })
    }

    /// `(steps, frequency)` pairs in ascending step order.
    pub fn bins(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        (self.min..).zip(self.frequencies.iter().copied())
    }

    /// Highest frequency of any bin.
    pub fn peak(&self) -> usize {
        self.frequencies.iter().copied().max().unwrap_or(0)
    }

    pub fn min_steps(&self) -> u32 {
        self.min
    }

    pub fn max_steps(&self) -> u32 {
        self.min + self.frequencies.len() as u32 - 1
    }

    /// Number of bars, including empty ones between the extremes.
    pub fn bin_count(&self) -> usize {
        self.frequencies.len()
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
