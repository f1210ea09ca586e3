#![cfg(test)]
use kaprekar_common::config::DEFAULT_MAX_ITERATIONS;
use kaprekar_common::numeral::Numeral;
use kaprekar_core::analyzer::{BatchAnalysis, analyze_all};
use kaprekar_core::routine::{self, Failure, StepResult};
use kaprekar_core::stats::{Histogram, Summary};
use kaprekar_integration_tests::{KNOWN_DISTRIBUTION, numeral};

fn full_run() -> BatchAnalysis {
    analyze_all(DEFAULT_MAX_ITERATIONS)
}

/// Every analyzable numeral is either converged or failed, and the ten
/// repdigits are in neither list.
#[test]
fn batch_partitions_whole_domain() {
    let analysis = full_run();

    assert_eq!(
        analysis.converged_counts.len() + analysis.failures.len(),
        10_000 - 10
    );
    assert_eq!(analysis.excluded.len(), 10);
    assert!(analysis.excluded.iter().all(|n| n.is_repdigit()));
    assert!(analysis.failures.iter().all(|n| !n.is_repdigit()));
}

#[test]
fn batch_has_no_failures_with_default_cap() {
    let analysis = full_run();
    assert!(
        analysis.failures.is_empty(),
        "unexpected failures: {:?}",
        &analysis.failures[..analysis.failures.len().min(5)]
    );
}

#[test]
fn batch_matches_known_distribution() {
    let analysis = full_run();
    let histogram = Histogram::from_counts(&analysis.converged_counts).unwrap();
    let bins: Vec<(u32, usize)> = histogram.bins().collect();
    assert_eq!(bins, KNOWN_DISTRIBUTION);
}

#[test]
fn summary_reports_mean_max_and_examples() {
    let analysis = full_run();
    let summary = Summary::from_analysis(&analysis).unwrap();

    assert_eq!(summary.tested, 9990);
    assert_eq!(summary.max_steps, 7);
    assert!((summary.mean - 46_637.0 / 9990.0).abs() < 1e-9);
    assert_eq!(summary.max_examples.len(), 2184);

    let first: Vec<String> = summary
        .max_examples
        .iter()
        .take(5)
        .map(|n| n.to_string())
        .collect();
    assert_eq!(first, ["0014", "0015", "0016", "0025", "0041"]);
}

#[test]
fn lookup_agrees_with_driver() {
    let analysis = full_run();
    for n in Numeral::all().filter(|n| !n.is_repdigit()) {
        assert_eq!(
            analysis.steps_for(n),
            routine::steps_to_constant(n, DEFAULT_MAX_ITERATIONS).steps(),
            "lookup mismatch for {n}"
        );
    }
}

#[test]
fn every_trajectory_stays_within_cap() {
    for n in Numeral::all() {
        let trace = routine::trace(n, DEFAULT_MAX_ITERATIONS);
        assert!(trace.steps.len() as u32 <= DEFAULT_MAX_ITERATIONS);
        assert!(trace.steps.iter().all(|s| s.next().value() <= Numeral::MAX));
    }
}

#[test]
fn tight_cap_turns_slow_numerals_into_failures() {
    let analysis = kaprekar_core::analyzer::analyze_all(3);
    let expected_converged: usize = KNOWN_DISTRIBUTION
        .iter()
        .filter(|(steps, _)| *steps <= 3)
        .map(|(_, freq)| freq)
        .sum();

    assert_eq!(analysis.converged_counts.len(), expected_converged);
    assert_eq!(analysis.failures.len(), 9990 - expected_converged);
    assert!(analysis.failures.contains(&numeral("2111")));
    assert_eq!(
        routine::steps_to_constant(numeral("2111"), 3),
        StepResult::Failed(Failure::CapReached)
    );
}

#[test]
fn known_examples_converge() {
    assert_eq!(routine::kaprekar_step(numeral("3524")), numeral("3087"));
    assert_eq!(
        routine::steps_to_constant(numeral("3524"), DEFAULT_MAX_ITERATIONS),
        StepResult::Converged { steps: 3 }
    );
    assert_eq!(
        routine::steps_to_constant(numeral("2111"), DEFAULT_MAX_ITERATIONS),
        StepResult::Converged { steps: 5 }
    );
    assert_eq!(
        routine::steps_to_constant(numeral("8532"), DEFAULT_MAX_ITERATIONS),
        StepResult::Converged { steps: 1 }
    );
}
