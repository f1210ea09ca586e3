use std::path::Path;
use std::time::{Duration, Instant};

use colored::*;
use indicatif::ProgressIterator;
use tracing::info_span;

use crate::plot;
use crate::terminal::{colors, format, print, spinner};
use kaprekar_common::{config::Config, numeral::Numeral, success, warn};
use kaprekar_core::analyzer::{self, BatchAnalysis};
use kaprekar_core::stats::{Histogram, Summary};

const MAX_EXAMPLES_SHOWN: usize = 10;
const FAILURE_SAMPLE: usize = 5;
const CHART_WIDTH: usize = 40;

pub fn batch(output: Option<&Path>, cfg: &Config) -> anyhow::Result<()> {
    let span = info_span!("batch", max_iterations = cfg.max_iterations);
    let guard = span.enter();

    let start_time: Instant = Instant::now();
    let pb = spinner::batch_progress(Numeral::DOMAIN_SIZE as u64, cfg.quiet);
    let analysis: BatchAnalysis =
        analyzer::analyze(Numeral::all().progress_with(pb.clone()), cfg.max_iterations);
    pb.finish_and_clear();

    drop(guard);

    let Some(summary) = Summary::from_analysis(&analysis) else {
        warn!("No counts to analyze.");
        report_failures(&analysis, cfg);
        return Ok(());
    };

    print_summary(&summary, cfg);
    report_failures(&analysis, cfg);

    if let Some(histogram) = Histogram::from_counts(&analysis.converged_counts) {
        if cfg.quiet == 0 {
            print_chart(&histogram, &summary);
        }
        if let Some(path) = output {
            plot::save_histogram(&histogram, &summary, path)?;
            success!("Histogram saved to {}", path.display());
        }
    }

    print_elapsed(start_time.elapsed(), cfg);
    Ok(())
}

fn print_summary(summary: &Summary, cfg: &Config) {
    let examples: String = format::numeral_list(&summary.max_examples, MAX_EXAMPLES_SHOWN);

    if cfg.quiet >= 2 {
        print::print(&format!(
            "tested={} mean={:.3} max={} examples={}",
            summary.tested, summary.mean, summary.max_steps, examples
        ));
        return;
    }

    let keys = ["Tested", "Average steps", "Maximum steps", "Slowest"];
    print::set_key_width(&keys);
    print::aligned_line(keys[0], format!("{} numbers (excluded repdigits)", summary.tested));
    print::aligned_line(
        keys[1],
        format!("{:.3}", summary.mean).color(colors::ACCENT).bold(),
    );
    print::aligned_line(
        keys[2],
        summary.max_steps.to_string().color(colors::ACCENT).bold(),
    );
    print::aligned_line(
        keys[3],
        format!("{} ({} total)", examples, summary.max_examples.len()),
    );
}

/// Horizontal bar chart of the distribution, one row per step count.
fn print_chart(histogram: &Histogram, summary: &Summary) {
    print::header("steps to reach 6174", 0);
    let peak: usize = histogram.peak().max(1);

    for (steps, frequency) in histogram.bins() {
        let len: usize = (frequency * CHART_WIDTH).div_ceil(peak);
        let bar: ColoredString = if steps == summary.max_steps {
            "█".repeat(len).color(colors::ACCENT)
        } else {
            "█".repeat(len).color(colors::BAR)
        };
        let marker: ColoredString = match mean_marker(steps, summary.mean) {
            Some(marker) => marker.color(colors::SEPARATOR),
            None => "".normal(),
        };
        print::print(&format!(
            " {:>2} {} {} {}{}",
            steps,
            "│".color(colors::SEPARATOR),
            bar,
            frequency.to_string().color(colors::TEXT_DEFAULT),
            marker
        ));
    }
}

/// Label for the chart row nearest to the mean, carrying the exact value.
fn mean_marker(steps: u32, mean: f64) -> Option<String> {
    (mean.round() as u32 == steps).then(|| format!(" ◀ mean {mean:.2}"))
}

fn report_failures(analysis: &BatchAnalysis, cfg: &Config) {
    if analysis.failures.is_empty() {
        return;
    }
    warn!(
        "{} numbers failed to reach 6174 within {} iterations. Sample: {}",
        analysis.failures.len(),
        cfg.max_iterations,
        format::numeral_list(&analysis.failures, FAILURE_SAMPLE)
    );
}

fn print_elapsed(total_time: Duration, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = format!("Analysis complete in {total_time}");
    print::fat_separator();
    print::centerln(&output);
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
