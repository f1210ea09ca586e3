use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Progress bar for the full-domain run. Hidden when any quiet level is set.
pub fn batch_progress(len: u64, q_level: u8) -> ProgressBar {
    if q_level > 0 {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    let style = ProgressStyle::with_template("{spinner:.blue} {msg} [{bar:32.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .tick_strings(TICKS)
        .progress_chars("█▉▊▋▌▍▎▏ ");

    pb.set_style(style);
    pb.set_message("Iterating");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
