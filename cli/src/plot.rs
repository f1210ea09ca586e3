//! PNG rendering of the step-count distribution.
//!
//! Bars are drawn one per step count with the count underneath and the
//! frequency on top. The mean is marked by a dashed vertical line, and the
//! slowest bar is highlighted under a note naming its step count and the
//! first few numerals that need it. Labels use a built-in 3x5 font so no font
//! files are needed.

use std::path::Path;

use anyhow::Context;
use image::{ImageFormat, Rgba, RgbaImage};

use kaprekar_core::stats::{Histogram, Summary};

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 500;

const MARGIN_LEFT: u32 = 60;
const MARGIN_RIGHT: u32 = 30;
const MARGIN_TOP: u32 = 100;
const MARGIN_BOTTOM: u32 = 50;
const FONT_SCALE: u32 = 3;
const NOTE_SCALE: u32 = 2;
const NOTE_EXAMPLES: usize = 5;
const GRID_LINES: u32 = 5;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const AXIS: Rgba<u8> = Rgba([40, 40, 40, 255]);
const GRID: Rgba<u8> = Rgba([215, 215, 215, 255]);
pub const BAR: Rgba<u8> = Rgba([31, 119, 180, 255]);
pub const MAX_BAR: Rgba<u8> = Rgba([214, 39, 40, 255]);
pub const MEAN: Rgba<u8> = Rgba([255, 127, 14, 255]);
pub const MAX_BOX: Rgba<u8> = Rgba([245, 222, 179, 255]);
const LABEL: Rgba<u8> = Rgba([30, 30, 30, 255]);

/// Rows of each digit, three bits wide, most significant bit leftmost.
const DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b001, 0b001, 0b001],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

/// Glyph rows for the characters used outside numbers. Letters are drawn
/// upper case only.
fn glyph(ch: char) -> Option<[u8; 5]> {
    let rows = match ch.to_ascii_uppercase() {
        '0'..='9' => DIGITS[ch as usize - '0' as usize],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        _ => return None,
    };
    Some(rows)
}

/// Renders the histogram and writes it as a PNG.
pub fn save_histogram(histogram: &Histogram, summary: &Summary, path: &Path) -> anyhow::Result<()> {
    render_histogram(histogram, summary)
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("failed to write histogram to {}", path.display()))
}

pub fn render_histogram(histogram: &Histogram, summary: &Summary) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(WIDTH, HEIGHT, BACKGROUND);

    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + plot_h;
    let peak = histogram.peak().max(1) as f64;

    for i in 1..=GRID_LINES {
        let y = baseline - plot_h * i / GRID_LINES;
        fill_rect(&mut canvas, MARGIN_LEFT, y, plot_w, 1, GRID);
    }

    let slot = plot_w / histogram.bin_count().max(1) as u32;
    let bar_w = slot * 4 / 5;
    let mut note_anchor: Option<(u32, u32)> = None;

    for (idx, (steps, frequency)) in histogram.bins().enumerate() {
        let slot_x = MARGIN_LEFT + idx as u32 * slot;
        let bar_x = slot_x + (slot - bar_w) / 2;
        let bar_h = (frequency as f64 / peak * plot_h as f64).round() as u32;
        let bar_y = baseline - bar_h;
        let is_max = steps == histogram.max_steps();

        let color = if is_max { MAX_BAR } else { BAR };
        fill_rect(&mut canvas, bar_x, bar_y, bar_w, bar_h, color);

        let center = slot_x + slot / 2;
        let step_label = steps.to_string();
        draw_text(
            &mut canvas,
            &step_label,
            center.saturating_sub(text_width(&step_label, FONT_SCALE) / 2),
            baseline + 10,
            FONT_SCALE,
            LABEL,
        );

        let freq_label = frequency.to_string();
        let label_x = center.saturating_sub(text_width(&freq_label, FONT_SCALE) / 2);
        let label_y = bar_y.saturating_sub(5 * FONT_SCALE + 8);
        draw_text(&mut canvas, &freq_label, label_x, label_y, FONT_SCALE, LABEL);

        if is_max {
            note_anchor = Some((center, label_y.saturating_sub(6)));
        }
    }

    let min = histogram.min_steps() as f64;
    let mean_x = MARGIN_LEFT as f64 + (summary.mean - min + 0.5) * slot as f64;
    if mean_x >= MARGIN_LEFT as f64 && mean_x < (MARGIN_LEFT + plot_w) as f64 {
        let x = mean_x.round() as u32;
        dashed_vline(&mut canvas, x, MARGIN_TOP, baseline, MEAN);
        let mean_label = format!("{:.2}", summary.mean);
        draw_text(
            &mut canvas,
            &mean_label,
            x + 6,
            baseline + 16 + 5 * FONT_SCALE,
            FONT_SCALE,
            MEAN,
        );
    }

    if let Some((center, bottom)) = note_anchor {
        draw_note(&mut canvas, &max_note(summary), center, bottom);
    }

    fill_rect(&mut canvas, MARGIN_LEFT, MARGIN_TOP, 2, plot_h + 1, AXIS);
    fill_rect(&mut canvas, MARGIN_LEFT, baseline, plot_w, 2, AXIS);

    canvas
}

/// Lines of the note placed over the slowest bar.
fn max_note(summary: &Summary) -> Vec<String> {
    let mut lines = vec![format!("Max {} steps", summary.max_steps)];
    if !summary.max_examples.is_empty() {
        let examples: Vec<String> = summary
            .max_examples
            .iter()
            .take(NOTE_EXAMPLES)
            .map(|n| n.to_string())
            .collect();
        lines.push(format!("Examples: {}", examples.join(", ")));
    }
    lines
}

/// Draws `lines` in a box centred on `center` whose bottom edge sits at
/// `bottom`, shifted sideways to stay on the canvas.
fn draw_note(canvas: &mut RgbaImage, lines: &[String], center: u32, bottom: u32) {
    const PAD: u32 = 5;
    const GAP: u32 = 4;
    let line_h = 5 * NOTE_SCALE;

    let text_w = lines.iter().map(|l| text_width(l, NOTE_SCALE)).max().unwrap_or(0);
    let box_w = text_w + 2 * PAD;
    let box_h = lines.len() as u32 * (line_h + GAP) - GAP + 2 * PAD;

    let x = center
        .saturating_sub(box_w / 2)
        .min(WIDTH.saturating_sub(box_w + MARGIN_RIGHT))
        .max(MARGIN_LEFT);
    let y = bottom.saturating_sub(box_h);

    fill_rect(canvas, x, y, box_w, box_h, MAX_BOX);
    for (i, line) in lines.iter().enumerate() {
        let line_y = y + PAD + i as u32 * (line_h + GAP);
        draw_text(canvas, line, x + PAD, line_y, NOTE_SCALE, LABEL);
    }
}

/// Width in pixels of `text` at the given scale.
fn text_width(text: &str, scale: u32) -> u32 {
    let glyphs = text.chars().count() as u32;
    (glyphs * 4).saturating_sub(1) * scale
}

/// Draws `text` with the built-in font; characters without a glyph, such as
/// spaces, leave a blank cell.
fn draw_text(canvas: &mut RgbaImage, text: &str, x: u32, y: u32, scale: u32, color: Rgba<u8>) {
    for (i, ch) in text.chars().enumerate() {
        let Some(rows) = glyph(ch) else {
            continue;
        };
        let gx = x + i as u32 * 4 * scale;
        for (row, &bits) in rows.iter().enumerate() {
            for col in 0..3u32 {
                if (bits >> (2 - col)) & 1 == 1 {
                    fill_rect(
                        canvas,
                        gx + col * scale,
                        y + row as u32 * scale,
                        scale,
                        scale,
                        color,
                    );
                }
            }
        }
    }
}

fn dashed_vline(canvas: &mut RgbaImage, x: u32, top: u32, bottom: u32, color: Rgba<u8>) {
    const DASH: u32 = 8;
    let mut y = top;
    while y < bottom {
        let len = DASH.min(bottom - y);
        fill_rect(canvas, x, y, 2, len, color);
        y += DASH * 2;
    }
}

/// Fill a rectangle on the canvas with a solid color.
fn fill_rect(canvas: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, color: Rgba<u8>) {
    let (cw, ch) = (canvas.width(), canvas.height());
    for dy in 0..h {
        for dx in 0..w {
            let px = x + dx;
            let py = y + dy;
            if px < cw && py < ch {
                canvas.put_pixel(px, py, color);
            }
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use kaprekar_common::config::DEFAULT_MAX_ITERATIONS;
    use kaprekar_core::analyzer::analyze_all;

    fn full_domain() -> (Histogram, Summary) {
        let analysis = analyze_all(DEFAULT_MAX_ITERATIONS);
        let summary = Summary::from_analysis(&analysis).unwrap();
        let histogram = Histogram::from_counts(&analysis.converged_counts).unwrap();
        (histogram, summary)
    }

    #[test]
    fn test_render_marks_bars_mean_and_max() {
        let (histogram, summary) = full_domain();
        let image = render_histogram(&histogram, &summary);

        assert_eq!(image.dimensions(), (WIDTH, HEIGHT));
        assert!(image.pixels().any(|p| *p == BAR));
        assert!(image.pixels().any(|p| *p == MAX_BAR));
        assert!(image.pixels().any(|p| *p == MEAN));
    }

    #[test]
    fn test_single_bin_histogram() {
        let histogram = Histogram::from_counts(&[3, 3, 3]).unwrap();
        let summary = Summary {
            tested: 3,
            mean: 3.0,
            max_steps: 3,
            max_examples: Vec::new(),
        };
        let image = render_histogram(&histogram, &summary);
        assert!(image.pixels().any(|p| *p == MAX_BAR));
        assert!(!image.pixels().any(|p| *p == BAR));
    }

    #[test]
    fn test_save_writes_png() {
        let (histogram, summary) = full_domain();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hist.png");

        save_histogram(&histogram, &summary, &path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.to_rgba8().dimensions(), (WIDTH, HEIGHT));
    }

    #[test]
    fn test_save_reports_bad_path() {
        let (histogram, summary) = full_domain();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("hist.png");

        let err = save_histogram(&histogram, &summary, &path).unwrap_err();
        assert!(err.to_string().contains("failed to write histogram"));
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("7", FONT_SCALE), 3 * FONT_SCALE);
        assert_eq!(text_width("10", FONT_SCALE), 7 * FONT_SCALE);
        assert_eq!(text_width("", NOTE_SCALE), 0);
    }

    #[test]
    fn test_max_note_names_slowest_numerals() {
        let (_, summary) = full_domain();
        assert_eq!(
            max_note(&summary),
            ["Max 7 steps", "Examples: 0014, 0015, 0016, 0025, 0041"]
        );

        let lonely = Summary {
            max_examples: Vec::new(),
            ..summary
        };
        assert_eq!(max_note(&lonely), ["Max 7 steps"]);
    }

    #[test]
    fn test_max_note_has_a_glyph_for_every_character() {
        let (_, summary) = full_domain();
        for line in max_note(&summary) {
            for ch in line.chars().filter(|c| *c != ' ') {
                assert!(glyph(ch).is_some(), "no glyph for {ch:?} in {line:?}");
            }
        }
    }

    #[test]
    fn test_render_draws_max_note_with_examples() {
        let (histogram, summary) = full_domain();
        let with_examples = render_histogram(&histogram, &summary);
        let without_examples = render_histogram(
            &histogram,
            &Summary {
                max_examples: Vec::new(),
                ..summary.clone()
            },
        );

        let note_pixels = |image: &RgbaImage| image.pixels().filter(|p| **p == MAX_BOX).count();
        assert!(note_pixels(&without_examples) > 0);
        // The examples line widens and deepens the note box.
        assert!(note_pixels(&with_examples) > note_pixels(&without_examples));

        // The examples line itself is drawn in the label color.
        let text_pixels = |image: &RgbaImage| image.pixels().filter(|p| **p == LABEL).count();
        assert!(text_pixels(&with_examples) > text_pixels(&without_examples));

        // The note sits above the slowest bar, inside the top margin area.
        let top_rows = with_examples
            .enumerate_pixels()
            .filter(|(_, y, p)| *y < MARGIN_TOP + 40 && **p == MAX_BOX)
            .count();
        assert!(top_rows > 0);
    }
}
