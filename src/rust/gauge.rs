use std::fmt::Write as _;

use serde::Serialize;

use crate::palette::ColorMap;
use crate::pipeline::Submission;
use crate::scores::NormalizedTopK;

/// Gauges per row of the dashboard grid
pub const GRID_COLUMNS: usize = 2;
pub const THRESHOLD: f64 = 50.0;
const BAR_WIDTH: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeStep {
    pub range: [f64; 2],
    pub color: &'static str,
}

/// Layout of one gauge indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeSpec {
    pub row: usize,
    pub col: usize,
    pub title: String,
    pub value: f64,
    pub axis: [f64; 2],
    pub bar_color: &'static str,
    pub border_color: &'static str,
    pub steps: [GaugeStep; 3],
    pub threshold: f64,
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lays out one gauge per entry, filling the grid row by row.
pub fn layout(top: &NormalizedTopK, colors: &ColorMap) -> Vec<GaugeSpec> {
    top.iter()
        .enumerate()
        .map(|(i, entry)| {
            let palette = colors.palette_for(&entry.label);
            GaugeSpec {
                row: i / GRID_COLUMNS,
                col: i % GRID_COLUMNS,
                title: capitalize(&entry.label),
                value: entry.display_value,
                axis: [0.0, 100.0],
                bar_color: palette[3],
                border_color: palette[1],
                steps: [
                    GaugeStep {
                        range: [0.0, 33.0],
                        color: palette[0],
                    },
                    GaugeStep {
                        range: [33.0, 66.0],
                        color: palette[1],
                    },
                    GaugeStep {
                        range: [66.0, 100.0],
                        color: palette[2],
                    },
                ],
                threshold: THRESHOLD,
            }
        })
        .collect()
}

/// Text rendering of a gauge as a horizontal bar.
pub fn render_gauge(gauge: &GaugeSpec) -> String {
    let filled = ((gauge.value.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    let mark = ((THRESHOLD / 100.0) * BAR_WIDTH as f64).round() as usize;
    let bar: String = (0..BAR_WIDTH)
        .map(|i| match (i < filled, i == mark) {
            (_, true) => '|',
            (true, false) => '#',
            (false, false) => '-',
        })
        .collect();
    format!("{:<15} [{}] {:>5.1}  ({})", gauge.title, bar, gauge.value, gauge.bar_color)
}

/// Full text report of a submission: gauges, then the hate-speech summary.
pub fn render_submission(submission: &Submission, colors: &ColorMap) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Emotions for: {}", submission.text);
    for gauge in layout(&submission.emotions, colors) {
        let _ = writeln!(out, "  {}", render_gauge(&gauge));
    }
    if let Some(hate) = &submission.hate {
        let _ = writeln!(
            out,
            "Hate speech: {} ({} {:.1}%)  image: {}",
            hate.category,
            hate.code,
            hate.score * 100.0,
            hate.image.display()
        );
    }
    out
}
