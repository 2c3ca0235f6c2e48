// File: crates/bandchart-core/src/grid.rs
// Summary: Horizontal grid-line layout: fixed fractional heights and their integer value labels.

use crate::scale::ValueRange;
use crate::types::FALLBACK_RANGE;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// One horizontal grid line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    /// Fraction of plot height from the top, in `[0, 1]`.
    pub fraction: f64,
    /// Pixel offset from the top of the plot.
    pub y: f64,
    pub label: i64,
    /// Interior lines are drawn dashed; top and bottom are solid.
    pub dashed: bool,
}

impl GridLine {
    pub fn offset_by(mut self, dy: f64) -> Self {
        self.y += dy;
        self
    }
}

/// Fractional heights for `category_count` categories:
/// none for 0, top and bottom for 1..=3, quarters for 4 or more.
pub fn grid_fractions(category_count: usize) -> Vec<f64> {
    match category_count {
        0 => Vec::new(),
        1..=3 => vec![0.0, 1.0],
        _ => linspace(0.0, 1.0, 5),
    }
}

/// Value shown next to the grid line at `fraction`.
///
/// With a usable range: `round((1 - f) * span) + round(min)`. Otherwise the
/// fixed 4 x 100 fallback scale: `round((1 - f) * 400)`.
pub fn grid_label(fraction: f64, range: Option<&ValueRange>) -> i64 {
    match range {
        Some(r) if r.has_positive_span() => ((1.0 - fraction) * r.span()).round() as i64 + r.min.round() as i64,
        _ => ((1.0 - fraction) * FALLBACK_RANGE).round() as i64,
    }
}

/// Grid lines for a plot of `surface_height` pixels, top line first.
pub fn grid_lines(category_count: usize, surface_height: f64, range: Option<&ValueRange>) -> Vec<GridLine> {
    grid_fractions(category_count)
        .into_iter()
        .map(|f| GridLine {
            fraction: f,
            y: f * surface_height,
            label: grid_label(f, range),
            dashed: f > 0.0 && f < 1.0,
        })
        .collect()
}
