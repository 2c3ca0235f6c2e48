// File: crates/bandchart-core/src/scale.rs
// Summary: Category (X) and value (Y) scale transforms plus the band-to-coordinates mapping.

use crate::error::{ChartError, Result};
use crate::geometry::Point;
use crate::log::warn;
use crate::series::{max_value, min_value, PointEntry};
use crate::types::{FALLBACK_RANGE, HEADROOM_FACTOR};

/// Data extent of a band and the headroom multiplier applied on top of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
    pub headroom: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64, headroom: f64) -> Self {
        Self { min, max, headroom }
    }

    /// `min(lower)..max(upper)`; `None` when either series is empty.
    /// Without a lower series the upper series supplies both ends.
    pub fn of_band(upper: &[PointEntry], lower: Option<&[PointEntry]>, headroom: f64) -> Option<Self> {
        let min = min_value(lower.unwrap_or(upper))?;
        let max = max_value(upper)?;
        Some(Self::new(min, max, headroom))
    }

    /// `(max - min) * headroom`; may be zero.
    #[inline]
    pub fn span(&self) -> f64 {
        (self.max - self.min) * self.headroom
    }

    /// Zero or non-finite span. An inverted band (negative span) still scales.
    pub fn is_degenerate(&self) -> bool {
        let span = self.span();
        span == 0.0 || !span.is_finite()
    }

    /// Span strictly positive and finite, usable for axis labels.
    pub fn has_positive_span(&self) -> bool {
        let span = self.span();
        span.is_finite() && span > 0.0
    }

    /// Span safe to divide by: the headroom span, or `FALLBACK_RANGE` when degenerate.
    pub fn effective_span(&self) -> f64 {
        if self.is_degenerate() { FALLBACK_RANGE } else { self.span() }
    }
}

/// Vertical value scale mapping `[min, min + span]` onto `[top_px + height, top_px]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f64,
    pub height: f64,
    pub vmin: f64,
    span: f64,
}

impl ValueScale {
    pub fn new(top_px: f64, height: f64, range: &ValueRange) -> Self {
        if range.is_degenerate() {
            warn!(min = range.min, max = range.max, "degenerate value range, using fallback scale");
        }
        Self { top_px, height, vmin: range.min, span: range.effective_span() }
    }
    #[inline]
    pub fn span(&self) -> f64 { self.span }
    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        self.top_px + self.height * (1.0 - (v - self.vmin) / self.span)
    }
    #[inline]
    pub fn from_px(&self, py: f64) -> f64 {
        if self.height <= 0.0 { return self.vmin; }
        self.vmin + (1.0 - (py - self.top_px) / self.height) * self.span
    }
}

/// Horizontal category scale: fixed pixel spacing per category after a left margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategoryScale {
    pub left_px: f64,
    pub spacing: f64,
}

impl CategoryScale {
    pub const fn new(left_px: f64, spacing: f64) -> Self {
        Self { left_px, spacing }
    }
    #[inline]
    pub fn to_px(&self, index: usize) -> f64 {
        self.left_px + index as f64 * self.spacing
    }
    /// Nearest category to `px` among `count` categories, `None` when there are none.
    pub fn index_at(&self, px: f64, count: usize) -> Option<usize> {
        if count == 0 { return None; }
        if self.spacing <= 0.0 { return Some(0); }
        let raw = ((px - self.left_px) / self.spacing).round();
        Some(raw.clamp(0.0, (count - 1) as f64) as usize)
    }
    /// Horizontal extent needed to show `count` categories with the margin repeated on the right.
    pub fn content_width(&self, count: usize) -> f64 {
        if count == 0 { return 2.0 * self.left_px; }
        2.0 * self.left_px + (count - 1) as f64 * self.spacing
    }
}

/// Map a band onto a surface of `surface_height` pixels with the default 1.10 headroom.
///
/// The upper series is traced left to right, then the lower series right to
/// left, giving a closed ring of `2N` points. Without a lower series the
/// result is the `N` points of a simple line.
pub fn scale_to_coordinates(
    upper: &[PointEntry],
    lower: Option<&[PointEntry]>,
    surface_height: f64,
    x_spacing: f64,
    left_margin: f64,
) -> Result<Vec<Point>> {
    scale_to_coordinates_with_headroom(upper, lower, surface_height, x_spacing, left_margin, HEADROOM_FACTOR)
}

/// As [`scale_to_coordinates`], with an explicit headroom factor.
pub fn scale_to_coordinates_with_headroom(
    upper: &[PointEntry],
    lower: Option<&[PointEntry]>,
    surface_height: f64,
    x_spacing: f64,
    left_margin: f64,
    headroom: f64,
) -> Result<Vec<Point>> {
    if let Some(lower) = lower {
        if !upper.is_empty() && !lower.is_empty() && upper.len() != lower.len() {
            return Err(ChartError::MismatchedSeriesLength { upper: upper.len(), lower: lower.len() });
        }
    }
    let Some(range) = ValueRange::of_band(upper, lower, headroom) else {
        return Ok(Vec::new());
    };

    let ys = ValueScale::new(0.0, surface_height, &range);
    let xs = CategoryScale::new(left_margin, x_spacing);

    let mut out = Vec::with_capacity(upper.len() * if lower.is_some() { 2 } else { 1 });
    out.extend(upper.iter().enumerate().map(|(i, e)| Point::new(xs.to_px(i), ys.to_px(e.value))));
    if let Some(lower) = lower {
        out.extend(lower.iter().enumerate().rev().map(|(i, e)| Point::new(xs.to_px(i), ys.to_px(e.value))));
    }
    Ok(out)
}
