// File: crates/bandchart-core/src/types.rs
// Summary: Shared constants and layout configuration (margins, spacing, headroom).

/// Default surface width in pixels.
pub const WIDTH: f64 = 375.0;
/// Default surface height in pixels.
pub const HEIGHT: f64 = 300.0;

/// Multiplier applied to the value range so the plotted maximum clears the top edge.
pub const HEADROOM_FACTOR: f64 = 1.10;

/// Value span substituted when every value in a band is equal (4 x 100).
pub const FALLBACK_RANGE: f64 = 4.0 * 100.0;

/// Fixed layout constants supplied by the hosting chart view, in pixels.
/// Contract: all spacing fields are non-negative, `headroom_factor` is positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Reserved above the first grid line.
    pub top_space: f64,
    /// Reserved below the chart for category labels.
    pub bottom_space: f64,
    /// Horizontal spacing between categories.
    pub line_gap: f64,
    /// X offset of the first category.
    pub left_margin: f64,
    pub headroom_factor: f64,
}

impl LayoutConfig {
    pub const fn new(top_space: f64, bottom_space: f64, line_gap: f64, left_margin: f64) -> Self {
        Self { top_space, bottom_space, line_gap, left_margin, headroom_factor: HEADROOM_FACTOR }
    }
    pub fn with_top_space(mut self, px: f64) -> Self { self.top_space = px.max(0.0); self }
    pub fn with_bottom_space(mut self, px: f64) -> Self { self.bottom_space = px.max(0.0); self }
    pub fn with_line_gap(mut self, px: f64) -> Self { self.line_gap = px.max(0.0); self }
    pub fn with_left_margin(mut self, px: f64) -> Self { self.left_margin = px.max(0.0); self }
    /// Non-positive or non-finite factors are ignored.
    pub fn with_headroom_factor(mut self, factor: f64) -> Self {
        if factor.is_finite() && factor > 0.0 {
            self.headroom_factor = factor;
        }
        self
    }
    /// Total vertical space not available to the plot (top + bottom).
    pub fn vsum(&self) -> f64 { self.top_space + self.bottom_space }
    /// Plot height left on a surface of `surface_height` pixels.
    pub fn plot_height(&self, surface_height: f64) -> f64 {
        (surface_height - self.vsum()).max(0.0)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(40.0, 40.0, 60.0, 30.0)
    }
}
