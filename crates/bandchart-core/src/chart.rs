// File: crates/bandchart-core/src/chart.rs
// Summary: BandChart and the full layout pass (scaled points, smooth paths, grid, category labels).

use crate::geometry::{Point, Size};
use crate::grid::{grid_lines, GridLine};
use crate::log::debug;
use crate::path::{area_path_for, curved_path_through, AreaData, Path};
use crate::scale::{scale_to_coordinates_with_headroom, CategoryScale};
use crate::series::LineModel;
use crate::types::LayoutConfig;

/// Category label anchored under its column.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    pub x: f64,
    /// Vertical centre of the bottom label strip.
    pub y: f64,
    pub text: String,
}

/// Everything a renderer needs for one frame. Rebuilt from scratch on each layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    /// Scrollable content size; at least the surface size.
    pub content_size: Size,
    pub plot_top: f64,
    pub plot_height: f64,
    pub area: AreaData,
    pub area_path: Option<Path>,
    pub upper_path: Option<Path>,
    pub lower_path: Option<Path>,
    pub grid: Vec<GridLine>,
    pub labels: Vec<AxisLabel>,
}

impl ChartLayout {
    /// Upper-bound points, left to right.
    pub fn upper_points(&self) -> &[Point] {
        &self.area.left_to_right
    }

    /// Lower-bound points, right to left.
    pub fn lower_points(&self) -> &[Point] {
        &self.area.right_to_left
    }
}

pub struct BandChart {
    pub model: LineModel,
    pub config: LayoutConfig,
}

impl BandChart {
    pub fn new(model: LineModel) -> Self {
        Self { model, config: LayoutConfig::default() }
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn category_scale(&self) -> CategoryScale {
        CategoryScale::new(self.config.left_margin, self.config.line_gap)
    }

    /// Lay the band out on a surface of `surface` pixels.
    pub fn layout(&self, surface: Size) -> ChartLayout {
        let cfg = &self.config;
        let n = self.model.len();
        let plot_top = cfg.top_space;
        let plot_height = cfg.plot_height(surface.height);
        let range = self.model.value_range(cfg.headroom_factor);
        debug!(categories = n, width = surface.width, height = surface.height, span = range.span(), "band layout pass");

        // LineModel guarantees equal, non-empty series, so scaling cannot fail here.
        let ring = scale_to_coordinates_with_headroom(
            self.model.upper(),
            Some(self.model.lower()),
            plot_height,
            cfg.line_gap,
            cfg.left_margin,
            cfg.headroom_factor,
        )
        .unwrap_or_default();
        let ring: Vec<Point> = ring.into_iter().map(|p| p.translated(0.0, plot_top)).collect();
        let area = AreaData::from_band_points(&ring);

        let grid = grid_lines(n, plot_height, Some(&range))
            .into_iter()
            .map(|g| g.offset_by(plot_top))
            .collect();

        let xs = self.category_scale();
        let label_y = plot_top + plot_height + cfg.bottom_space * 0.5;
        let labels = self
            .model
            .labels()
            .enumerate()
            .map(|(i, text)| AxisLabel { x: xs.to_px(i), y: label_y, text: text.to_string() })
            .collect();

        let content_size = Size::new(xs.content_width(n).max(surface.width), surface.height);

        ChartLayout {
            content_size,
            plot_top,
            plot_height,
            area_path: area_path_for(&area),
            upper_path: curved_path_through(&area.left_to_right),
            lower_path: curved_path_through(&area.right_to_left),
            area,
            grid,
            labels,
        }
    }
}
