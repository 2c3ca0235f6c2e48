// File: crates/bandchart-core/src/lib.rs
// Summary: Core library entry point; exports the curve interpolator and band-chart layout API.

pub mod log;
pub mod error;
pub mod types;
pub mod geometry;
pub mod curve;
pub mod path;
pub mod series;
pub mod scale;
pub mod grid;
pub mod chart;

pub use chart::{AxisLabel, BandChart, ChartLayout};
pub use curve::{control_points_for, CurvedSegment, SMOOTHING_FRACTION};
pub use error::{ChartError, SeriesKind};
pub use geometry::{Point, Size};
pub use grid::{grid_fractions, grid_lines, GridLine};
pub use path::{area_path_for, curved_path_through, AreaData, Path, PathCommand};
pub use scale::{scale_to_coordinates, scale_to_coordinates_with_headroom, CategoryScale, ValueRange, ValueScale};
pub use series::{LineModel, PointEntry};
pub use types::{LayoutConfig, FALLBACK_RANGE, HEADROOM_FACTOR};
