// File: crates/bandchart-core/src/curve.rs
// Summary: Cubic Bezier control points for a smooth curve through ordered points.
// Notes:
// - Two passes: naive control points at a fixed fraction along each segment,
//   then reflection smoothing around every interior point.
// - Pass 2 reads only the naive array and writes a separate output, so the
//   result does not depend on iteration order.

use crate::geometry::Point;

/// Fraction of a segment's length at which naive control points are placed.
pub const SMOOTHING_FRACTION: f64 = 0.3;

/// Control points for the cubic Bezier between two consecutive points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvedSegment {
    pub control_point1: Point,
    pub control_point2: Point,
}

impl CurvedSegment {
    pub const fn new(control_point1: Point, control_point2: Point) -> Self {
        Self { control_point1, control_point2 }
    }

    /// Straight-looking segment from `a` to `b` with control points `delta` in from each end.
    pub fn naive(a: Point, b: Point, delta: f64) -> Self {
        let step = (b - a) * delta;
        Self::new(a + step, b - step)
    }
}

/// Compute one `CurvedSegment` per adjacent pair of `points`.
///
/// Returns an empty vector for fewer than two points. With exactly two points
/// the single segment is the unsmoothed naive one. Endpoint control points
/// (`first.control_point1`, `last.control_point2`) are never smoothed.
pub fn control_points_for(points: &[Point]) -> Vec<CurvedSegment> {
    if points.len() < 2 {
        return Vec::new();
    }

    let naive: Vec<CurvedSegment> = points
        .windows(2)
        .map(|w| CurvedSegment::naive(w[0], w[1], SMOOTHING_FRACTION))
        .collect();

    let mut smoothed = naive.clone();
    for i in 1..points.len() - 1 {
        let a = points[i];
        let m = naive[i - 1].control_point2;
        let n = naive[i].control_point1;
        let m_reflected = m.reflect_across(a);
        let n_reflected = n.reflect_across(a);
        smoothed[i].control_point1 = m_reflected.midpoint(n);
        smoothed[i - 1].control_point2 = n_reflected.midpoint(m);
    }
    smoothed
}
