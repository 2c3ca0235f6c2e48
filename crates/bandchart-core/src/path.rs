// File: crates/bandchart-core/src/path.rs
// Summary: Renderer-agnostic path model; smooth curves and closed band areas built from control points.

use std::fmt::Write as _;

use crate::curve::control_points_for;
use crate::geometry::{cubic_point, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
    /// Straight edge back to the start of the current subpath.
    Close,
}

/// Ordered drawing commands, ready for a platform path API or SVG.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Point) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Point) {
        self.commands.push(PathCommand::LineTo(p));
    }

    pub fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.commands.push(PathCommand::CubicTo { ctrl1, ctrl2, to });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Point of the first `MoveTo`, if any.
    pub fn start_point(&self) -> Option<Point> {
        self.commands.iter().find_map(|c| match c {
            PathCommand::MoveTo(p) => Some(*p),
            _ => None,
        })
    }

    /// Pen position after the last command; `Close` returns to the subpath start.
    pub fn current_point(&self) -> Option<Point> {
        let mut subpath_start = None;
        let mut current = None;
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    subpath_start = Some(p);
                    current = Some(p);
                }
                PathCommand::LineTo(p) | PathCommand::CubicTo { to: p, .. } => current = Some(p),
                PathCommand::Close => current = subpath_start,
            }
        }
        current
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Append cubic segments through `points[1..]`. The pen must already sit on `points[0]`.
    fn append_curve(&mut self, points: &[Point]) {
        let segments = control_points_for(points);
        for (seg, &to) in segments.iter().zip(points.iter().skip(1)) {
            self.cubic_to(seg.control_point1, seg.control_point2, to);
        }
    }

    /// Sample every cubic into `steps_per_curve` line segments.
    /// Returns one polyline per subpath; closed subpaths end on their start point.
    pub fn flatten(&self, steps_per_curve: usize) -> Vec<Vec<Point>> {
        let steps = steps_per_curve.max(1);
        let mut out: Vec<Vec<Point>> = Vec::new();
        let mut pen = Point::default();
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    out.push(vec![p]);
                    pen = p;
                }
                PathCommand::LineTo(p) => {
                    if let Some(poly) = out.last_mut() { poly.push(p); }
                    pen = p;
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    if let Some(poly) = out.last_mut() {
                        for k in 1..=steps {
                            let t = k as f64 / steps as f64;
                            poly.push(cubic_point(pen, ctrl1, ctrl2, to, t));
                        }
                    }
                    pen = to;
                }
                PathCommand::Close => {
                    if let Some(poly) = out.last_mut() {
                        if let Some(&first) = poly.first() {
                            poly.push(first);
                            pen = first;
                        }
                    }
                }
            }
        }
        out
    }

    /// SVG path data (`d` attribute), e.g. `M0 0 C3 0 7 0 10 0 Z`.
    pub fn to_svg_data(&self) -> String {
        let mut out = String::new();
        for cmd in &self.commands {
            if !out.is_empty() { out.push(' '); }
            match *cmd {
                PathCommand::MoveTo(p) => { out.push('M'); push_point(&mut out, p); }
                PathCommand::LineTo(p) => { out.push('L'); push_point(&mut out, p); }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    out.push('C');
                    push_point(&mut out, ctrl1);
                    out.push(' ');
                    push_point(&mut out, ctrl2);
                    out.push(' ');
                    push_point(&mut out, to);
                }
                PathCommand::Close => out.push('Z'),
            }
        }
        out
    }
}

fn push_point(out: &mut String, p: Point) {
    push_num(out, p.x);
    out.push(' ');
    push_num(out, p.y);
}

/// Two decimals, trailing zeros trimmed, no negative zero.
fn push_num(out: &mut String, v: f64) {
    let mut s = String::new();
    let _ = write!(s, "{:.2}", v);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" { s = "0".to_string(); }
    out.push_str(&s);
}

/// Boundary of a closed band: upper edge traced left to right, lower edge right to left.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AreaData {
    pub left_to_right: Vec<Point>,
    pub right_to_left: Vec<Point>,
}

impl AreaData {
    pub fn new(left_to_right: Vec<Point>, right_to_left: Vec<Point>) -> Self {
        Self { left_to_right, right_to_left }
    }

    /// Split the 2N ring produced by the band scaler into its two halves.
    /// An odd-length input puts the extra point on the upper edge.
    pub fn from_band_points(points: &[Point]) -> Self {
        let mid = points.len().div_ceil(2);
        let (upper, lower) = points.split_at(mid);
        Self::new(upper.to_vec(), lower.to_vec())
    }
}

/// Smooth open path through `points`. `None` when `points` is empty.
pub fn curved_path_through(points: &[Point]) -> Option<Path> {
    let first = *points.first()?;
    let mut path = Path::new();
    path.move_to(first);
    path.append_curve(points);
    Some(path)
}

/// Closed band path: curve along `left_to_right`, straight edge to
/// `right_to_left[0]`, curve along `right_to_left`, close.
///
/// Each edge is smoothed on its own; tangents do not carry across the
/// straight connecting edges. `None` when `left_to_right` is empty.
pub fn area_path_for(area: &AreaData) -> Option<Path> {
    let mut path = curved_path_through(&area.left_to_right)?;
    if let Some(&first) = area.right_to_left.first() {
        path.line_to(first);
        path.append_curve(&area.right_to_left);
    }
    path.close();
    Some(path)
}
