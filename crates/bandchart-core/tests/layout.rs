// File: crates/bandchart-core/tests/layout.rs
// Purpose: End-to-end layout pass over a percentile band.

use assert_approx_eq::assert_approx_eq;
use bandchart_core::{BandChart, ChartError, LayoutConfig, LineModel, PointEntry, SeriesKind, Size};

fn band(lower: &[f64], upper: &[f64]) -> LineModel {
    let lo = lower.iter().enumerate().map(|(i, &v)| PointEntry::new(v, format!("W{}", i + 1))).collect();
    let hi = upper.iter().enumerate().map(|(i, &v)| PointEntry::new(v, format!("W{}", i + 1))).collect();
    LineModel::try_new(lo, hi).expect("valid band")
}

#[test]
fn model_rejects_bad_input() {
    let e = |v: f64| PointEntry::new(v, "x");
    assert_eq!(LineModel::try_new(vec![], vec![e(1.0)]).unwrap_err(), ChartError::EmptySeries);
    assert_eq!(
        LineModel::try_new(vec![e(1.0)], vec![e(1.0), e(2.0)]).unwrap_err(),
        ChartError::MismatchedSeriesLength { upper: 2, lower: 1 }
    );
    assert_eq!(
        LineModel::try_new(vec![e(1.0), e(2.0)], vec![e(1.0), e(f64::NAN)]).unwrap_err(),
        ChartError::NonFiniteValue { series: SeriesKind::Upper, index: 1 }
    );
}

#[test]
fn entries_order_by_value_only() {
    let a = PointEntry::new(1.0, "zzz");
    let b = PointEntry::new(2.0, "aaa");
    assert!(a < b);
    assert_eq!(PointEntry::new(3.0, "x"), PointEntry::new(3.0, "y"));
}

#[test]
fn layout_places_band_inside_plot() {
    let chart = BandChart::new(band(&[0.0, 10.0, 20.0, 15.0, 5.0], &[40.0, 100.0, 80.0, 60.0, 50.0]));
    let cfg = chart.config;
    let surface = Size::new(320.0, 280.0);
    let layout = chart.layout(surface);

    assert_approx_eq!(layout.plot_top, cfg.top_space);
    assert_approx_eq!(layout.plot_height, 280.0 - cfg.top_space - cfg.bottom_space);
    assert_eq!(layout.upper_points().len(), 5);
    assert_eq!(layout.lower_points().len(), 5);

    let bottom = layout.plot_top + layout.plot_height;
    for p in layout.upper_points().iter().chain(layout.lower_points()) {
        assert!(p.y >= layout.plot_top && p.y <= bottom + 1e-9, "{p:?} outside plot");
    }
    // minimum (lower[0]) on the bottom edge, traced last
    assert_approx_eq!(layout.lower_points()[4].y, bottom);
    assert_approx_eq!(layout.lower_points()[4].x, cfg.left_margin);
    // maximum (upper[1]) leaves headroom
    let expected = layout.plot_top + layout.plot_height * (1.0 - 100.0 / 110.0);
    assert_approx_eq!(layout.upper_points()[1].y, expected, 1e-9);
}

#[test]
fn layout_paths_and_grid() {
    let chart = BandChart::new(band(&[0.0, 10.0, 20.0, 15.0, 5.0], &[40.0, 100.0, 80.0, 60.0, 50.0]));
    let layout = chart.layout(Size::new(320.0, 280.0));

    let area = layout.area_path.as_ref().expect("area path");
    assert!(area.is_closed());
    assert_eq!(area.start_point(), Some(layout.upper_points()[0]));
    assert_eq!(layout.upper_path.as_ref().map(|p| p.len()), Some(5));
    assert_eq!(layout.lower_path.as_ref().map(|p| p.len()), Some(5));

    assert_eq!(layout.grid.len(), 5);
    assert_approx_eq!(layout.grid[0].y, layout.plot_top);
    assert_approx_eq!(layout.grid[4].y, layout.plot_top + layout.plot_height);
    assert_eq!(layout.grid[0].label, 110);
    assert_eq!(layout.grid[4].label, 0);
}

#[test]
fn labels_and_scrollable_width() {
    let cfg = LayoutConfig::default().with_line_gap(100.0).with_left_margin(20.0);
    let chart = BandChart::new(band(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2.0, 3.0, 4.0, 5.0, 6.0, 7.0])).with_config(cfg);
    let layout = chart.layout(Size::new(200.0, 300.0));

    let texts: Vec<&str> = layout.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["W1", "W2", "W3", "W4", "W5", "W6"]);
    assert_approx_eq!(layout.labels[5].x, 520.0);
    assert_approx_eq!(layout.labels[0].y, 300.0 - cfg.bottom_space * 0.5);
    assert_approx_eq!(layout.content_size.width, 540.0);

    // narrow data never shrinks the view below the surface
    let small = BandChart::new(band(&[1.0, 2.0], &[3.0, 4.0])).layout(Size::new(400.0, 300.0));
    assert_approx_eq!(small.content_size.width, 400.0);
    assert_eq!(small.grid.len(), 2);
}

#[test]
fn flat_band_lays_out_finite_geometry() {
    let chart = BandChart::new(band(&[50.0; 5], &[50.0; 5]));
    let layout = chart.layout(Size::new(375.0, 300.0));
    assert!(layout.upper_points().iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    let labels: Vec<i64> = layout.grid.iter().map(|g| g.label).collect();
    assert_eq!(labels, vec![400, 300, 200, 100, 0]);
}

#[test]
fn relayout_tracks_surface_size() {
    let chart = BandChart::new(band(&[0.0, 10.0, 5.0], &[20.0, 30.0, 25.0]));
    let a = chart.layout(Size::new(300.0, 200.0));
    let b = chart.layout(Size::new(300.0, 400.0));
    assert!(b.plot_height > a.plot_height);
    assert_ne!(a.upper_points(), b.upper_points());
    assert_eq!(a, chart.layout(Size::new(300.0, 200.0)));
}

#[test]
fn tiny_surface_collapses_plot() {
    let chart = BandChart::new(band(&[0.0, 1.0], &[2.0, 3.0]));
    let layout = chart.layout(Size::new(100.0, 30.0));
    assert_eq!(layout.plot_height, 0.0);
    assert!(layout.upper_points().iter().all(|p| p.y == layout.plot_top));
}
