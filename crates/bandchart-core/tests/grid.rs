// File: crates/bandchart-core/tests/grid.rs
// Purpose: Grid fractions, pixel heights, labels and the degenerate-range fallback.

use assert_approx_eq::assert_approx_eq;
use bandchart_core::{grid_fractions, grid_lines, LineModel, PointEntry, ValueRange};

#[test]
fn fraction_sets_by_category_count() {
    assert!(grid_fractions(0).is_empty());
    assert_eq!(grid_fractions(1), vec![0.0, 1.0]);
    assert_eq!(grid_fractions(3), vec![0.0, 1.0]);
    assert_eq!(grid_fractions(4), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(grid_fractions(12).len(), 5);
}

#[test]
fn line_counts() {
    let range = ValueRange::new(0.0, 100.0, 1.1);
    assert_eq!(grid_lines(3, 200.0, Some(&range)).len(), 2);
    assert_eq!(grid_lines(5, 200.0, Some(&range)).len(), 5);
    assert!(grid_lines(0, 200.0, Some(&range)).is_empty());
}

#[test]
fn heights_labels_and_dashes() {
    let range = ValueRange::new(0.0, 100.0, 1.1);
    let lines = grid_lines(5, 200.0, Some(&range));
    let ys: Vec<f64> = lines.iter().map(|g| g.y).collect();
    for (got, want) in ys.iter().zip([0.0, 50.0, 100.0, 150.0, 200.0]) {
        assert_approx_eq!(*got, want);
    }
    let labels: Vec<i64> = lines.iter().map(|g| g.label).collect();
    assert_eq!(labels, vec![110, 83, 55, 28, 0]);
    let dashed: Vec<bool> = lines.iter().map(|g| g.dashed).collect();
    assert_eq!(dashed, vec![false, true, true, true, false]);
}

#[test]
fn labels_are_offset_by_minimum() {
    let range = ValueRange::new(20.0, 120.0, 1.0);
    let lines = grid_lines(2, 100.0, Some(&range));
    assert_eq!(lines[0].label, 120);
    assert_eq!(lines[1].label, 20);
}

#[test]
fn flat_band_uses_fallback_labels() {
    let flat: Vec<PointEntry> = (0..5).map(|i| PointEntry::new(50.0, format!("d{i}"))).collect();
    let model = LineModel::try_new(flat.clone(), flat).expect("model");
    let range = model.value_range(1.1);
    assert!(range.is_degenerate());
    let labels: Vec<i64> = grid_lines(model.len(), 180.0, Some(&range)).iter().map(|g| g.label).collect();
    assert_eq!(labels, vec![400, 300, 200, 100, 0]);
}

#[test]
fn missing_range_uses_fallback_labels() {
    let labels: Vec<i64> = grid_lines(2, 100.0, None).iter().map(|g| g.label).collect();
    assert_eq!(labels, vec![400, 0]);
}

#[test]
fn inverted_range_uses_fallback_labels() {
    let range = ValueRange::new(20.0, 10.0, 1.1);
    let labels: Vec<i64> = grid_lines(2, 100.0, Some(&range)).iter().map(|g| g.label).collect();
    assert_eq!(labels, vec![400, 0]);
}
