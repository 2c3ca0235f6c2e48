// File: crates/bandchart-core/src/series.rs
// Summary: Raw observations (value + label) and the lower/upper band model.
// Notes:
// - `PointEntry` compares by value only; labels are opaque display text.
// - `LineModel::try_new` is the only way to build a band and enforces its invariants.

use std::cmp::Ordering;

use crate::error::{ChartError, Result, SeriesKind};
use crate::scale::ValueRange;

/// One raw data observation.
#[derive(Clone, Debug)]
pub struct PointEntry {
    pub value: f64,
    pub label: String,
}

impl PointEntry {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self { value, label: label.into() }
    }
}

impl PartialEq for PointEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PointEntry {}

impl PartialOrd for PointEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PointEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

/// Smallest value in `entries`, `None` when empty.
pub fn min_value(entries: &[PointEntry]) -> Option<f64> {
    entries.iter().min().map(|e| e.value)
}

/// Largest value in `entries`, `None` when empty.
pub fn max_value(entries: &[PointEntry]) -> Option<f64> {
    entries.iter().max().map(|e| e.value)
}

/// A band between two parallel series (e.g. 10th and 90th percentile).
/// Index `i` of both series refers to the same category.
#[derive(Clone, Debug, PartialEq)]
pub struct LineModel {
    lower: Vec<PointEntry>,
    upper: Vec<PointEntry>,
}

impl LineModel {
    /// Build a band, rejecting empty or mismatched series and non-finite values.
    pub fn try_new(lower: Vec<PointEntry>, upper: Vec<PointEntry>) -> Result<Self> {
        if lower.is_empty() || upper.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        if lower.len() != upper.len() {
            return Err(ChartError::MismatchedSeriesLength { upper: upper.len(), lower: lower.len() });
        }
        check_finite(&lower, SeriesKind::Lower)?;
        check_finite(&upper, SeriesKind::Upper)?;
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> &[PointEntry] { &self.lower }
    pub fn upper(&self) -> &[PointEntry] { &self.upper }

    /// Number of categories (same for both series).
    pub fn len(&self) -> usize { self.upper.len() }

    pub fn is_empty(&self) -> bool { self.upper.is_empty() }

    /// Category labels, taken from the upper series.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.upper.iter().map(|e| e.label.as_str())
    }

    /// `min(lower)..max(upper)` with the given headroom factor.
    pub fn value_range(&self, headroom: f64) -> ValueRange {
        // try_new guarantees both series are non-empty
        let min = min_value(&self.lower).unwrap_or(0.0);
        let max = max_value(&self.upper).unwrap_or(0.0);
        ValueRange::new(min, max, headroom)
    }
}

fn check_finite(entries: &[PointEntry], series: SeriesKind) -> Result<()> {
    match entries.iter().position(|e| !e.value.is_finite()) {
        Some(index) => Err(ChartError::NonFiniteValue { series, index }),
        None => Ok(()),
    }
}
