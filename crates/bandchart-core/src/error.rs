// File: crates/bandchart-core/src/error.rs
// Summary: Error type for input-contract violations in series and layout.

use thiserror::Error;

/// Which half of a band a value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    Lower,
    Upper,
}

impl std::fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesKind::Lower => f.write_str("lower"),
            SeriesKind::Upper => f.write_str("upper"),
        }
    }
}

/// Errors raised when caller-supplied data breaks the band contract.
///
/// Empty input and degenerate value ranges are not errors: they produce empty
/// geometry or fall back to a fixed scale.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("series length mismatch: upper has {upper} entries, lower has {lower}")]
    MismatchedSeriesLength { upper: usize, lower: usize },

    #[error("band series must not be empty")]
    EmptySeries,

    #[error("non-finite value in {series} series at index {index}")]
    NonFiniteValue { series: SeriesKind, index: usize },
}

pub type Result<T> = std::result::Result<T, ChartError>;
