//! The immutable, in-memory air-quality dataset.

pub(crate) mod columns;
pub mod error;
mod loader;
mod timestamps;

use crate::types::criteria::FilterCriteria;
use crate::types::period::YearRange;
use polars::prelude::DataFrame;

/// Number of stations selected when the viewer has not picked any.
pub const DEFAULT_STATION_COUNT: usize = 2;

/// A loaded air-quality dataset.
///
/// Wraps a Polars `DataFrame` with one row per observation. After loading the
/// frame is never modified: filtering produces new [`crate::FilteredView`]s.
///
/// The frame is normalized on load:
/// * `station` holds string labels,
/// * `AQI`, `TEMP`, `PRES`, `DEWP`, `RAIN` and `WSPM` are `f64` (unparseable values become missing),
/// * `time`, when present, is a `Datetime` column.
///
/// A dataset whose source had no `time` column has no temporal axis; time-based
/// operations on it report [`crate::PipelineError::NoTemporalAxis`].
#[derive(Debug, Clone)]
pub struct Dataset {
    frame: DataFrame,
    has_temporal_axis: bool,
    stations: Vec<String>,
    year_bounds: Option<YearRange>,
}

impl Dataset {
    /// The underlying normalized frame.
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Number of observations.
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn has_temporal_axis(&self) -> bool {
        self.has_temporal_axis
    }

    /// Distinct station labels in order of first occurrence.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// The earliest and latest observed years, or `None` without a temporal
    /// axis (or when every timestamp is missing).
    pub fn year_bounds(&self) -> Option<YearRange> {
        self.year_bounds
    }

    /// Criteria selecting the full year range and the first `station_count`
    /// stations, used before the viewer makes an explicit choice.
    pub fn default_criteria(&self, station_count: usize) -> FilterCriteria {
        FilterCriteria::builder()
            .maybe_year_range(self.year_bounds)
            .stations(self.stations.iter().take(station_count).cloned().collect())
            .build()
    }
}
