//! The filter engine: turns a [`Dataset`] and the viewer's [`FilterCriteria`]
//! into a [`FilteredView`].

use crate::aggregation::error::PipelineError;
use crate::dataset::columns::{year_of_time, COL_STATION};
use crate::dataset::Dataset;
use crate::types::criteria::FilterCriteria;
use crate::types::filtered_view::FilteredView;
use crate::types::period::YearRange;
use log::debug;
use polars::prelude::{col, lit, IntoLazy, LazyFrame};

pub trait AirQualityFrameFilterExt {
    /// Keeps rows whose `time` falls in a year of `range` (inclusive).
    /// Rows with a missing timestamp never match.
    ///
    /// # Returns
    /// A new `LazyFrame` with the filter applied. Errors (e.g. a missing `time`
    /// column) surface when the frame is collected.
    fn filter_years(self, range: YearRange) -> LazyFrame;

    /// Keeps rows whose `station` label is one of `stations`.
    /// An empty set of stations keeps nothing.
    fn filter_stations<'a>(self, stations: impl IntoIterator<Item = &'a str>) -> LazyFrame;
}

impl AirQualityFrameFilterExt for LazyFrame {
    fn filter_years(self, range: YearRange) -> LazyFrame {
        self.filter(
            year_of_time()
                .gt_eq(lit(range.start()))
                .and(year_of_time().lt_eq(lit(range.end()))),
        )
    }

    fn filter_stations<'a>(self, stations: impl IntoIterator<Item = &'a str>) -> LazyFrame {
        let predicate = stations
            .into_iter()
            .map(|station| col(COL_STATION).eq(lit(station)))
            .reduce(|any, next| any.or(next))
            .unwrap_or(lit(false));
        self.filter(predicate)
    }
}

/// Resolves `criteria` against the dataset: the year range is clamped into the
/// dataset's observed years. Without a temporal axis the range is dropped.
pub fn effective_criteria(dataset: &Dataset, criteria: &FilterCriteria) -> FilterCriteria {
    let year_range = criteria
        .year_range
        .zip(dataset.year_bounds())
        .map(|(requested, bounds)| requested.clamp_to(bounds));

    FilterCriteria::builder()
        .maybe_year_range(year_range)
        .stations(criteria.stations.clone())
        .build()
}

/// Selects the observations matching `criteria`.
///
/// A row matches when its year lies in the (clamped) year range and its
/// station is selected. Criteria without a year range or without stations
/// select nothing, as does any criteria on a dataset without a temporal axis.
/// The view keeps the dataset's row order.
///
/// # Errors
///
/// Returns [`PipelineError::DataFrameProcessing`] if Polars fails to evaluate
/// the filter. An empty selection is not an error.
pub fn filter(dataset: &Dataset, criteria: &FilterCriteria) -> Result<FilteredView, PipelineError> {
    let empty = || FilteredView::new(dataset.frame().head(Some(0)), dataset.has_temporal_axis());

    let effective = effective_criteria(dataset, criteria);
    let Some(range) = effective.year_range else {
        debug!("No year range selected; view is empty");
        return Ok(empty());
    };
    if effective.stations.is_empty() {
        debug!("No station selected; view is empty");
        return Ok(empty());
    }

    let frame = dataset
        .frame()
        .clone()
        .lazy()
        .filter_years(range)
        .filter_stations(effective.stations.iter().map(String::as_str))
        .collect()?;
    debug!(
        "Selected {} of {} rows for years {} and {} station(s)",
        frame.height(),
        dataset.height(),
        range,
        effective.stations.len()
    );

    Ok(FilteredView::new(frame, dataset.has_temporal_axis()))
}
