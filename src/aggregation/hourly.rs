use crate::aggregation::error::PipelineError;
use crate::aggregation::get_column;
use crate::dataset::columns::{hour_of_time, COL_AQI, COL_HOUR, COL_TIME};
use crate::types::aggregates::{HourlyPoint, HourlySeries};
use crate::types::filtered_view::FilteredView;
use polars::prelude::{col, IntoLazy, SortMultipleOptions};

/// Median AQI per hour of day (0 to 23) across all dates of the view.
///
/// Hours without observations are absent from the series, not zero-filled.
///
/// # Errors
///
/// * [`PipelineError::NoTemporalAxis`] if the view's dataset has no `time` column.
/// * [`PipelineError::DataFrameProcessing`] if the Polars aggregation fails.
pub fn hourly_aqi(view: &FilteredView) -> Result<HourlySeries, PipelineError> {
    if !view.has_temporal_axis() {
        return Err(PipelineError::NoTemporalAxis {
            operation: "Hourly AQI",
        });
    }
    if view.is_empty() {
        return Ok(HourlySeries::default());
    }

    let grouped = view
        .frame()
        .clone()
        .lazy()
        .filter(col(COL_TIME).is_not_null())
        .group_by([hour_of_time().alias(COL_HOUR)])
        .agg([col(COL_AQI).median().alias(COL_AQI)])
        .sort_by_exprs([col(COL_HOUR)], SortMultipleOptions::default())
        .collect()?;

    let hours = get_column(&grouped, COL_HOUR)?.i32()?;
    let medians = get_column(&grouped, COL_AQI)?.f64()?;

    let points = hours
        .into_iter()
        .zip(medians)
        .filter_map(|(hour, median_aqi)| {
            Some(HourlyPoint {
                hour: u32::try_from(hour?).ok()?,
                median_aqi,
            })
        })
        .collect();

    Ok(HourlySeries { points })
}
