use crate::aggregation::error::PipelineError;
use crate::aggregation::get_column;
use crate::dataset::columns::{month_of_time, year_of_time, COL_AQI, COL_MONTH, COL_TIME, COL_YEAR};
use crate::types::aggregates::{MonthlyPoint, MonthlySeries};
use crate::types::filtered_view::FilteredView;
use crate::types::period::YearMonth;
use polars::prelude::{col, IntoLazy, SortMultipleOptions};

/// Median AQI per calendar month of the view, in chronological order.
///
/// The median is used rather than the mean so a few extreme readings do not
/// dominate a month. Months without observations are simply absent.
///
/// # Errors
///
/// * [`PipelineError::NoTemporalAxis`] if the view's dataset has no `time` column.
/// * [`PipelineError::DataFrameProcessing`] if the Polars aggregation fails.
pub fn monthly_aqi(view: &FilteredView) -> Result<MonthlySeries, PipelineError> {
    if !view.has_temporal_axis() {
        return Err(PipelineError::NoTemporalAxis {
            operation: "Monthly AQI",
        });
    }
    if view.is_empty() {
        return Ok(MonthlySeries::default());
    }

    let grouped = view
        .frame()
        .clone()
        .lazy()
        .filter(col(COL_TIME).is_not_null())
        .group_by([year_of_time().alias(COL_YEAR), month_of_time().alias(COL_MONTH)])
        .agg([col(COL_AQI).median().alias(COL_AQI)])
        .sort_by_exprs(
            [col(COL_YEAR), col(COL_MONTH)],
            SortMultipleOptions::default(),
        )
        .collect()?;

    let years = get_column(&grouped, COL_YEAR)?.i32()?;
    let months = get_column(&grouped, COL_MONTH)?.i32()?;
    let medians = get_column(&grouped, COL_AQI)?.f64()?;

    let points = years
        .into_iter()
        .zip(months)
        .zip(medians)
        .filter_map(|((year, month), median_aqi)| {
            Some(MonthlyPoint {
                period: YearMonth::new(year?, u32::try_from(month?).ok()?),
                median_aqi,
            })
        })
        .collect();

    Ok(MonthlySeries { points })
}
