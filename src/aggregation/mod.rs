//! The three reducers turning a [`crate::FilteredView`] into chart-ready
//! summaries. Each is a pure function of the view and returns an explicit
//! empty result for an empty view.

pub mod correlation;
pub mod error;
pub mod hourly;
pub mod monthly;

use crate::aggregation::error::PipelineError;
use polars::prelude::{Column, DataFrame};

/// Retrieves a column by name from a DataFrame.
fn get_column<'a>(df: &'a DataFrame, col: &str) -> Result<&'a Column, PipelineError> {
    df.column(col)
        .map_err(|e| PipelineError::ColumnNotFound(col.to_string(), e))
}
