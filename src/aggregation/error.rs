use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// A time-based operation was requested on a dataset without a `time` column.
    #[error("{operation} is not applicable: the dataset has no temporal axis")]
    NoTemporalAxis { operation: &'static str },

    #[error("Required column '{0}' not found in view")]
    ColumnNotFound(String, #[source] PolarsError),

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
