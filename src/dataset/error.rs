use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Dataset file '{0}' does not exist")]
    FileNotFound(PathBuf),

    #[error("Unsupported dataset format '{extension}' for '{path}'")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("Failed to read CSV dataset '{0}'")]
    CsvRead(PathBuf, #[source] PolarsError),

    #[error("Failed to open parquet dataset '{0}'")]
    ParquetOpen(PathBuf, #[source] std::io::Error),

    #[error("Failed to read parquet dataset '{0}'")]
    ParquetRead(PathBuf, #[source] PolarsError),

    #[error("Required column '{0}' not found in dataset")]
    MissingColumn(String),

    #[error("Unparseable timestamp '{value}' in row {row}")]
    TimestampParse { row: usize, value: String },

    #[error("Failed to normalize column '{column}'")]
    ColumnNormalization {
        column: String,
        #[source]
        source: PolarsError,
    },

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
