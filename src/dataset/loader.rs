use crate::dataset::columns::{year_of_time, COL_AQI, COL_STATION, COL_TIME};
use crate::dataset::error::LoadError;
use crate::dataset::timestamps::parse_timestamp;
use crate::dataset::Dataset;
use crate::types::meteo_variable::MeteoVariable;
use crate::types::period::YearRange;
use log::{debug, info, warn};
use polars::prelude::*;
use std::collections::HashSet;
use std::path::Path;

impl Dataset {
    /// Loads a dataset from a `.csv` or `.parquet` file.
    ///
    /// CSV files must have a header row. The file is read once; the returned
    /// dataset does not keep a handle to it.
    ///
    /// # Errors
    ///
    /// * [`LoadError::FileNotFound`] if `path` is not a file.
    /// * [`LoadError::UnsupportedFormat`] for any other extension.
    /// * [`LoadError::CsvRead`] / [`LoadError::ParquetRead`] if the file is malformed.
    /// * Any error of [`Dataset::from_frame`].
    pub fn load(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(LoadError::FileNotFound(path.to_path_buf()));
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        let frame = match extension.as_str() {
            "csv" => read_csv(path)?,
            "parquet" | "pq" => read_parquet(path)?,
            _ => {
                return Err(LoadError::UnsupportedFormat {
                    path: path.to_path_buf(),
                    extension,
                })
            }
        };
        info!(
            "Read {} rows and {} columns from {:?}",
            frame.height(),
            frame.width(),
            path
        );

        Dataset::from_frame(frame)
    }

    /// Builds a dataset from an in-memory frame, normalizing column types.
    ///
    /// # Errors
    ///
    /// * [`LoadError::MissingColumn`] if `station` or `AQI` is absent.
    /// * [`LoadError::TimestampParse`] if any non-blank `time` cell cannot be parsed.
    ///   The whole load fails; no partial dataset is produced.
    pub fn from_frame(mut frame: DataFrame) -> Result<Dataset, LoadError> {
        for required in [COL_STATION, COL_AQI] {
            if frame.get_column_index(required).is_none() {
                return Err(LoadError::MissingColumn(required.to_string()));
            }
        }

        cast_column(&mut frame, COL_STATION, &DataType::String)?;
        cast_column(&mut frame, COL_AQI, &DataType::Float64)?;
        for variable in MeteoVariable::ALL {
            let name = variable.column_name();
            if frame.get_column_index(name).is_some() {
                cast_column(&mut frame, name, &DataType::Float64)?;
            } else {
                warn!("Column '{}' not found; its correlation with AQI will be undefined", name);
            }
        }

        let has_temporal_axis = frame.get_column_index(COL_TIME).is_some();
        if has_temporal_axis {
            let parsed = parse_time_column(frame.column(COL_TIME)?)?;
            frame.with_column(parsed)?;
        } else {
            warn!("Column '{}' not found; dataset has no temporal axis", COL_TIME);
        }

        let stations = distinct_stations(&frame)?;
        let year_bounds = if has_temporal_axis {
            observed_year_bounds(&frame)?
        } else {
            None
        };
        debug!(
            "Dataset has {} stations, year bounds {:?}",
            stations.len(),
            year_bounds
        );

        Ok(Dataset {
            frame,
            has_temporal_axis,
            stations,
            year_bounds,
        })
    }
}

/// Cell contents read as missing, besides empty cells.
const CSV_NULL_MARKERS: [&str; 4] = ["NA", "N/A", "NaN", "null"];

/// Column types are inferred from the whole file so a late float or missing
/// marker does not break a column that starts out as integers. Cells that are
/// still not numeric end up as text and are cast leniently afterwards.
fn read_csv(path: &Path) -> Result<DataFrame, LoadError> {
    let null_values = NullValues::AllColumns(CSV_NULL_MARKERS.iter().map(|&m| m.into()).collect());

    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_parse_options(CsvParseOptions::default().with_null_values(Some(null_values)))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| LoadError::CsvRead(path.to_path_buf(), e))?
        .finish()
        .map_err(|e| LoadError::CsvRead(path.to_path_buf(), e))
}

fn read_parquet(path: &Path) -> Result<DataFrame, LoadError> {
    let file =
        std::fs::File::open(path).map_err(|e| LoadError::ParquetOpen(path.to_path_buf(), e))?;
    ParquetReader::new(file)
        .finish()
        .map_err(|e| LoadError::ParquetRead(path.to_path_buf(), e))
}

/// Replaces column `name` with its cast to `dtype`. Values that cannot be
/// represented become null.
fn cast_column(frame: &mut DataFrame, name: &str, dtype: &DataType) -> Result<(), LoadError> {
    let to_error = |source| LoadError::ColumnNormalization {
        column: name.to_string(),
        source,
    };
    let cast = frame
        .column(name)
        .and_then(|column| column.cast(dtype))
        .map_err(to_error)?;
    frame.with_column(cast).map_err(to_error)?;
    Ok(())
}

/// Converts the `time` column into a `Datetime` column.
///
/// Datetime columns pass through, dates become midnight, everything else is
/// parsed as text. Blank cells become null.
fn parse_time_column(column: &Column) -> Result<Column, LoadError> {
    let to_error = |source| LoadError::ColumnNormalization {
        column: COL_TIME.to_string(),
        source,
    };

    match column.dtype() {
        DataType::Datetime(_, _) => Ok(column.clone()),
        DataType::Date => column
            .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))
            .map_err(to_error),
        _ => {
            let text = column.cast(&DataType::String).map_err(to_error)?;
            let cells = text.str().map_err(to_error)?;

            let mut parsed = Vec::with_capacity(cells.len());
            for (row, cell) in cells.into_iter().enumerate() {
                let value = match cell.map(str::trim) {
                    None | Some("") => None,
                    Some(raw) => Some(parse_timestamp(raw).ok_or_else(|| {
                        LoadError::TimestampParse {
                            row,
                            value: raw.to_string(),
                        }
                    })?),
                };
                parsed.push(value);
            }

            Ok(Series::new(COL_TIME.into(), parsed).into())
        }
    }
}

fn distinct_stations(frame: &DataFrame) -> Result<Vec<String>, LoadError> {
    let labels = frame.column(COL_STATION)?.str()?;
    let mut seen = HashSet::new();
    let mut stations = Vec::new();
    for label in labels.into_iter().flatten() {
        if seen.insert(label) {
            stations.push(label.to_string());
        }
    }
    Ok(stations)
}

fn observed_year_bounds(frame: &DataFrame) -> Result<Option<YearRange>, LoadError> {
    let bounds = frame
        .clone()
        .lazy()
        .select([
            year_of_time().min().alias("min_year"),
            year_of_time().max().alias("max_year"),
        ])
        .collect()?;

    let min_year = bounds.column("min_year")?.i32()?.get(0);
    let max_year = bounds.column("max_year")?.i32()?.get(0);
    Ok(min_year
        .zip(max_year)
        .map(|(start, end)| YearRange::new(start, end)))
}
