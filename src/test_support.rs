//! Fixtures shared by the unit tests.

use polars::df;
use polars::prelude::{DataFrame, PolarsResult};
use std::io::Write;
use tempfile::NamedTempFile;

/// Three observations: two at station A in March 2015 (AQI 50 and 70, both at
/// 08:00) and one at station B (AQI 200).
pub(crate) fn example_frame() -> PolarsResult<DataFrame> {
    df!(
        "time" => ["2015-03-01 08:00:00", "2015-03-02 08:00:00", "2015-03-01 08:00:00"],
        "station" => ["A", "A", "B"],
        "AQI" => [50.0, 70.0, 200.0],
        "TEMP" => [4.0, 6.0, 5.0],
        "PRES" => [1020.0, 1018.0, 1019.0],
        "DEWP" => [-10.0, -8.0, -9.0],
        "RAIN" => [0.0, 0.0, 0.0],
        "WSPM" => [3.0, 1.0, 2.0]
    )
}

/// Writes `contents` to a temporary `.csv` file that lives as long as the handle.
pub(crate) fn write_csv(contents: &str) -> std::io::Result<NamedTempFile> {
    let mut file = NamedTempFile::with_suffix(".csv")?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}
