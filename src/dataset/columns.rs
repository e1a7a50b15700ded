// Observation columns
pub(crate) const COL_TIME: &str = "time";
pub(crate) const COL_STATION: &str = "station";
pub(crate) const COL_AQI: &str = "AQI";

// Meteorology
pub(crate) const COL_TEMP: &str = "TEMP"; // Temperature (degree Celsius)
pub(crate) const COL_PRES: &str = "PRES"; // Pressure (hPa)
pub(crate) const COL_DEWP: &str = "DEWP"; // Dew point temperature (degree Celsius)
pub(crate) const COL_RAIN: &str = "RAIN"; // Precipitation (mm)
pub(crate) const COL_WSPM: &str = "WSPM"; // Wind speed (m/s)

// Derived group keys
pub(crate) const COL_YEAR: &str = "year";
pub(crate) const COL_MONTH: &str = "month";
pub(crate) const COL_HOUR: &str = "hour";

use polars::prelude::{col, DataType, Expr};

/// Calendar year of the `time` column as `Int32`.
pub(crate) fn year_of_time() -> Expr {
    col(COL_TIME).dt().year().cast(DataType::Int32)
}

/// Month (1 to 12) of the `time` column as `Int32`.
pub(crate) fn month_of_time() -> Expr {
    col(COL_TIME).dt().month().cast(DataType::Int32)
}

/// Hour of day (0 to 23) of the `time` column as `Int32`.
pub(crate) fn hour_of_time() -> Expr {
    col(COL_TIME).dt().hour().cast(DataType::Int32)
}
