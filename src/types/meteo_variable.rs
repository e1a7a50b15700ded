//! The fixed set of meteorological variables correlated against AQI.

use crate::dataset::columns::{COL_DEWP, COL_PRES, COL_RAIN, COL_TEMP, COL_WSPM};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A meteorological measurement recorded alongside each observation.
///
/// Variants are declared in the order the correlation panel lists them, which is
/// also their sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MeteoVariable {
    /// Temperature in degrees Celsius.
    Temp,
    /// Air pressure in hPa.
    Pres,
    /// Dew point temperature in degrees Celsius.
    Dewp,
    /// Precipitation in mm.
    Rain,
    /// Wind speed in m/s.
    Wspm,
}

impl MeteoVariable {
    pub const ALL: [MeteoVariable; 5] = [
        MeteoVariable::Temp,
        MeteoVariable::Pres,
        MeteoVariable::Dewp,
        MeteoVariable::Rain,
        MeteoVariable::Wspm,
    ];

    /// Name of the dataset column holding this variable.
    pub fn column_name(&self) -> &'static str {
        match self {
            MeteoVariable::Temp => COL_TEMP,
            MeteoVariable::Pres => COL_PRES,
            MeteoVariable::Dewp => COL_DEWP,
            MeteoVariable::Rain => COL_RAIN,
            MeteoVariable::Wspm => COL_WSPM,
        }
    }
}

/// Formats a `MeteoVariable` as its column name.
///
/// # Examples
///
/// ```
/// use aqi_dashboard::MeteoVariable;
///
/// assert_eq!(MeteoVariable::Wspm.to_string(), "WSPM");
/// ```
impl fmt::Display for MeteoVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.column_name())
    }
}
