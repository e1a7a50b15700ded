//! Static content shown next to the charts. None of it depends on the data.

use std::fmt;

/// Column legend: dataset column name and its meaning.
pub const COLUMN_LEGEND: [(&str, &str); 13] = [
    ("PM2.5", "PM2.5 concentration (ug/m^3)"),
    ("PM10", "PM10 concentration (ug/m^3)"),
    ("SO2", "SO2 concentration (ug/m^3)"),
    ("NO2", "NO2 concentration (ug/m^3)"),
    ("CO", "CO concentration (ug/m^3)"),
    ("O3", "O3 concentration (ug/m^3)"),
    ("TEMP", "temperature (degree Celsius)"),
    ("PRES", "pressure (hPa)"),
    ("DEWP", "dew point temperature (degree Celsius)"),
    ("RAIN", "precipitation (mm)"),
    ("wd", "wind direction"),
    ("WSPM", "wind speed (m/s)"),
    ("station", "name of the air-quality monitoring site"),
];

/// Shown in place of a chart when the selection matches no rows.
pub const NO_DATA_MESSAGE: &str = "No data matches the current filter.";

/// Looks up the legend entry for a column.
pub fn describe_column(name: &str) -> Option<&'static str> {
    COLUMN_LEGEND
        .iter()
        .find(|(column, _)| *column == name)
        .map(|(_, description)| *description)
}

/// The three dashboard panels, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    MonthlyTrend,
    MeteoCorrelation,
    HourlyPattern,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::MonthlyTrend, Panel::MeteoCorrelation, Panel::HourlyPattern];

    pub fn title(&self) -> &'static str {
        match self {
            Panel::MonthlyTrend => "AQI Year by Year",
            Panel::MeteoCorrelation => "Meteorological correlation with AQI",
            Panel::HourlyPattern => "Average air quality per hour",
        }
    }

    /// The question the panel answers.
    pub fn question(&self) -> &'static str {
        match self {
            Panel::MonthlyTrend => "How has air quality at the selected stations changed over time?",
            Panel::MeteoCorrelation => "Does the weather influence how bad the air quality gets?",
            Panel::HourlyPattern => "Does daily human activity affect air quality?",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
