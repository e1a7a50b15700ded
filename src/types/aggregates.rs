//! Chart-ready summaries derived from a [`crate::FilteredView`].
//!
//! All three results are plain values: recomputed from scratch for every
//! selection and never updated in place. Each has an explicit empty state that
//! the reducers return for an empty view.

use crate::dataset::columns::{COL_AQI, COL_HOUR, COL_MONTH, COL_YEAR};
use crate::types::meteo_variable::MeteoVariable;
use crate::types::period::YearMonth;
use ordered_float::OrderedFloat;
use polars::df;
use polars::prelude::{DataFrame, PolarsResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Median AQI of one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub period: YearMonth,
    /// `None` when every AQI value of the month is missing.
    pub median_aqi: Option<f64>,
}

/// Monthly median AQI, strictly ascending by month. Months without
/// observations are absent rather than interpolated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthlySeries {
    pub points: Vec<MonthlyPoint>,
}

impl MonthlySeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Converts the series into a `DataFrame` with `year`, `month`,
    /// `year_month` (`YYYY-MM`) and `AQI` columns.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let years: Vec<i32> = self.points.iter().map(|p| p.period.year).collect();
        let months: Vec<u32> = self.points.iter().map(|p| p.period.month).collect();
        let labels: Vec<String> = self.points.iter().map(|p| p.period.to_string()).collect();
        let medians: Vec<Option<f64>> = self.points.iter().map(|p| p.median_aqi).collect();

        df!(
            COL_YEAR => years,
            COL_MONTH => months,
            "year_month" => labels,
            COL_AQI => medians
        )
    }
}

/// Median AQI of one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyPoint {
    /// Hour of day, 0 to 23.
    pub hour: u32,
    pub median_aqi: Option<f64>,
}

/// Median AQI per hour of day, ascending. Hours without observations are
/// absent, not zero-filled.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HourlySeries {
    pub points: Vec<HourlyPoint>,
}

impl HourlySeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// The point for `hour`, if that hour has observations.
    pub fn at(&self, hour: u32) -> Option<&HourlyPoint> {
        self.points.iter().find(|p| p.hour == hour)
    }

    /// Converts the series into a `DataFrame` with `hour` and `AQI` columns.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let hours: Vec<u32> = self.points.iter().map(|p| p.hour).collect();
        let medians: Vec<Option<f64>> = self.points.iter().map(|p| p.median_aqi).collect();

        df!(
            COL_HOUR => hours,
            COL_AQI => medians
        )
    }
}

/// Pearson correlation of each meteorological variable against AQI.
///
/// A coefficient is `None` when it is undefined for the view (fewer than two
/// complete pairs, or a variable without variance). AQI never appears as a key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CorrelationVector {
    pub coefficients: BTreeMap<MeteoVariable, Option<f64>>,
}

impl CorrelationVector {
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// The coefficient for `variable`, flattened: `None` if absent or undefined.
    pub fn get(&self, variable: MeteoVariable) -> Option<f64> {
        self.coefficients.get(&variable).copied().flatten()
    }

    /// The variable whose defined coefficient has the largest magnitude.
    pub fn strongest(&self) -> Option<(MeteoVariable, f64)> {
        self.coefficients
            .iter()
            .filter_map(|(variable, coefficient)| coefficient.map(|c| (*variable, c)))
            .max_by_key(|(_, c)| OrderedFloat(c.abs()))
    }

    /// Converts the vector into a `DataFrame` with `variable` and
    /// `correlation` columns, in panel order.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let variables: Vec<String> = self.coefficients.keys().map(|v| v.to_string()).collect();
        let values: Vec<Option<f64>> = self.coefficients.values().copied().collect();

        df!(
            "variable" => variables,
            "correlation" => values
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_correlations() -> CorrelationVector {
        CorrelationVector {
            coefficients: BTreeMap::from([
                (MeteoVariable::Temp, Some(-0.12)),
                (MeteoVariable::Pres, Some(0.05)),
                (MeteoVariable::Dewp, Some(0.11)),
                (MeteoVariable::Rain, None),
                (MeteoVariable::Wspm, Some(-0.31)),
            ]),
        }
    }

    #[test]
    fn test_strongest_uses_magnitude() {
        let correlations = sample_correlations();
        assert_eq!(correlations.strongest(), Some((MeteoVariable::Wspm, -0.31)));
        assert_eq!(correlations.get(MeteoVariable::Rain), None);
        assert_eq!(CorrelationVector::default().strongest(), None);
    }

    #[test]
    fn test_correlation_frame_keeps_panel_order() -> Result<(), Box<dyn std::error::Error>> {
        let df = sample_correlations().to_frame()?;
        assert_eq!(df.height(), 5);

        let names: Vec<&str> = df.column("variable")?.str()?.into_iter().flatten().collect();
        assert_eq!(names, vec!["TEMP", "PRES", "DEWP", "RAIN", "WSPM"]);
        assert_eq!(df.column("correlation")?.f64()?.get(3), None);
        Ok(())
    }

    #[test]
    fn test_monthly_frame_columns() -> Result<(), Box<dyn std::error::Error>> {
        let series = MonthlySeries {
            points: vec![
                MonthlyPoint {
                    period: YearMonth::new(2015, 3),
                    median_aqi: Some(60.0),
                },
                MonthlyPoint {
                    period: YearMonth::new(2015, 5),
                    median_aqi: None,
                },
            ],
        };
        let df = series.to_frame()?;

        assert_eq!(df.height(), 2);
        assert_eq!(df.column("year_month")?.str()?.get(1), Some("2015-05"));
        assert_eq!(df.column("AQI")?.f64()?.get(0), Some(60.0));
        assert_eq!(df.column("AQI")?.f64()?.get(1), None);
        Ok(())
    }

    #[test]
    fn test_hourly_lookup_and_serialization() -> Result<(), Box<dyn std::error::Error>> {
        let series = HourlySeries {
            points: vec![HourlyPoint {
                hour: 8,
                median_aqi: Some(60.0),
            }],
        };
        assert!(series.at(8).is_some());
        assert!(series.at(9).is_none());

        let json = serde_json::to_string(&series)?;
        assert_eq!(json, r#"{"points":[{"hour":8,"median_aqi":60.0}]}"#);

        let correlations = serde_json::to_value(sample_correlations())?;
        assert_eq!(correlations["coefficients"]["WSPM"], serde_json::json!(-0.31));
        assert!(correlations["coefficients"]["RAIN"].is_null());
        Ok(())
    }
}
