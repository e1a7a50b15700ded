use crate::aggregation::error::PipelineError;
use crate::aggregation::get_column;
use crate::dataset::columns::COL_AQI;
use crate::types::aggregates::CorrelationVector;
use crate::types::filtered_view::FilteredView;
use crate::types::meteo_variable::MeteoVariable;
use polars::prelude::{col, lit, pearson_corr, DataFrame, DataType, Expr, IntoLazy, NULL};
use std::collections::BTreeMap;

/// A cell counts only when it is present and not NaN.
fn present(name: &str) -> Expr {
    col(name).fill_nan(lit(NULL))
}

fn corr_alias(variable: MeteoVariable) -> String {
    format!("{}_corr", variable.column_name())
}

fn distinct_alias(variable: MeteoVariable, side: &str) -> String {
    format!("{}_distinct_{}", variable.column_name(), side)
}

/// Pearson correlation of TEMP, PRES, DEWP, RAIN and WSPM against AQI over
/// the rows of the view.
///
/// Missing values are handled pairwise: each variable uses the rows where both
/// it and AQI are present. A coefficient that cannot be computed (fewer than
/// two such rows, no variance, or the column is absent from the dataset) is
/// `None`, never `0.0`.
///
/// # Errors
///
/// * [`PipelineError::ColumnNotFound`] if the view lacks an `AQI` column.
/// * [`PipelineError::DataFrameProcessing`] if the Polars evaluation fails.
pub fn meteo_correlation(view: &FilteredView) -> Result<CorrelationVector, PipelineError> {
    if view.is_empty() {
        return Ok(CorrelationVector::default());
    }

    let frame = view.frame();
    get_column(frame, COL_AQI)?;

    let available: Vec<MeteoVariable> = MeteoVariable::ALL
        .into_iter()
        .filter(|variable| frame.get_column_index(variable.column_name()).is_some())
        .collect();

    let mut exprs = Vec::with_capacity(available.len() * 3);
    for &variable in &available {
        let x = present(variable.column_name());
        let y = present(COL_AQI);
        let complete = x.clone().is_not_null().and(y.clone().is_not_null());

        exprs.push(pearson_corr(x.clone(), y.clone()).alias(corr_alias(variable)));
        exprs.push(
            x.filter(complete.clone())
                .n_unique()
                .cast(DataType::Int64)
                .alias(distinct_alias(variable, "x")),
        );
        exprs.push(
            y.filter(complete)
                .n_unique()
                .cast(DataType::Int64)
                .alias(distinct_alias(variable, "y")),
        );
    }

    let stats = if exprs.is_empty() {
        DataFrame::empty()
    } else {
        frame.clone().lazy().select(exprs).collect()?
    };

    let mut coefficients = BTreeMap::new();
    for variable in MeteoVariable::ALL {
        let coefficient = if available.contains(&variable) {
            coefficient_of(&stats, variable)?
        } else {
            None
        };
        coefficients.insert(variable, coefficient);
    }

    Ok(CorrelationVector { coefficients })
}

/// Reads one coefficient from the stats row. Constant data on either side
/// leaves the coefficient undefined, as does a non-finite result.
fn coefficient_of(stats: &DataFrame, variable: MeteoVariable) -> Result<Option<f64>, PipelineError> {
    let distinct_x = get_column(stats, &distinct_alias(variable, "x"))?.i64()?.get(0);
    let distinct_y = get_column(stats, &distinct_alias(variable, "y"))?.i64()?.get(0);
    if distinct_x.unwrap_or(0) < 2 || distinct_y.unwrap_or(0) < 2 {
        return Ok(None);
    }

    let r = get_column(stats, &corr_alias(variable))?
        .cast(&DataType::Float64)?
        .f64()?
        .get(0);
    Ok(r.filter(|r| r.is_finite()).map(|r| r.clamp(-1.0, 1.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::filter;
    use crate::test_support::example_frame;
    use crate::{Dataset, FilterCriteria};
    use polars::df;
    use std::collections::BTreeSet;

    fn view_of(dataset: &Dataset, stations: &[&str]) -> Result<FilteredView, PipelineError> {
        let criteria = FilterCriteria::builder()
            .maybe_year_range(dataset.year_bounds())
            .stations(stations.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>())
            .build();
        filter(dataset, &criteria)
    }

    #[test]
    fn test_correlation_keys_and_range() -> Result<(), Box<dyn std::error::Error>> {
        let frame = df!(
            "time" => ["2015-03-01 00:00:00", "2015-03-01 01:00:00", "2015-03-01 02:00:00", "2015-03-01 03:00:00"],
            "station" => ["S", "S", "S", "S"],
            "AQI" => [50.0, 100.0, 150.0, 200.0],
            "TEMP" => [1.0, 2.0, 3.0, 4.0],
            "PRES" => [1030.0, 1020.0, 1010.0, 1000.0],
            "DEWP" => [-5.0, 1.0, -2.0, 3.0],
            "RAIN" => [0.0, 0.0, 0.0, 0.0],
            "WSPM" => [Some(4.0), None, Some(2.0), Some(1.0)]
        )?;
        let dataset = Dataset::from_frame(frame)?;
        let view = view_of(&dataset, &["S"])?;

        let correlations = meteo_correlation(&view)?;

        assert_eq!(
            correlations.coefficients.keys().copied().collect::<Vec<_>>(),
            MeteoVariable::ALL.to_vec()
        );
        assert!((correlations.get(MeteoVariable::Temp).unwrap() - 1.0).abs() < 1e-9);
        assert!((correlations.get(MeteoVariable::Pres).unwrap() + 1.0).abs() < 1e-9);
        // Constant rain: undefined rather than "no correlation".
        assert_eq!(correlations.coefficients[&MeteoVariable::Rain], None);
        // WSPM uses the three complete rows only.
        let wspm = correlations.get(MeteoVariable::Wspm).unwrap();
        assert!(wspm < -0.9);

        for coefficient in correlations.coefficients.values().flatten() {
            assert!((-1.0..=1.0).contains(coefficient));
        }
        Ok(())
    }

    #[test]
    fn test_correlation_with_missing_columns_and_single_row() -> Result<(), Box<dyn std::error::Error>> {
        let frame = df!(
            "time" => ["2015-03-01 00:00:00", "2015-03-01 01:00:00", "2015-03-01 02:00:00"],
            "station" => ["S", "S", "T"],
            "AQI" => [50.0, 100.0, 75.0],
            "TEMP" => [1.0, 3.0, 2.0]
        )?;
        let dataset = Dataset::from_frame(frame)?;

        let correlations = meteo_correlation(&view_of(&dataset, &["S"])?)?;
        assert_eq!(correlations.coefficients.len(), 5);
        assert!(correlations.get(MeteoVariable::Temp).is_some());
        assert_eq!(correlations.get(MeteoVariable::Pres), None);

        // A single observation cannot define a correlation.
        let correlations = meteo_correlation(&view_of(&dataset, &["T"])?)?;
        assert!(correlations.coefficients.values().all(Option::is_none));
        Ok(())
    }

    #[test]
    fn test_correlation_known_coefficient() -> Result<(), Box<dyn std::error::Error>> {
        // r = 0.8 for this textbook sample.
        let frame = df!(
            "time" => ["2015-03-01 00:00:00", "2015-03-01 01:00:00", "2015-03-01 02:00:00", "2015-03-01 03:00:00", "2015-03-01 04:00:00"],
            "station" => ["S", "S", "S", "S", "S"],
            "AQI" => [2.0, 1.0, 4.0, 3.0, 5.0],
            "TEMP" => [1.0, 2.0, 3.0, 4.0, 5.0]
        )?;
        let dataset = Dataset::from_frame(frame)?;

        let correlations = meteo_correlation(&view_of(&dataset, &["S"])?)?;

        let r = correlations.get(MeteoVariable::Temp).unwrap();
        assert!((r - 0.8).abs() < 1e-9, "got {}", r);
        Ok(())
    }

    #[test]
    fn test_correlation_skips_nan_and_incomplete_pairs() -> Result<(), Box<dyn std::error::Error>> {
        let frame = df!(
            "time" => ["2015-03-01 00:00:00", "2015-03-01 01:00:00", "2015-03-01 02:00:00", "2015-03-01 03:00:00", "2015-03-01 04:00:00"],
            "station" => ["S", "S", "S", "S", "S"],
            "AQI" => [Some(2.0), Some(100.0), None, Some(6.0), Some(7.0)],
            "TEMP" => [Some(1.0), None, Some(2.0), Some(3.0), Some(f64::NAN)],
            "PRES" => [0.1, 0.1, 0.1, 0.1, 0.1]
        )?;
        let dataset = Dataset::from_frame(frame)?;

        let correlations = meteo_correlation(&view_of(&dataset, &["S"])?)?;

        // Only (1, 2) and (3, 6) are complete.
        let r = correlations.get(MeteoVariable::Temp).unwrap();
        assert!((r - 1.0).abs() < 1e-9, "got {}", r);
        // Constant pressure has no variance.
        assert_eq!(correlations.coefficients[&MeteoVariable::Pres], None);
        Ok(())
    }

    #[test]
    fn test_correlation_of_empty_view() -> Result<(), Box<dyn std::error::Error>> {
        let dataset = Dataset::from_frame(example_frame()?)?;
        let view = view_of(&dataset, &["C"])?;

        assert!(meteo_correlation(&view)?.is_empty());
        Ok(())
    }
}
