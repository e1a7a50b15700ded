//! This module provides the main entry point of the crate: a [`Dashboard`]
//! session that loads a dataset once and recomputes every panel for each
//! viewer selection.

use crate::aggregation::correlation::meteo_correlation;
use crate::aggregation::error::PipelineError;
use crate::aggregation::hourly::hourly_aqi;
use crate::aggregation::monthly::monthly_aqi;
use crate::dataset::{Dataset, DEFAULT_STATION_COUNT};
use crate::error::DashboardError;
use crate::filtering::{effective_criteria, filter};
use crate::types::aggregates::{CorrelationVector, HourlySeries, MonthlySeries};
use crate::types::criteria::FilterCriteria;
use crate::types::filtered_view::FilteredView;
use bon::bon;
use log::{info, warn};
use std::path::PathBuf;

/// Location of the pre-built dataset, relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "dashboard/assemble.csv";

/// Everything the presentation layer needs to draw one state of the dashboard.
///
/// Each panel carries its own `Result`: a panel that cannot be computed (for
/// instance [`PipelineError::NoTemporalAxis`]) is shown as "not applicable"
/// while the others render normally.
#[derive(Debug)]
pub struct DashboardSnapshot {
    /// The criteria actually applied, with the year range clamped to the dataset.
    pub criteria: FilterCriteria,
    /// The selected rows, for tabular display.
    pub view: FilteredView,
    pub monthly: Result<MonthlySeries, PipelineError>,
    pub correlation: Result<CorrelationVector, PipelineError>,
    pub hourly: Result<HourlySeries, PipelineError>,
}

impl DashboardSnapshot {
    /// Returns `true` when the selection matched no rows.
    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }
}

/// A dashboard session over one immutable [`Dataset`].
///
/// The dataset is loaded once when the session is created. Every call to
/// [`Dashboard::render`] is a synchronous, side-effect free recomputation, so
/// the same criteria always produce the same snapshot.
///
/// # Examples
///
/// ```no_run
/// use aqi_dashboard::{Dashboard, DashboardError};
///
/// # fn main() -> Result<(), DashboardError> {
/// // Loads `dashboard/assemble.csv` and selects the first two stations by default.
/// let dashboard = Dashboard::builder().build()?;
///
/// let snapshot = dashboard.render(&dashboard.default_criteria())?;
/// if let Ok(hourly) = &snapshot.hourly {
///     for point in &hourly.points {
///         println!("{:02}:00 -> {:?}", point.hour, point.median_aqi);
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Dataset,
    default_station_count: usize,
}

#[bon]
impl Dashboard {
    /// Creates a session by loading a dataset file.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.path(impl Into<PathBuf>)`: Optional. The `.csv` or `.parquet` file to load.
    ///   Defaults to [`DEFAULT_DATASET_PATH`].
    /// * `.default_station_count(usize)`: Optional. How many stations the default
    ///   selection contains. Defaults to [`DEFAULT_STATION_COUNT`].
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Load`] if the file is missing or malformed. This
    /// is fatal for the session: there is nothing to show without a dataset.
    #[builder]
    pub fn new(
        #[builder(into)] path: Option<PathBuf>,
        default_station_count: Option<usize>,
    ) -> Result<Self, DashboardError> {
        let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_PATH));
        info!("Loading air-quality dataset from {:?}", path);

        let dataset = Dataset::load(&path)?;
        info!(
            "Loaded {} observations from {} stations",
            dataset.height(),
            dataset.stations().len()
        );

        Ok(Self {
            dataset,
            default_station_count: default_station_count.unwrap_or(DEFAULT_STATION_COUNT),
        })
    }

    /// Creates a session over an already loaded dataset.
    pub fn from_dataset(dataset: Dataset) -> Self {
        Self {
            dataset,
            default_station_count: DEFAULT_STATION_COUNT,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The selection shown before the viewer picks anything: all observed years
    /// and the first stations in dataset order.
    pub fn default_criteria(&self) -> FilterCriteria {
        self.dataset.default_criteria(self.default_station_count)
    }

    /// Recomputes the filtered view and all three panels for `criteria`.
    ///
    /// # Errors
    ///
    /// Returns a [`PipelineError`] only if filtering itself fails. Failures of
    /// individual panels are reported inside the snapshot.
    pub fn render(&self, criteria: &FilterCriteria) -> Result<DashboardSnapshot, PipelineError> {
        let criteria = effective_criteria(&self.dataset, criteria);
        let view = filter(&self.dataset, &criteria)?;

        let monthly = monthly_aqi(&view);
        let correlation = meteo_correlation(&view);
        let hourly = hourly_aqi(&view);

        for (panel, outcome) in [
            ("monthly", monthly.as_ref().err()),
            ("correlation", correlation.as_ref().err()),
            ("hourly", hourly.as_ref().err()),
        ] {
            if let Some(err) = outcome {
                warn!("Panel '{}' unavailable: {}", panel, err);
            }
        }
        info!(
            "Rendered {} rows for years {:?} and stations {:?}",
            view.height(),
            criteria.year_range,
            criteria.stations
        );

        Ok(DashboardSnapshot {
            criteria,
            view,
            monthly,
            correlation,
            hourly,
        })
    }
}
