mod aggregation;
mod dashboard;
mod dataset;
mod error;
mod filtering;
pub mod resources;
mod types;

#[cfg(test)]
mod test_support;

pub use dashboard::*;
pub use error::DashboardError;

pub use aggregation::correlation::meteo_correlation;
pub use aggregation::error::PipelineError;
pub use aggregation::hourly::hourly_aqi;
pub use aggregation::monthly::monthly_aqi;

pub use dataset::error::LoadError;
pub use dataset::{Dataset, DEFAULT_STATION_COUNT};

pub use filtering::{effective_criteria, filter, AirQualityFrameFilterExt};

pub use types::aggregates::*;
pub use types::criteria::FilterCriteria;
pub use types::filtered_view::FilteredView;
pub use types::meteo_variable::MeteoVariable;
pub use types::period::{YearMonth, YearRange};
