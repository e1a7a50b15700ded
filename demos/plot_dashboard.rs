//! demos/plot_dashboard.rs
//!
//! Renders the three dashboard panels for the default selection with `plotlars`.
//!
//! To run this demo:
//! cargo run --example plot_dashboard --features examples

use std::error::Error;

use aqi_dashboard::resources::Panel;
use aqi_dashboard::Dashboard;
use plotlars::{BarPlot, LinePlot, Plot, Rgb, Text, TimeSeriesPlot};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let dashboard = Dashboard::builder().build()?;
    let snapshot = dashboard.render(&dashboard.default_criteria())?;

    let monthly = snapshot.monthly?.to_frame()?;
    TimeSeriesPlot::builder()
        .data(&monthly)
        .x("year_month")
        .y("AQI")
        .colors(vec![Rgb(235, 117, 0)])
        .plot_title(Text::from(Panel::MonthlyTrend.title()).size(18))
        .x_title("Month")
        .y_title("Median AQI")
        .build()
        .plot();

    let correlation = snapshot.correlation?.to_frame()?;
    BarPlot::builder()
        .data(&correlation)
        .labels("variable")
        .values("correlation")
        .plot_title(Text::from(Panel::MeteoCorrelation.title()).size(18))
        .x_title("Variable")
        .y_title("Correlation coefficient")
        .build()
        .plot();

    let hourly = snapshot.hourly?.to_frame()?;
    LinePlot::builder()
        .data(&hourly)
        .x("hour")
        .y("AQI")
        .plot_title(Text::from(Panel::HourlyPattern.title()).size(18))
        .x_title("Hour (0-23)")
        .y_title("Median AQI")
        .build()
        .plot();

    Ok(())
}
