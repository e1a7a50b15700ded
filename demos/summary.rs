//! demos/summary.rs
//!
//! Loads the sample dataset, applies the default selection and prints the
//! three dashboard panels as text.
//!
//! To run this demo:
//! cargo run --example summary [-- path/to/dataset.csv]

use std::error::Error;
use std::path::PathBuf;

use aqi_dashboard::resources::{Panel, COLUMN_LEGEND, NO_DATA_MESSAGE};
use aqi_dashboard::{Dashboard, DashboardSnapshot};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let dashboard = Dashboard::builder()
        .maybe_path(std::env::args().nth(1).map(PathBuf::from))
        .build()?;

    println!("Columns:");
    for (column, description) in COLUMN_LEGEND {
        println!("  {:<8} {}", column, description);
    }

    let criteria = dashboard.default_criteria();
    let snapshot = dashboard.render(&criteria)?;
    println!(
        "\nSelection: years {:?}, stations {:?} ({} rows)",
        snapshot.criteria.year_range,
        snapshot.criteria.stations,
        snapshot.view.height()
    );
    println!("{}", snapshot.view.frame().head(Some(5)));

    for panel in Panel::ALL {
        println!("\n== {} ==\n{}", panel, panel.question());
        print_panel(panel, &snapshot);
    }

    if let Ok(monthly) = &snapshot.monthly {
        println!("\nMonthly series as JSON:\n{}", serde_json::to_string_pretty(monthly)?);
    }

    Ok(())
}

fn print_panel(panel: Panel, snapshot: &DashboardSnapshot) {
    if snapshot.is_empty() {
        println!("{}", NO_DATA_MESSAGE);
        return;
    }

    match panel {
        Panel::MonthlyTrend => match &snapshot.monthly {
            Ok(series) => {
                for point in &series.points {
                    println!("  {}  {}", point.period, format_aqi(point.median_aqi));
                }
            }
            Err(err) => println!("  {}", err),
        },
        Panel::MeteoCorrelation => match &snapshot.correlation {
            Ok(correlations) => {
                for (variable, coefficient) in &correlations.coefficients {
                    match coefficient {
                        Some(r) => println!("  {:<5} {:+.3}", variable, r),
                        None => println!("  {:<5} undefined", variable),
                    }
                }
                if let Some((variable, r)) = correlations.strongest() {
                    println!("  Strongest relation: {} ({:+.3})", variable, r);
                }
            }
            Err(err) => println!("  {}", err),
        },
        Panel::HourlyPattern => match &snapshot.hourly {
            Ok(series) => {
                for point in &series.points {
                    println!("  {:02}:00  {}", point.hour, format_aqi(point.median_aqi));
                }
            }
            Err(err) => println!("  {}", err),
        },
    }
}

fn format_aqi(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |aqi| format!("{:.1}", aqi))
}
