//! Evaluate a forecast against a historical cost export.
//!
//! ```text
//! evaluate --history steel.csv --forecast 105,112.5,118
//! ```

use clap::Parser;
use price_forecast::{
    build_combined_series, compute_report_stats, evaluate_forecast, DataLoader,
};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "evaluate")]
#[command(about = "Compare a price forecast with historical costs")]
#[command(version)]
struct Cli {
    /// CSV file with `timestamp` and `cost` columns
    #[arg(long)]
    history: PathBuf,

    /// Forecast values for the following months, comma separated
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    forecast: Vec<f64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let history = DataLoader::from_csv(&cli.history)?;
    info!(
        points = history.len(),
        horizon = cli.forecast.len(),
        "evaluating forecast"
    );

    let metrics = evaluate_forecast(history.points(), &cli.forecast);
    println!("{}", metrics);

    println!("Combined series:");
    for point in build_combined_series(history.points(), &cli.forecast) {
        match (point.historical, point.forecast) {
            (Some(cost), _) => println!("  {}  {:>10.2}", point.label, cost),
            (_, Some(value)) => println!("  {}  {:>10.2}  (forecast)", point.label, value),
            _ => {}
        }
    }
    println!();

    match compute_report_stats(history.points(), &cli.forecast, cli.forecast.last().copied()) {
        Some(stats) => println!("{}", stats),
        None => warn!("not enough data for report statistics"),
    }

    Ok(())
}
