use chrono::{TimeZone, Utc};
use price_forecast::{
    build_combined_series, compute_report_stats, evaluate_forecast, HistoricalPoint,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Price Forecast: Basic Outlook Example");
    println!("=====================================\n");

    // Twelve months of cement prices
    let costs = [
        92.0, 94.5, 95.0, 97.2, 96.8, 99.1, 101.4, 100.9, 103.3, 104.0, 106.2, 107.5,
    ];
    let history: Vec<HistoricalPoint> = costs
        .iter()
        .enumerate()
        .map(|(i, &cost)| -> Result<HistoricalPoint, Box<dyn std::error::Error>> {
            let month = i as u32 + 1;
            let timestamp = Utc
                .with_ymd_and_hms(2023, month, 1, 0, 0, 0)
                .single()
                .ok_or("invalid sample date")?;
            Ok(HistoricalPoint::new(timestamp, cost))
        })
        .collect::<Result<_, _>>()?;

    // Six months ahead, as a forecast service would return them
    let forecast = vec![108.1, 109.4, 110.0, 111.8, 112.5, 113.9];

    let metrics = evaluate_forecast(&history, &forecast);
    println!("{}", metrics);

    for point in build_combined_series(&history, &forecast) {
        let value = point.historical.or(point.forecast).unwrap_or_default();
        let kind = if point.is_forecast() { "forecast" } else { "actual" };
        println!("{:<8} {:>8.2} {}", point.label, value, kind);
    }
    println!();

    if let Some(stats) = compute_report_stats(&history, &forecast, forecast.last().copied()) {
        println!("{}", stats);
    }

    Ok(())
}
