//! Summary statistics for the exportable price report

use crate::data::HistoricalPoint;
use price_math::{mean, percent_change};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Summary of a history and its forecast
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    /// Cost of the most recent observation
    pub last_historical: f64,
    /// Forecasted cost chosen by the caller
    pub last_forecast: f64,
    /// Change from the historical average to the forecast average, in percent.
    /// `None` when the historical average is zero.
    pub percent_change: Option<f64>,
    pub historical_avg: f64,
    pub forecast_avg: f64,
}

/// Compute report statistics
///
/// Returns `None` when the history or the forecast series is empty, or when
/// no finite forecasted cost is supplied, so callers can render a placeholder.
pub fn compute_report_stats(
    historical: &[HistoricalPoint],
    forecast_series: &[f64],
    forecasted_cost: Option<f64>,
) -> Option<ReportStats> {
    let last_forecast = forecasted_cost.filter(|c| c.is_finite())?;
    let last_historical = historical.last()?.cost;

    let costs: Vec<f64> = historical.iter().map(|p| p.cost).collect();
    let historical_avg = mean(&costs)?;
    let forecast_avg = mean(forecast_series)?;

    let percent_change = match percent_change(historical_avg, forecast_avg) {
        Ok(change) => Some(change),
        Err(err) => {
            debug!(%err, historical_avg, "percent change undefined");
            None
        }
    };

    Some(ReportStats {
        last_historical,
        last_forecast,
        percent_change,
        historical_avg,
        forecast_avg,
    })
}

impl std::fmt::Display for ReportStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Price Report:")?;
        writeln!(f, "  Last historical:  {:.2}", self.last_historical)?;
        writeln!(f, "  Last forecast:    {:.2}", self.last_forecast)?;
        writeln!(f, "  Historical avg:   {:.2}", self.historical_avg)?;
        writeln!(f, "  Forecast avg:     {:.2}", self.forecast_avg)?;
        match self.percent_change {
            Some(change) => writeln!(f, "  Change:           {:+.2}%", change)?,
            None => writeln!(f, "  Change:           n/a")?,
        }
        Ok(())
    }
}
