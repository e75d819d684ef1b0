//! Metrics for evaluating forecast accuracy
//!
//! Forecasts are backtested against the most recent history: the last
//! `min(historical.len(), forecast.len())` observations are paired in order
//! with the first forecast values.

use crate::data::HistoricalPoint;
use price_math::tail_pairs;
use tracing::debug;

/// Collect observed costs from the historical points
fn costs(historical: &[HistoricalPoint]) -> Vec<f64> {
    historical.iter().map(|p| p.cost).collect()
}

/// Mean Absolute Percentage Error of the forecast against the history tail
///
/// Pairs whose actual cost is zero are skipped. Errors are relative to the
/// magnitude of the actual cost, so the result is never negative. Returns 0
/// when either input is empty or every actual cost in the tail is zero.
pub fn compute_mape(historical: &[HistoricalPoint], forecast: &[f64]) -> f64 {
    let actual = costs(historical);

    let (sum, count) = tail_pairs(&actual, forecast)
        .filter(|&(a, _)| a != 0.0)
        .fold((0.0, 0usize), |(sum, count), (a, p)| {
            (sum + (a - p).abs() / a.abs() * 100.0, count + 1)
        });

    if count == 0 {
        debug!(
            historical = historical.len(),
            forecast = forecast.len(),
            "no comparable pairs for MAPE"
        );
        return 0.0;
    }

    sum / count as f64
}

/// Root Mean Square Error of the forecast against the history tail
///
/// Returns 0 when either input is empty.
pub fn compute_rmse(historical: &[HistoricalPoint], forecast: &[f64]) -> f64 {
    let actual = costs(historical);
    let pairs = tail_pairs(&actual, forecast);
    let n = pairs.len();

    if n == 0 {
        debug!(
            historical = historical.len(),
            forecast = forecast.len(),
            "no comparable pairs for RMSE"
        );
        return 0.0;
    }

    let mse = pairs.map(|(a, p)| (a - p).powi(2)).sum::<f64>() / n as f64;
    mse.sqrt()
}

/// Evaluate both accuracy metrics with the same alignment
pub fn evaluate_forecast(historical: &[HistoricalPoint], forecast: &[f64]) -> AccuracyMetrics {
    AccuracyMetrics {
        mape: compute_mape(historical, forecast),
        rmse: compute_rmse(historical, forecast),
        paired: historical.len().min(forecast.len()),
    }
}

/// Forecast accuracy metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AccuracyMetrics {
    /// Mean Absolute Percentage Error, in percent
    pub mape: f64,
    /// Root Mean Squared Error, in cost units
    pub rmse: f64,
    /// Number of (actual, predicted) pairs compared
    pub paired: usize,
}

impl std::fmt::Display for AccuracyMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Forecast Accuracy Metrics:")?;
        writeln!(f, "  MAPE:   {:.2}%", self.mape)?;
        writeln!(f, "  RMSE:   {:.2}", self.rmse)?;
        writeln!(f, "  Pairs:  {}", self.paired)?;
        Ok(())
    }
}
