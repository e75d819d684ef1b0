//! Merging history and forecast into one chart series

use crate::data::HistoricalPoint;
use chrono::{DateTime, Utc};
use price_math::{add_months, month_label};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One labeled point of the combined chart series
///
/// Exactly one of `historical` and `forecast` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedPoint {
    /// Month and two-digit year, e.g. `Jan 24`
    pub label: String,
    pub historical: Option<f64>,
    pub forecast: Option<f64>,
}

impl CombinedPoint {
    /// Point carrying an observed cost
    pub fn observed(label: impl Into<String>, cost: f64) -> Self {
        Self {
            label: label.into(),
            historical: Some(cost),
            forecast: None,
        }
    }

    /// Point carrying a forecast value
    pub fn predicted(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            historical: None,
            forecast: Some(value),
        }
    }

    /// Whether this point belongs to the forecast part of the series
    pub fn is_forecast(&self) -> bool {
        self.forecast.is_some()
    }
}

/// Build the combined series, anchoring on the current time when history is empty
pub fn build_combined_series(historical: &[HistoricalPoint], forecast: &[f64]) -> Vec<CombinedPoint> {
    build_combined_series_from(historical, forecast, Utc::now())
}

/// Build the combined series with an explicit anchor for empty history
///
/// Historical points come first in their given order. Forecast value `i` is
/// labeled with the month `i + 1` months after the last historical timestamp
/// (or after `anchor` when there is no history).
pub fn build_combined_series_from(
    historical: &[HistoricalPoint],
    forecast: &[f64],
    anchor: DateTime<Utc>,
) -> Vec<CombinedPoint> {
    let mut combined = Vec::with_capacity(historical.len() + forecast.len());

    combined.extend(
        historical
            .iter()
            .map(|p| CombinedPoint::observed(month_label(&p.timestamp), p.cost)),
    );

    let cursor = historical.last().map(|p| p.timestamp).unwrap_or(anchor);

    for (i, &value) in forecast.iter().enumerate() {
        let step = u32::try_from(i + 1).unwrap_or(u32::MAX);
        let label = match add_months(&cursor, step) {
            Ok(date) => month_label(&date),
            Err(err) => {
                warn!(%err, step, "forecast date out of range, leaving label empty");
                String::new()
            }
        };
        combined.push(CombinedPoint::predicted(label, value));
    }

    combined
}
