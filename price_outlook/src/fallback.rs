//! What to show when the forecast provider fails
//!
//! The chart and the report tolerate a missing forecast differently, so each
//! path is configured with its own [`FallbackPolicy`].

use crate::error::Result;
use price_forecast::HistoricalPoint;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Strategy applied when the provider returns an error or an empty forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Show no forecast at all
    #[default]
    None,
    /// Repeat the last observed cost for every month of the horizon
    LastHistorical,
    /// Reuse an earlier forecast when one is at hand, else repeat the last cost
    ReuseOrLastHistorical,
}

/// Where the values of a resolved forecast came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastSource {
    Provider,
    Cached,
    LastHistorical,
    Unavailable,
}

/// Forecast values together with their origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedForecast {
    pub values: Vec<f64>,
    pub source: ForecastSource,
}

impl ResolvedForecast {
    pub fn unavailable() -> Self {
        Self {
            values: Vec::new(),
            source: ForecastSource::Unavailable,
        }
    }

    /// Last forecast value, the cost the report headlines
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    pub fn is_fallback(&self) -> bool {
        !matches!(self.source, ForecastSource::Provider)
    }
}

impl FallbackPolicy {
    /// Turn a provider outcome into the forecast to display
    pub fn resolve(
        self,
        outcome: Result<Vec<f64>>,
        history: &[HistoricalPoint],
        cached: Option<&[f64]>,
        horizon: usize,
    ) -> ResolvedForecast {
        match outcome {
            Ok(values) if !values.is_empty() => {
                return ResolvedForecast {
                    values,
                    source: ForecastSource::Provider,
                }
            }
            Ok(_) => warn!(policy = ?self, "provider returned an empty forecast"),
            Err(err) => warn!(policy = ?self, %err, "forecast provider failed"),
        }

        let resolved = match self {
            FallbackPolicy::None => ResolvedForecast::unavailable(),
            FallbackPolicy::LastHistorical => flat_last(history, horizon),
            FallbackPolicy::ReuseOrLastHistorical => match cached {
                Some(values) if !values.is_empty() => ResolvedForecast {
                    values: values.to_vec(),
                    source: ForecastSource::Cached,
                },
                _ => flat_last(history, horizon),
            },
        };

        if resolved.source == ForecastSource::Unavailable {
            error!(policy = ?self, "no forecast available");
        }
        resolved
    }
}

fn flat_last(history: &[HistoricalPoint], horizon: usize) -> ResolvedForecast {
    match history.last() {
        Some(point) if horizon > 0 => ResolvedForecast {
            values: vec![point.cost; horizon],
            source: ForecastSource::LastHistorical,
        },
        _ => ResolvedForecast::unavailable(),
    }
}
