//! Chart and report views over the price providers

use crate::config::OutlookConfig;
use crate::fallback::ResolvedForecast;
use crate::provider::{ForecastProvider, HistoricalProvider, Resource};
use chrono::{DateTime, Utc};
use price_forecast::{
    build_combined_series_from, compute_report_stats, evaluate_forecast, AccuracyMetrics,
    CombinedPoint, HistoricalPoint, HistoricalSeries, ReportStats,
};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Everything the history versus forecast chart renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartView {
    pub resource: Resource,
    pub history: Vec<HistoricalPoint>,
    pub forecast: ResolvedForecast,
    pub combined: Vec<CombinedPoint>,
    pub metrics: AccuracyMetrics,
}

/// Everything the exportable price report renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    pub resource: Resource,
    pub forecast: ResolvedForecast,
    pub forecasted_cost: Option<f64>,
    /// `None` until both history and a forecast are available
    pub stats: Option<ReportStats>,
}

/// Builds views by querying the providers and running the numeric core
#[derive(Debug, Clone)]
pub struct OutlookService<H, F> {
    history: H,
    forecasts: F,
    config: OutlookConfig,
}

impl<H: HistoricalProvider, F: ForecastProvider> OutlookService<H, F> {
    pub fn new(history: H, forecasts: F, config: OutlookConfig) -> Self {
        Self {
            history,
            forecasts,
            config,
        }
    }

    pub fn config(&self) -> &OutlookConfig {
        &self.config
    }

    /// History for `resource`; a failing provider counts as no history
    pub fn load_history(&self, resource: &Resource) -> Vec<HistoricalPoint> {
        match self.history.history(resource) {
            Ok(points) => HistoricalSeries::new(points).into_points(),
            Err(err) => {
                warn!(%resource, %err, "historical provider failed, using empty history");
                Vec::new()
            }
        }
    }

    /// Chart view anchored on the current time
    pub fn chart(&self, resource: &Resource) -> ChartView {
        self.chart_at(resource, Utc::now())
    }

    /// Chart view; `now` labels the forecast when there is no history
    #[instrument(skip(self, resource), fields(resource = %resource))]
    pub fn chart_at(&self, resource: &Resource, now: DateTime<Utc>) -> ChartView {
        let history = self.load_history(resource);
        let outcome = self.forecasts.forecast(resource, self.config.horizon);
        let forecast =
            self.config
                .chart_fallback
                .resolve(outcome, &history, None, self.config.horizon);

        let combined = build_combined_series_from(&history, &forecast.values, now);
        let metrics = evaluate_forecast(&history, &forecast.values);
        info!(
            points = combined.len(),
            source = ?forecast.source,
            mape = metrics.mape,
            rmse = metrics.rmse,
            "chart view built"
        );

        ChartView {
            resource: resource.clone(),
            history,
            forecast,
            combined,
            metrics,
        }
    }

    /// Report view; `cached_forecast` is an earlier forecast the fallback may reuse
    #[instrument(skip(self, resource, cached_forecast), fields(resource = %resource))]
    pub fn report(&self, resource: &Resource, cached_forecast: Option<&[f64]>) -> ReportView {
        let history = self.load_history(resource);
        let outcome = self.forecasts.forecast(resource, self.config.horizon);
        let forecast = self.config.report_fallback.resolve(
            outcome,
            &history,
            cached_forecast,
            self.config.horizon,
        );

        let forecasted_cost = forecast.last();
        let stats = compute_report_stats(&history, &forecast.values, forecasted_cost);
        info!(
            source = ?forecast.source,
            has_stats = stats.is_some(),
            "report view built"
        );

        ReportView {
            resource: resource.clone(),
            forecast,
            forecasted_cost,
            stats,
        }
    }
}
