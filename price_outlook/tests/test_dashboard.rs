mod common;

use approx::assert_relative_eq;
use chrono::{TimeZone, Utc};
use common::{monthly, FailingForecast, FailingHistory, StaticForecast, StaticHistory};
use pretty_assertions::assert_eq;
use price_forecast::CombinedPoint;
use price_outlook::{FallbackPolicy, ForecastSource, OutlookConfig, OutlookService, Resource};

#[test]
fn test_chart_view_from_providers() {
    let history = monthly(2024, &[100.0, 110.0]);
    let forecasts = StaticForecast::new(vec![105.0, 115.0]);
    let service = OutlookService::new(StaticHistory(history), &forecasts, OutlookConfig::default());

    let chart = service.chart(&Resource::material("Cement"));

    assert_eq!(*forecasts.requests.borrow(), vec![6]);
    assert_eq!(chart.forecast.source, ForecastSource::Provider);
    assert_eq!(
        chart.combined,
        vec![
            CombinedPoint::observed("Jan 24", 100.0),
            CombinedPoint::observed("Feb 24", 110.0),
            CombinedPoint::predicted("Mar 24", 105.0),
            CombinedPoint::predicted("Apr 24", 115.0),
        ]
    );
    assert_relative_eq!(chart.metrics.mape, 4.7727, epsilon = 1e-4);
    assert_relative_eq!(chart.metrics.rmse, 5.0, epsilon = 1e-12);
}

#[test]
fn test_chart_does_not_fall_back_by_default() {
    let history = monthly(2024, &[100.0, 110.0]);
    let service = OutlookService::new(StaticHistory(history), FailingForecast, OutlookConfig::default());

    let chart = service.chart(&Resource::labor("Carpenter"));

    assert_eq!(chart.forecast.source, ForecastSource::Unavailable);
    assert_eq!(chart.combined.len(), 2);
    assert_eq!(chart.metrics.mape, 0.0);
    assert_eq!(chart.metrics.rmse, 0.0);
}

#[test]
fn test_chart_fallback_is_configurable() {
    let history = monthly(2024, &[100.0, 120.0]);
    let config = OutlookConfig {
        chart_fallback: FallbackPolicy::LastHistorical,
        horizon: 3,
        ..OutlookConfig::default()
    };
    let service = OutlookService::new(StaticHistory(history), FailingForecast, config);

    let chart = service.chart(&Resource::material("Lumber"));

    assert_eq!(chart.forecast.source, ForecastSource::LastHistorical);
    assert_eq!(chart.forecast.values, vec![120.0; 3]);
    assert_eq!(chart.combined.len(), 5);
}

#[test]
fn test_empty_history_labels_from_now() {
    let forecasts = StaticForecast::new(vec![7.0, 8.0]);
    let service = OutlookService::new(FailingHistory, forecasts, OutlookConfig::default());
    let now = Utc.with_ymd_and_hms(2025, 11, 20, 9, 0, 0).unwrap();

    let chart = service.chart_at(&Resource::material("Glass"), now);

    assert!(chart.history.is_empty());
    assert_eq!(
        chart.combined,
        vec![
            CombinedPoint::predicted("Dec 25", 7.0),
            CombinedPoint::predicted("Jan 26", 8.0),
        ]
    );
    assert_eq!(chart.metrics.paired, 0);
}

#[test]
fn test_history_is_sorted_before_use() {
    let mut history = monthly(2024, &[100.0, 110.0, 120.0]);
    history.reverse();
    let service = OutlookService::new(
        StaticHistory(history),
        StaticForecast::new(vec![130.0]),
        OutlookConfig::default(),
    );

    let chart = service.chart(&Resource::material("Copper"));

    assert_eq!(chart.combined[2], CombinedPoint::observed("Mar 24", 120.0));
    assert_eq!(chart.combined[3].label, "Apr 24");
}

#[test]
fn test_report_view_from_provider() {
    let history = monthly(2024, &[100.0, 110.0, 120.0]);
    let service = OutlookService::new(
        StaticHistory(history),
        StaticForecast::new(vec![125.0, 130.0, 135.0]),
        OutlookConfig::default(),
    );

    let report = service.report(&Resource::labor("Plumber"), None);

    assert_eq!(report.forecast.source, ForecastSource::Provider);
    assert_eq!(report.forecasted_cost, Some(135.0));
    let stats = report.stats.unwrap();
    assert_eq!(stats.last_historical, 120.0);
    assert_eq!(stats.last_forecast, 135.0);
    assert_relative_eq!(stats.percent_change.unwrap(), 20.0 / 110.0 * 100.0, epsilon = 1e-9);
}

#[test]
fn test_report_reuses_cached_forecast() {
    let history = monthly(2024, &[100.0, 110.0]);
    let service = OutlookService::new(StaticHistory(history), FailingForecast, OutlookConfig::default());
    let cached = vec![111.0, 112.0];

    let report = service.report(&Resource::material("Steel"), Some(cached.as_slice()));

    assert_eq!(report.forecast.source, ForecastSource::Cached);
    assert_eq!(report.forecasted_cost, Some(112.0));
    assert_relative_eq!(report.stats.unwrap().forecast_avg, 111.5, epsilon = 1e-12);
}

#[test]
fn test_report_falls_back_to_last_historical() {
    let history = monthly(2024, &[100.0, 110.0]);
    let service = OutlookService::new(StaticHistory(history), FailingForecast, OutlookConfig::default());

    let report = service.report(&Resource::material("Steel"), None);

    assert_eq!(report.forecast.source, ForecastSource::LastHistorical);
    assert_eq!(report.forecast.values, vec![110.0; 6]);
    assert_eq!(report.forecasted_cost, Some(110.0));
    let stats = report.stats.unwrap();
    assert_relative_eq!(stats.percent_change.unwrap(), 10.0 / 105.0 * 100.0, epsilon = 1e-9);
}

#[test]
fn test_report_without_history_has_no_stats() {
    let service = OutlookService::new(
        FailingHistory,
        StaticForecast::new(vec![1.0, 2.0]),
        OutlookConfig::default(),
    );

    let report = service.report(&Resource::labor("Welder"), None);

    assert_eq!(report.forecasted_cost, Some(2.0));
    assert!(report.stats.is_none());
}

#[test]
fn test_views_serialize_for_presentation() {
    let history = monthly(2024, &[100.0]);
    let service = OutlookService::new(
        StaticHistory(history),
        StaticForecast::new(vec![101.0]),
        OutlookConfig::default(),
    );

    let json = serde_json::to_value(service.report(&Resource::material("Sand"), None)).unwrap();

    assert_eq!(json["resource"]["kind"], "material");
    assert_eq!(json["forecastedCost"], 101.0);
    assert_eq!(json["forecast"]["source"], "provider");
    assert_eq!(json["stats"]["lastHistorical"], 100.0);
}
