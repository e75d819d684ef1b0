mod common;

use common::monthly;
use price_outlook::{FallbackPolicy, ForecastSource, OutlookError, ResolvedForecast};
use rstest::rstest;

fn failure() -> price_outlook::Result<Vec<f64>> {
    Err(OutlookError::Provider("unreachable".to_string()))
}

#[rstest]
#[case(FallbackPolicy::None)]
#[case(FallbackPolicy::LastHistorical)]
#[case(FallbackPolicy::ReuseOrLastHistorical)]
fn test_provider_values_win(#[case] policy: FallbackPolicy) {
    let history = monthly(2024, &[10.0]);

    let resolved = policy.resolve(Ok(vec![11.0, 12.0]), &history, Some(&[99.0][..]), 6);

    assert_eq!(resolved.values, vec![11.0, 12.0]);
    assert_eq!(resolved.source, ForecastSource::Provider);
    assert!(!resolved.is_fallback());
}

#[test]
fn test_none_policy_gives_nothing() {
    let history = monthly(2024, &[10.0]);

    let resolved = FallbackPolicy::None.resolve(failure(), &history, Some(&[99.0][..]), 6);

    assert_eq!(resolved, ResolvedForecast::unavailable());
    assert_eq!(resolved.last(), None);
}

#[test]
fn test_last_historical_is_flat_over_horizon() {
    let history = monthly(2024, &[10.0, 14.0]);

    let resolved = FallbackPolicy::LastHistorical.resolve(failure(), &history, None, 4);

    assert_eq!(resolved.values, vec![14.0; 4]);
    assert_eq!(resolved.source, ForecastSource::LastHistorical);
    assert!(resolved.is_fallback());
}

#[test]
fn test_empty_provider_answer_triggers_fallback() {
    let history = monthly(2024, &[10.0]);

    let resolved = FallbackPolicy::LastHistorical.resolve(Ok(Vec::new()), &history, None, 2);

    assert_eq!(resolved.values, vec![10.0, 10.0]);
}

#[rstest]
#[case(Some(vec![5.0, 6.0]), ForecastSource::Cached, vec![5.0, 6.0])]
#[case(Some(vec![]), ForecastSource::LastHistorical, vec![14.0, 14.0, 14.0])]
#[case(None, ForecastSource::LastHistorical, vec![14.0, 14.0, 14.0])]
fn test_reuse_then_last_historical(
    #[case] cached: Option<Vec<f64>>,
    #[case] source: ForecastSource,
    #[case] values: Vec<f64>,
) {
    let history = monthly(2024, &[10.0, 14.0]);

    let resolved = FallbackPolicy::ReuseOrLastHistorical.resolve(
        failure(),
        &history,
        cached.as_deref(),
        3,
    );

    assert_eq!(resolved.source, source);
    assert_eq!(resolved.values, values);
}

#[test]
fn test_no_history_means_unavailable() {
    let resolved = FallbackPolicy::ReuseOrLastHistorical.resolve(failure(), &[], None, 6);

    assert_eq!(resolved.source, ForecastSource::Unavailable);
    assert!(resolved.values.is_empty());
}

#[test]
fn test_policy_names() {
    let policy: FallbackPolicy = serde_json::from_str("\"reuse_or_last_historical\"").unwrap();
    assert_eq!(policy, FallbackPolicy::ReuseOrLastHistorical);
    assert_eq!(FallbackPolicy::default(), FallbackPolicy::None);
}
