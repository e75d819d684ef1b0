#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use price_forecast::HistoricalPoint;
use price_outlook::{ForecastProvider, HistoricalProvider, OutlookError, Resource, Result};
use std::cell::RefCell;

/// Monthly points starting in January of `year`
pub fn monthly(year: i32, costs: &[f64]) -> Vec<HistoricalPoint> {
    costs
        .iter()
        .enumerate()
        .map(|(i, &cost)| {
            let month = i as u32 % 12 + 1;
            let year = year + (i / 12) as i32;
            HistoricalPoint::new(Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).unwrap(), cost)
        })
        .collect()
}

pub struct StaticHistory(pub Vec<HistoricalPoint>);

impl HistoricalProvider for StaticHistory {
    fn history(&self, _resource: &Resource) -> Result<Vec<HistoricalPoint>> {
        Ok(self.0.clone())
    }
}

pub struct FailingHistory;

impl HistoricalProvider for FailingHistory {
    fn history(&self, _resource: &Resource) -> Result<Vec<HistoricalPoint>> {
        Err(OutlookError::Provider("database unavailable".to_string()))
    }
}

/// Records requested horizons and answers with fixed values
pub struct StaticForecast {
    pub values: Vec<f64>,
    pub requests: RefCell<Vec<usize>>,
}

impl StaticForecast {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl ForecastProvider for StaticForecast {
    fn forecast(&self, _resource: &Resource, horizon: usize) -> Result<Vec<f64>> {
        self.requests.borrow_mut().push(horizon);
        Ok(self.values.clone())
    }
}

pub struct FailingForecast;

impl ForecastProvider for FailingForecast {
    fn forecast(&self, _resource: &Resource, _horizon: usize) -> Result<Vec<f64>> {
        Err(OutlookError::Provider("forecast endpoint timed out".to_string()))
    }
}
