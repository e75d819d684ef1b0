//! Configuration for the outlook views and providers

use crate::error::{OutlookError, Result};
use crate::export::PageLayout;
use crate::fallback::FallbackPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub const ENV_HORIZON: &str = "PRICE_OUTLOOK_HORIZON";
pub const ENV_FORECAST_ENDPOINT: &str = "PRICE_OUTLOOK_FORECAST_ENDPOINT";
pub const ENV_TIMEOUT_SECS: &str = "PRICE_OUTLOOK_TIMEOUT_SECS";

/// Settings shared by the chart and report views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlookConfig {
    /// Months of forecast requested from the provider
    pub horizon: usize,
    pub forecast_endpoint: String,
    pub request_timeout_secs: u64,
    /// Fallback for the chart view
    pub chart_fallback: FallbackPolicy,
    /// Fallback for the report view
    pub report_fallback: FallbackPolicy,
    pub page: PageLayout,
}

impl Default for OutlookConfig {
    fn default() -> Self {
        Self {
            horizon: 6,
            forecast_endpoint: "http://localhost:8000/forecast".to_string(),
            request_timeout_secs: 10,
            chart_fallback: FallbackPolicy::None,
            report_fallback: FallbackPolicy::ReuseOrLastHistorical,
            page: PageLayout::default(),
        }
    }
}

impl OutlookConfig {
    /// Read a JSON config file; absent keys keep their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading outlook config");
        let raw = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by the process environment and a `.env` file
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "loaded .env");
        }
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `PRICE_OUTLOOK_*` overrides looked up through `lookup`
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_HORIZON) {
            self.horizon = parse_var(ENV_HORIZON, &raw)?;
        }
        if let Some(raw) = lookup(ENV_FORECAST_ENDPOINT) {
            self.forecast_endpoint = raw.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            self.request_timeout_secs = parse_var(ENV_TIMEOUT_SECS, &raw)?;
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.horizon == 0 {
            return Err(OutlookError::Config(
                "horizon must be at least one month".to_string(),
            ));
        }
        if self.forecast_endpoint.is_empty() {
            return Err(OutlookError::Config(
                "forecast_endpoint must not be empty".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(OutlookError::Config(
                "request_timeout_secs must be positive".to_string(),
            ));
        }
        if !self.page.is_valid() {
            return Err(OutlookError::Config(format!(
                "page margins leave no printable area: {:?}",
                self.page
            )));
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| OutlookError::Config(format!("{} has invalid value {:?}", key, raw)))
}
