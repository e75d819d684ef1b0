//! Contracts for the services that supply price data
//!
//! Historical costs come from a backing store and forecasts from a remote
//! prediction endpoint. Both are consumed through the traits below so the view
//! builders can be exercised against any source.

use crate::error::{OutlookError, Result};
use price_forecast::HistoricalPoint;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod csv_history;
pub mod http_forecast;

pub use csv_history::CsvHistoricalProvider;
pub use http_forecast::HttpForecastProvider;

/// Kind of priced resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Material,
    Labor,
}

impl ResourceType {
    /// Wire name used by the providers
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Material => "material",
            ResourceType::Labor => "labor",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = OutlookError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "material" => Ok(ResourceType::Material),
            "labor" | "labour" => Ok(ResourceType::Labor),
            other => Err(OutlookError::Provider(format!(
                "Unknown resource type: {}",
                other
            ))),
        }
    }
}

/// A named material or labor category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resource {
    pub kind: ResourceType,
    pub name: String,
}

impl Resource {
    pub fn new(kind: ResourceType, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    pub fn material(name: impl Into<String>) -> Self {
        Self::new(ResourceType::Material, name)
    }

    pub fn labor(name: impl Into<String>) -> Self {
        Self::new(ResourceType::Labor, name)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.name)
    }
}

/// Source of historical observations
pub trait HistoricalProvider {
    /// Observations for `resource`, ascending by timestamp
    ///
    /// Costs are expected to be non-negative, as enforced by
    /// [`price_forecast::DataLoader`] for file-backed history.
    fn history(&self, resource: &Resource) -> Result<Vec<HistoricalPoint>>;
}

/// Source of forecast values
pub trait ForecastProvider {
    /// Forecast for the `horizon` months following the latest observation
    fn forecast(&self, resource: &Resource, horizon: usize) -> Result<Vec<f64>>;
}

impl<T: HistoricalProvider + ?Sized> HistoricalProvider for &T {
    fn history(&self, resource: &Resource) -> Result<Vec<HistoricalPoint>> {
        (**self).history(resource)
    }
}

impl<T: ForecastProvider + ?Sized> ForecastProvider for &T {
    fn forecast(&self, resource: &Resource, horizon: usize) -> Result<Vec<f64>> {
        (**self).forecast(resource, horizon)
    }
}

impl<T: HistoricalProvider + ?Sized> HistoricalProvider for Box<T> {
    fn history(&self, resource: &Resource) -> Result<Vec<HistoricalPoint>> {
        (**self).history(resource)
    }
}

impl<T: ForecastProvider + ?Sized> ForecastProvider for Box<T> {
    fn forecast(&self, resource: &Resource, horizon: usize) -> Result<Vec<f64>> {
        (**self).forecast(resource, horizon)
    }
}
