//! Forecast provider backed by a remote prediction endpoint

use super::{ForecastProvider, Resource};
use crate::config::OutlookConfig;
use crate::error::{OutlookError, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Request body sent to the forecast endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastRequest<'a> {
    pub resource_type: &'a str,
    pub resource_name: &'a str,
    pub horizon: usize,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    forecast: Vec<f64>,
}

/// POSTs forecast requests as JSON and reads `{"forecast": [..]}` back
#[derive(Debug, Clone)]
pub struct HttpForecastProvider {
    client: Client,
    endpoint: String,
}

impl HttpForecastProvider {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &OutlookConfig) -> Result<Self> {
        Self::new(
            config.forecast_endpoint.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Parse the endpoint's JSON body into forecast values
    pub fn parse_response(body: &str) -> Result<Vec<f64>> {
        let response: ForecastResponse = serde_json::from_str(body)?;
        if response.forecast.iter().any(|v| !v.is_finite()) {
            return Err(OutlookError::Provider(
                "Forecast contains non-finite values".to_string(),
            ));
        }
        Ok(response.forecast)
    }
}

impl ForecastProvider for HttpForecastProvider {
    fn forecast(&self, resource: &Resource, horizon: usize) -> Result<Vec<f64>> {
        let request = ForecastRequest {
            resource_type: resource.kind.as_str(),
            resource_name: &resource.name,
            horizon,
        };
        info!(%resource, horizon, endpoint = %self.endpoint, "requesting forecast");

        let response = self.client.post(self.endpoint.as_str()).json(&request).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(OutlookError::Provider(format!(
                "Forecast endpoint returned {}",
                status
            )));
        }

        let values = Self::parse_response(&response.text()?)?;
        if values.len() != horizon {
            warn!(%resource, horizon, received = values.len(), "forecast length differs from horizon");
        }
        Ok(values)
    }
}
