//! Error types for the price_outlook crate

use price_forecast::ForecastError;
use thiserror::Error;

/// Errors raised by providers, configuration and the view builders
#[derive(Debug, Error)]
pub enum OutlookError {
    /// A data provider could not answer
    #[error("Provider error: {0}")]
    Provider(String),

    /// Invalid or unreadable configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Transport error talking to the forecast endpoint
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Malformed JSON payload
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error loading or evaluating price data
    #[error("Forecast error: {0}")]
    Forecast(#[from] ForecastError),
}

/// Result type for price_outlook operations
pub type Result<T> = std::result::Result<T, OutlookError>;
