//! # Price Outlook
//!
//! `price_outlook` builds the historical versus forecasted price views of a
//! material and labor cost dashboard.
//!
//! Data arrives through two providers: a [`HistoricalProvider`] for observed
//! costs and a [`ForecastProvider`] for predictions. [`OutlookService`] queries
//! both, applies the configured [`FallbackPolicy`] when a forecast is missing,
//! and hands the results to `price_forecast` for accuracy metrics, the merged
//! chart series, and report statistics. [`PageLayout`] sizes rendered report
//! images for export.
//!
//! ## Example
//!
//! ```no_run
//! use price_outlook::{CsvHistoricalProvider, HttpForecastProvider, OutlookConfig, OutlookService, Resource};
//!
//! let config = OutlookConfig::from_env()?;
//! let service = OutlookService::new(
//!     CsvHistoricalProvider::new("data/history"),
//!     HttpForecastProvider::from_config(&config)?,
//!     config,
//! );
//!
//! let chart = service.chart(&Resource::material("Steel Rebar"));
//! println!("MAPE {:.2}%", chart.metrics.mape);
//!
//! let report = service.report(&Resource::labor("Electrician"), Some(chart.forecast.values.as_slice()));
//! if let Some(stats) = report.stats {
//!     println!("{}", stats);
//! }
//! # Ok::<(), price_outlook::OutlookError>(())
//! ```

pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod fallback;
pub mod provider;

pub use config::OutlookConfig;
pub use dashboard::{ChartView, OutlookService, ReportView};
pub use error::{OutlookError, Result};
pub use export::{ImagePlacement, PageLayout, PagePlacement};
pub use fallback::{FallbackPolicy, ForecastSource, ResolvedForecast};
pub use provider::{
    CsvHistoricalProvider, ForecastProvider, HistoricalProvider, HttpForecastProvider, Resource,
    ResourceType,
};
