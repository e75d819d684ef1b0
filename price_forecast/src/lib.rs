//! # Price Forecast
//!
//! Evaluation and presentation data for historical versus forecasted
//! commodity and labor prices.
//!
//! ## Features
//!
//! - Historical cost series loaded from CSV
//! - Forecast accuracy against the most recent history (MAPE, RMSE)
//! - A combined, month-labeled series for charting history next to the forecast
//! - Summary statistics for the exported price report
//!
//! Every operation here is a pure function of its inputs. Empty or degenerate
//! inputs produce zeros, shorter series, or `None` instead of errors.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use price_forecast::{build_combined_series, compute_report_stats, evaluate_forecast, HistoricalPoint};
//!
//! let history = vec![
//!     HistoricalPoint::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(), 100.0),
//!     HistoricalPoint::new(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(), 110.0),
//! ];
//! let forecast = vec![105.0, 115.0];
//!
//! let metrics = evaluate_forecast(&history, &forecast);
//! assert!((metrics.rmse - 5.0).abs() < 1e-9);
//!
//! let chart = build_combined_series(&history, &forecast);
//! assert_eq!(chart[2].label, "Mar 24");
//!
//! let stats = compute_report_stats(&history, &forecast, forecast.last().copied()).unwrap();
//! assert_eq!(stats.last_forecast, 115.0);
//! ```

pub mod data;
pub mod error;
pub mod metrics;
pub mod report;
pub mod series;

// Re-export commonly used types
pub use crate::data::{DataLoader, HistoricalPoint, HistoricalSeries};
pub use crate::error::{ForecastError, Result};
pub use crate::metrics::{compute_mape, compute_rmse, evaluate_forecast, AccuracyMetrics};
pub use crate::report::{compute_report_stats, ReportStats};
pub use crate::series::{build_combined_series, build_combined_series_from, CombinedPoint};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
