//! # Price Outlook Workspace
//!
//! Historical versus forecasted material and labor prices, re-exported from
//! the member crates:
//!
//! - [`math`]: tail alignment, calendar months and percentage change
//! - [`forecast`]: accuracy metrics, the combined chart series and report statistics
//! - [`outlook`]: providers, fallback policies, configuration and views
//!
//! ## Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use price_outlook_workspace::prelude::*;
//!
//! let history = vec![HistoricalPoint::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(), 0.0)];
//! let metrics = evaluate_forecast(&history, &[10.0]);
//! assert_eq!(metrics.mape, 0.0);
//! assert_eq!(metrics.rmse, 10.0);
//! ```

pub use price_forecast as forecast;
pub use price_math as math;
pub use price_outlook as outlook;

/// The types most dashboards need
pub mod prelude {
    pub use price_forecast::{
        build_combined_series, compute_mape, compute_report_stats, compute_rmse,
        evaluate_forecast, AccuracyMetrics, CombinedPoint, HistoricalPoint, ReportStats,
    };
    pub use price_outlook::{
        FallbackPolicy, ForecastProvider, HistoricalProvider, OutlookConfig, OutlookService,
        Resource, ResourceType,
    };
}
