//! Historical price data handling

use crate::error::{ForecastError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// A single observed cost at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    /// When the cost was observed
    pub timestamp: DateTime<Utc>,
    /// Observed cost, never negative
    pub cost: f64,
}

impl HistoricalPoint {
    /// Create a new historical point
    pub fn new(timestamp: DateTime<Utc>, cost: f64) -> Self {
        Self { timestamp, cost }
    }
}

/// Historical observations ordered ascending by timestamp
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSeries {
    points: Vec<HistoricalPoint>,
}

impl HistoricalSeries {
    /// Build a series from points, sorting them by timestamp
    pub fn new(mut points: Vec<HistoricalPoint>) -> Self {
        points.sort_by_key(|p| p.timestamp);
        Self { points }
    }

    /// Get the points in chronological order
    pub fn points(&self) -> &[HistoricalPoint] {
        &self.points
    }

    /// Consume the series and return its points
    pub fn into_points(self) -> Vec<HistoricalPoint> {
        self.points
    }

    /// Get the costs as a vector
    pub fn costs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.cost).collect()
    }

    /// Get the most recent point
    pub fn last(&self) -> Option<&HistoricalPoint> {
        self.points.last()
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series holds no observations
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<HistoricalPoint>> for HistoricalSeries {
    fn from(points: Vec<HistoricalPoint>) -> Self {
        Self::new(points)
    }
}

/// Data loader for historical cost files
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a historical series from a CSV file
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<HistoricalSeries> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading historical costs");
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a historical series from any CSV source
    ///
    /// The header must contain a `timestamp` (or `date`) column and a `cost`
    /// column, matched case-insensitively. Other columns are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<HistoricalSeries> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let time_idx = Self::detect_column(&headers, &["timestamp", "date", "time"])
            .ok_or_else(|| ForecastError::DataError("No time column found in data".to_string()))?;
        let cost_idx = Self::detect_column(&headers, &["cost", "price", "value"])
            .ok_or_else(|| ForecastError::DataError("No cost column found in data".to_string()))?;

        let mut points = Vec::new();
        for (row, record) in rdr.records().enumerate() {
            let record = record?;
            let raw_time = record.get(time_idx).ok_or_else(|| {
                ForecastError::DataError(format!("Row {} is missing a timestamp", row + 1))
            })?;
            let raw_cost = record.get(cost_idx).ok_or_else(|| {
                ForecastError::DataError(format!("Row {} is missing a cost", row + 1))
            })?;

            let timestamp = date_parser::parse_timestamp(raw_time)?;
            let cost: f64 = raw_cost.parse()?;
            if cost < 0.0 || !cost.is_finite() {
                return Err(ForecastError::DataError(format!(
                    "Row {} has invalid cost {}",
                    row + 1,
                    raw_cost
                )));
            }

            points.push(HistoricalPoint::new(timestamp, cost));
        }

        debug!(rows = points.len(), "historical costs loaded");
        Ok(HistoricalSeries::new(points))
    }

    /// Find the first header matching one of the candidate names
    fn detect_column(headers: &csv::StringRecord, candidates: &[&str]) -> Option<usize> {
        candidates.iter().find_map(|candidate| {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(candidate))
        })
    }
}

/// Timestamp parsing for the formats found in cost exports
pub mod date_parser {
    use super::*;

    const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
    const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

    /// Parse a timestamp, treating values without an offset as UTC
    pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
        let raw = raw.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(dt.with_timezone(&Utc));
        }

        for format in DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Ok(Utc.from_utc_datetime(&naive));
            }
        }

        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
                if let Some(naive) = date.and_hms_opt(0, 0, 0) {
                    return Ok(Utc.from_utc_datetime(&naive));
                }
            }
        }

        Err(ForecastError::ParseError(format!(
            "Unrecognized timestamp: {}",
            raw
        )))
    }
}
