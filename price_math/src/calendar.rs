//! Calendar-month stepping and chart labels
//!
//! Month addition clamps the day-of-month to the last valid day of the target
//! month, so Jan 31 + 1 month is Feb 28 (or Feb 29 in a leap year).

use crate::{MathError, Result};
use chrono::{DateTime, Months, TimeZone};

/// Add `months` calendar months to `date`
pub fn add_months<Tz: TimeZone>(date: &DateTime<Tz>, months: u32) -> Result<DateTime<Tz>> {
    date.clone()
        .checked_add_months(Months::new(months))
        .ok_or_else(|| {
            MathError::CalculationError(format!(
                "Adding {} months leaves the supported date range",
                months
            ))
        })
}

/// Abbreviated month name and two-digit year, e.g. `Jan 24`
pub fn month_label<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%b %y").to_string()
}
