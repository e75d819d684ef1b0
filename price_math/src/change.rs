//! Averages and relative change

use crate::{MathError, Result};

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Percentage change from `base` to `value`
///
/// A zero base has no defined relative change and is rejected rather than
/// returning an infinite or NaN result.
pub fn percent_change(base: f64, value: f64) -> Result<f64> {
    if base == 0.0 {
        return Err(MathError::InvalidInput(
            "Cannot compute percent change from a zero base".to_string(),
        ));
    }
    if !base.is_finite() || !value.is_finite() {
        return Err(MathError::InvalidInput(format!(
            "Non-finite input to percent change: base={}, value={}",
            base, value
        )));
    }

    Ok((value - base) / base * 100.0)
}
