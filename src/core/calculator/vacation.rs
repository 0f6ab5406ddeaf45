//! Day-equivalent of a duration against a daily norm.

use crate::errors::AppResult;
use crate::utils::decimal::round_to;
use crate::utils::time::clock_to_seconds;

/// `planned / norm` rounded to 2 decimals.
///
/// A norm that does not parse, or is not positive, yields `0.0` instead of
/// an error: the norm is free user input.
pub fn vacation_days(planned_seconds: i64, daily_norm: &str) -> f64 {
    match clock_to_seconds(daily_norm) {
        Ok(norm) if norm > 0 => round_to(planned_seconds as f64 / norm as f64, 2),
        _ => 0.0,
    }
}

/// Same as [`vacation_days`] with the planned duration given as a clock
/// string. A malformed planned clock is an error.
pub fn vacation_days_from_clock(planned: &str, daily_norm: &str) -> AppResult<f64> {
    let planned_seconds = clock_to_seconds(planned)?;
    Ok(vacation_days(planned_seconds, daily_norm))
}

/// Whether a daily-norm field holds a usable divisor.
pub fn is_valid_daily_norm(value: &str) -> bool {
    crate::utils::mask::is_complete_clock(value)
        && clock_to_seconds(value).is_ok_and(|norm| norm > 0)
}
