//! Clock utilities: canonical `H:MM:SS` parsing and formatting, signed
//! display and decimal hours.
//!
//! Durations are plain `i64` second counts. The hours field is never
//! clamped to a day, so `143:55:00` is a valid clock string.

use crate::errors::{AppError, AppResult};
use crate::utils::decimal::round_to;

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3600;

/// The zero duration in canonical form.
pub const ZERO_CLOCK: &str = "00:00:00";

/// Format a second count as `HH:MM:SS`.
///
/// Hours are padded to two digits and grow without limit. No sign is
/// rendered; callers that may hold a negative total go through
/// [`format_signed_seconds`].
pub fn seconds_to_clock(seconds: i64) -> String {
    let hours = seconds.div_euclid(SECONDS_PER_HOUR);
    let minutes = seconds.rem_euclid(SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let secs = seconds.rem_euclid(SECONDS_PER_MINUTE);
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Parse a canonical clock string into seconds.
///
/// Exactly three integer components are required. Minutes and seconds are
/// not range-checked here; see `mask::parse_complete_clock_to_seconds`.
pub fn clock_to_seconds(clock: &str) -> AppResult<i64> {
    let parts: Vec<&str> = clock.split(':').collect();
    if parts.len() != 3 {
        return Err(AppError::Parse(format!(
            "'{}' must have exactly 3 components, found {}",
            clock,
            parts.len()
        )));
    }

    let mut values = [0i64; 3];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = part
            .parse::<i64>()
            .map_err(|_| AppError::Parse(format!("'{}' is not an integer in '{}'", part, clock)))?;
    }

    let [hours, minutes, seconds] = values;
    hours
        .checked_mul(SECONDS_PER_HOUR)
        .zip(minutes.checked_mul(SECONDS_PER_MINUTE))
        .and_then(|(h, m)| h.checked_add(m))
        .and_then(|hm| hm.checked_add(seconds))
        .ok_or_else(|| AppError::Parse(format!("'{}' is out of range", clock)))
}

/// Seconds expressed as hours, rounded to 2 decimal places.
pub fn seconds_to_float_hours(seconds: i64) -> f64 {
    round_to(seconds as f64 / SECONDS_PER_HOUR as f64, 2)
}

/// `-HH:MM:SS` for negative totals, plain `HH:MM:SS` otherwise.
pub fn format_signed_seconds(total_seconds: i64) -> String {
    let sign = if total_seconds < 0 { "-" } else { "" };
    let magnitude = total_seconds.unsigned_abs();
    let hours = magnitude / SECONDS_PER_HOUR as u64;
    let minutes = magnitude % SECONDS_PER_HOUR as u64 / SECONDS_PER_MINUTE as u64;
    let secs = magnitude % SECONDS_PER_MINUTE as u64;
    format!("{}{:02}:{:02}:{:02}", sign, hours, minutes, secs)
}

/// Parse a clock string that may carry a leading `-` (or `+`).
///
/// Used for user-facing arguments such as a negative planned duration.
pub fn parse_signed_clock(value: &str) -> AppResult<i64> {
    let trimmed = value.trim();
    if let Some(rest) = trimmed.strip_prefix('-') {
        return clock_to_seconds(rest)?
            .checked_neg()
            .ok_or_else(|| AppError::Parse(format!("'{}' is out of range", value)));
    }
    clock_to_seconds(trimmed.strip_prefix('+').unwrap_or(trimmed))
}
