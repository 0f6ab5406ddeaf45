//! Progressive masking of clock input.
//!
//! Keystrokes are reduced to digits and re-rendered right-aligned: the last
//! four digits are always minutes and seconds, anything before them is the
//! hours prefix.

use crate::errors::{AppError, AppResult};
use crate::utils::time::clock_to_seconds;
use serde::Serialize;

/// Longest digit buffer accepted (allows 3-digit hours).
pub const MAX_CLOCK_DIGITS: usize = 7;
/// Shortest digit buffer that forms a complete clock (`H:MM:SS`).
pub const MIN_COMPLETE_DIGITS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockInputState {
    Empty,
    Incomplete,
    Complete,
}

impl ClockInputState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClockInputState::Empty => "empty",
            ClockInputState::Incomplete => "incomplete",
            ClockInputState::Complete => "complete",
        }
    }
}

/// Keep ASCII digits only, truncated to [`MAX_CLOCK_DIGITS`].
pub fn sanitize_digits(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_CLOCK_DIGITS)
        .collect()
}

fn split_hms(digits: &str) -> String {
    let len = digits.len();
    format!(
        "{}:{}:{}",
        &digits[..len - 4],
        &digits[len - 4..len - 2],
        &digits[len - 2..]
    )
}

/// Re-render a keystroke buffer as a partial or complete clock string.
///
/// ```
/// use godzinator::utils::mask::mask_to_clock;
/// assert_eq!(mask_to_clock("1435"), "14:35");
/// assert_eq!(mask_to_clock("14355"), "1:43:55");
/// ```
pub fn mask_to_clock(raw: &str) -> String {
    let digits = sanitize_digits(raw);
    match digits.len() {
        0..=3 => digits,
        4 => format!("{}:{}", &digits[..2], &digits[2..]),
        _ => split_hms(&digits),
    }
}

pub fn classify_clock(value: &str) -> ClockInputState {
    match sanitize_digits(value).len() {
        0 => ClockInputState::Empty,
        n if n < MIN_COMPLETE_DIGITS => ClockInputState::Incomplete,
        _ => ClockInputState::Complete,
    }
}

pub fn is_complete_clock(value: &str) -> bool {
    classify_clock(value) == ClockInputState::Complete
}

/// Convert a complete digit buffer into a clock string.
pub fn digits_to_clock(value: &str) -> AppResult<String> {
    let digits = sanitize_digits(value);
    if !(MIN_COMPLETE_DIGITS..=MAX_CLOCK_DIGITS).contains(&digits.len()) {
        return Err(AppError::InvalidValue(format!(
            "time value must contain {} to {} digits, got '{}'",
            MIN_COMPLETE_DIGITS, MAX_CLOCK_DIGITS, value
        )));
    }
    Ok(split_hms(&digits))
}

/// Soft parse of a masked clock: `None` unless the value is complete, has
/// three components and minutes/seconds within 0..=59.
pub fn parse_complete_clock_to_seconds(value: &str) -> Option<i64> {
    if !is_complete_clock(value) {
        return None;
    }

    let parts: Vec<i64> = value
        .split(':')
        .map(|p| p.parse::<i64>())
        .collect::<Result<_, _>>()
        .ok()?;

    match parts.as_slice() {
        [h, m, s] if *h >= 0 && (0..=59).contains(m) && (0..=59).contains(s) => {
            clock_to_seconds(value).ok()
        }
        _ => None,
    }
}
