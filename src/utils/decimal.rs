//! Decimal input handling for multipliers and converter fields.
//!
//! Both `,` and `.` are accepted as the decimal separator. Everything here
//! is a soft parser: malformed input yields `None`, never an error.

/// Literals the multiplier field may hold mid-typing that are not numbers.
const MULTIPLIER_PLACEHOLDERS: [&str; 5] = [".", "+", "-", "+.", "-."];

/// Round to a fixed number of decimal places (half away from zero).
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Keep digits and the first separator. Returns the cleaned text and
/// whether anything had to be dropped.
pub fn sanitize_decimal(raw: &str) -> (String, bool) {
    let mut result = String::with_capacity(raw.len());
    let mut separator_added = false;
    let mut had_invalid = false;

    for c in raw.chars() {
        if c.is_ascii_digit() {
            result.push(c);
        } else if c == '.' || c == ',' {
            if separator_added {
                had_invalid = true;
            } else {
                result.push(c);
                separator_added = true;
            }
        } else {
            had_invalid = true;
        }
    }

    (result, had_invalid)
}

/// What the multiplier field keeps after each keystroke.
pub fn sanitize_multiplier_text(raw: &str) -> String {
    sanitize_decimal(raw).0
}

pub fn normalize_decimal(raw: &str) -> String {
    raw.trim().replace(',', ".")
}

pub fn parse_non_negative_float(raw: &str) -> Option<f64> {
    let normalized = normalize_decimal(raw);
    if normalized.is_empty() || normalized == "." {
        return None;
    }
    if normalized.matches('.').count() > 1 {
        return None;
    }
    if !normalized.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }

    let value = normalized.parse::<f64>().ok()?;
    if value < 0.0 {
        return None;
    }
    Some(value)
}

pub fn parse_multiplier(raw: &str) -> Option<f64> {
    let normalized = normalize_decimal(raw);
    if MULTIPLIER_PLACEHOLDERS.contains(&normalized.as_str()) {
        return None;
    }
    parse_non_negative_float(&normalized)
}

pub fn is_valid_multiplier(raw: &str) -> bool {
    parse_multiplier(raw).is_some()
}

/// `floor(value + 0.5)`; only meaningful for non-negative input.
pub fn round_half_up_non_negative(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Up to 4 decimals, trailing zeros and dot removed.
///
/// `90.0` → `"90"`, `1.5` → `"1.5"`, `0.016666` → `"0.0167"`.
pub fn format_float_compact(value: f64) -> String {
    let rounded = round_to(value, 4);
    if rounded.fract() == 0.0 {
        return format!("{}", rounded as i64);
    }
    format!("{:.4}", rounded)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
