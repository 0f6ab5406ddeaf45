//! Four-field unit converter: seconds, minutes, decimal hours and clock.
//!
//! Editing one field recomputes the other three from a whole-second base.
//! The edited field keeps the text as typed (after sanitising) so a value
//! like `1,5` is not rewritten under the cursor.

use crate::utils::decimal::{
    format_float_compact, parse_non_negative_float, round_half_up_non_negative, sanitize_decimal,
};
use crate::utils::mask::{MAX_CLOCK_DIGITS, mask_to_clock, parse_complete_clock_to_seconds};
use crate::utils::time::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE, seconds_to_clock};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConverterField {
    Seconds,
    Minutes,
    Hours,
    Clock,
}

impl ConverterField {
    pub const ALL: [ConverterField; 4] = [
        ConverterField::Seconds,
        ConverterField::Minutes,
        ConverterField::Hours,
        ConverterField::Clock,
    ];

    /// Seconds per unit for the decimal fields.
    pub fn factor(&self) -> Option<i64> {
        match self {
            ConverterField::Seconds => Some(1),
            ConverterField::Minutes => Some(SECONDS_PER_MINUTE),
            ConverterField::Hours => Some(SECONDS_PER_HOUR),
            ConverterField::Clock => None,
        }
    }
}

/// Every representation of one base second count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversions {
    pub seconds: String,
    pub minutes: String,
    pub hours: String,
    pub clock: String,
}

impl Conversions {
    pub fn from_seconds(base_seconds: i64) -> Self {
        Self {
            seconds: base_seconds.to_string(),
            minutes: format_float_compact(base_seconds as f64 / SECONDS_PER_MINUTE as f64),
            hours: format_float_compact(base_seconds as f64 / SECONDS_PER_HOUR as f64),
            clock: seconds_to_clock(base_seconds),
        }
    }

    fn slot(&mut self, field: ConverterField) -> &mut String {
        match field {
            ConverterField::Seconds => &mut self.seconds,
            ConverterField::Minutes => &mut self.minutes,
            ConverterField::Hours => &mut self.hours,
            ConverterField::Clock => &mut self.clock,
        }
    }

    pub fn get(&self, field: ConverterField) -> &str {
        match field {
            ConverterField::Seconds => &self.seconds,
            ConverterField::Minutes => &self.minutes,
            ConverterField::Hours => &self.hours,
            ConverterField::Clock => &self.clock,
        }
    }
}

/// Converter state as shown to the user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TimeConverter {
    pub fields: Option<Conversions>,
    pub base_seconds: Option<i64>,
    pub invalid: Option<ConverterField>,
    /// Text left in the edited field after sanitising or masking.
    pub edited_text: String,
}

impl TimeConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.fields = None;
        self.base_seconds = None;
        self.invalid = None;
        self.edited_text.clear();
    }

    fn mark(&mut self, field: ConverterField, invalid: bool) {
        self.invalid = if invalid { Some(field) } else { None };
    }

    fn fill(&mut self, base_seconds: i64, preserve: Option<(ConverterField, &str)>) {
        let mut values = Conversions::from_seconds(base_seconds);
        if let Some((field, text)) = preserve {
            *values.slot(field) = text.to_string();
        }
        self.fields = Some(values);
        self.base_seconds = Some(base_seconds);
        self.invalid = None;
    }

    /// Apply raw text typed into `field`.
    pub fn input(&mut self, field: ConverterField, raw: &str) {
        match field.factor() {
            Some(factor) => self.input_decimal(field, raw, factor),
            None => self.input_clock(raw),
        }
    }

    fn input_decimal(&mut self, field: ConverterField, raw: &str, factor: i64) {
        let (sanitized, had_invalid_chars) = sanitize_decimal(raw);

        if sanitized.is_empty() {
            self.clear();
            self.mark(field, had_invalid_chars);
            return;
        }

        self.edited_text = sanitized.clone();

        let Some(parsed) = parse_non_negative_float(&sanitized) else {
            self.mark(field, true);
            return;
        };

        let base_seconds = round_half_up_non_negative(parsed * factor as f64);
        self.fill(base_seconds, Some((field, &sanitized)));
        self.mark(field, had_invalid_chars);
    }

    fn input_clock(&mut self, raw: &str) {
        let masked = mask_to_clock(raw);
        let had_invalid_chars = raw.chars().any(|c| !c.is_ascii_digit() && c != ':')
            || raw.chars().filter(char::is_ascii_digit).count() > MAX_CLOCK_DIGITS;

        if masked.is_empty() {
            self.clear();
            self.mark(ConverterField::Clock, had_invalid_chars);
            return;
        }

        self.edited_text = masked.clone();

        let Some(base_seconds) = parse_complete_clock_to_seconds(&masked) else {
            self.mark(ConverterField::Clock, true);
            return;
        };

        self.fill(base_seconds, None);
        self.mark(ConverterField::Clock, had_invalid_chars);
    }
}
