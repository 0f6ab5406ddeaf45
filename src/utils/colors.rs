//! Colour helpers for terminal output.

use crate::models::row::RowStatus;
use ansi_term::{Colour, Style};

/// Signed totals:
/// \>0 → green
/// \<0 → red
/// 0 → plain
pub fn style_for_signed(value: i64) -> Style {
    if value > 0 {
        Colour::Green.normal()
    } else if value < 0 {
        Colour::Red.normal()
    } else {
        Style::new()
    }
}

pub fn paint_signed(text: &str, value: i64) -> String {
    style_for_signed(value).paint(text).to_string()
}

/// Included rows stay plain, inactive ones are greyed out, anything the
/// user still has to fix is red.
pub fn style_for_status(status: RowStatus) -> Style {
    match status {
        RowStatus::Included => Style::new(),
        RowStatus::Inactive | RowStatus::Empty => Colour::Fixed(244).normal(),
        RowStatus::Incomplete | RowStatus::InvalidMultiplier => Colour::Red.normal(),
    }
}

pub fn invalid(text: &str) -> String {
    Colour::Red.bold().paint(text).to_string()
}
