//! Formatting utilities used for CLI output.

use crate::models::row::RowStatus;
use crate::ui::labels::Language;
use unicode_width::UnicodeWidthStr;

/// Pad to a display width; Polish captions contain multi-byte characters.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// `Caption: value` with captions aligned to `width`.
pub fn caption_line(caption: &str, value: &str, width: usize) -> String {
    format!("{} {}", pad_right(&format!("{}:", caption), width), value)
}

pub fn describe_status(status: RowStatus, lang: Language) -> &'static str {
    match (status, lang) {
        (RowStatus::Included, Language::Pl) => "ok",
        (RowStatus::Included, Language::En) => "ok",
        (RowStatus::Empty, Language::Pl) => "pusty",
        (RowStatus::Empty, Language::En) => "empty",
        (RowStatus::Incomplete, Language::Pl) => "niepełny",
        (RowStatus::Incomplete, Language::En) => "incomplete",
        (RowStatus::InvalidMultiplier, Language::Pl) => "zły mnożnik",
        (RowStatus::InvalidMultiplier, Language::En) => "invalid multiplier",
        (RowStatus::Inactive, Language::Pl) => "nieaktywny",
        (RowStatus::Inactive, Language::En) => "inactive",
    }
}
