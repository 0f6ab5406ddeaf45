//! Captions in the two supported languages.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pl,
    En,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    TimeSum,
    DailyNorm,
    QuickNorm,
    ClockFormat,
    DecimalFormat,
    DayCount,
    Converter,
    Seconds,
    Minutes,
    DecimalHours,
    ClockField,
    VacationDays,
    PlannedTime,
    Row,
    Operator,
    Value,
    Multiplier,
    Status,
    Description,
    InvalidNorm,
    InvalidField,
    Masked,
    State,
}

impl Label {
    pub fn text(&self, lang: Language) -> &'static str {
        use Label::*;
        match (self, lang) {
            (TimeSum, Language::Pl) => "Sumowanie czasu",
            (TimeSum, Language::En) => "Time sum",
            (DailyNorm, Language::Pl) => "Norma dobowa",
            (DailyNorm, Language::En) => "Daily norm",
            (QuickNorm, Language::Pl) => "Szybka norma",
            (QuickNorm, Language::En) => "Quick norm",
            (ClockFormat, Language::Pl) => "Format zegarowy",
            (ClockFormat, Language::En) => "Clock format",
            (DecimalFormat, Language::Pl) => "Format dziesiętny",
            (DecimalFormat, Language::En) => "Decimal format",
            (DayCount, Language::Pl) => "Liczba dni",
            (DayCount, Language::En) => "Number of days",
            (Converter, Language::Pl) => "Konwerter czasu",
            (Converter, Language::En) => "Time converter",
            (Seconds, Language::Pl) => "Sekundy",
            (Seconds, Language::En) => "Seconds",
            (Minutes, Language::Pl) => "Minuty",
            (Minutes, Language::En) => "Minutes",
            (DecimalHours, Language::Pl) => "Godziny dziesiętne",
            (DecimalHours, Language::En) => "Decimal hours",
            (ClockField, Language::Pl) => "Format zegarowy (HH:MM:SS)",
            (ClockField, Language::En) => "Clock format (HH:MM:SS)",
            (VacationDays, Language::Pl) => "Dni z normy",
            (VacationDays, Language::En) => "Days from norm",
            (PlannedTime, Language::Pl) => "Planowany czas",
            (PlannedTime, Language::En) => "Planned time",
            (Row, Language::Pl) => "Nr",
            (Row, Language::En) => "No",
            (Operator, Language::Pl) => "Op",
            (Operator, Language::En) => "Op",
            (Value, Language::Pl) => "Czas",
            (Value, Language::En) => "Time",
            (Multiplier, Language::Pl) => "Mnożnik",
            (Multiplier, Language::En) => "Multiplier",
            (Status, Language::Pl) => "Stan",
            (Status, Language::En) => "Status",
            (Description, Language::Pl) => "Opis",
            (Description, Language::En) => "Description",
            (InvalidNorm, Language::Pl) => "nieprawidłowa norma",
            (InvalidNorm, Language::En) => "invalid norm",
            (InvalidField, Language::Pl) => "nieprawidłowa wartość",
            (InvalidField, Language::En) => "invalid value",
            (Masked, Language::Pl) => "Po masce",
            (Masked, Language::En) => "Masked",
            (State, Language::Pl) => "Stan",
            (State, Language::En) => "State",
        }
    }
}
