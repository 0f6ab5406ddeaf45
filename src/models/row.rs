use crate::core::calculator::expression::Operator;
use crate::utils::decimal::{is_valid_multiplier, parse_multiplier};
use crate::utils::mask::{ClockInputState, classify_clock};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Identity of a row, fresh for every `add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RowId(Uuid);

impl RowId {
    pub fn new() -> Self {
        RowId(Uuid::new_v4())
    }
}

impl Default for RowId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// One term of the time-sum sheet.
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub id: RowId,
    pub operator: Operator,
    /// Masked clock text as displayed.
    pub value: String,
    /// Sanitised multiplier text, `"1"` by default.
    pub multiplier: String,
    pub is_active: bool,
    /// Free-text label; never part of the arithmetic.
    pub description: String,
}

impl Default for Row {
    fn default() -> Self {
        Self {
            id: RowId::new(),
            operator: Operator::Plus,
            value: String::new(),
            multiplier: "1".to_string(),
            is_active: true,
            description: String::new(),
        }
    }
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(operator: Operator, value: &str) -> Self {
        Self {
            operator,
            value: value.to_string(),
            ..Self::default()
        }
    }

    pub fn state(&self) -> ClockInputState {
        classify_clock(&self.value)
    }

    pub fn is_started(&self) -> bool {
        self.state() != ClockInputState::Empty
    }

    pub fn is_complete(&self) -> bool {
        self.state() == ClockInputState::Complete
    }

    pub fn multiplier_value(&self) -> Option<f64> {
        parse_multiplier(&self.multiplier)
    }

    /// Active row with a started but unfinished clock.
    pub fn time_invalid(&self) -> bool {
        self.is_active && self.is_started() && !self.is_complete()
    }

    pub fn multiplier_invalid(&self) -> bool {
        self.is_active && !is_valid_multiplier(&self.multiplier)
    }

    pub fn status(&self) -> RowStatus {
        if !self.is_active {
            RowStatus::Inactive
        } else if !self.is_started() {
            RowStatus::Empty
        } else if !self.is_complete() {
            RowStatus::Incomplete
        } else if self.multiplier_invalid() {
            RowStatus::InvalidMultiplier
        } else {
            RowStatus::Included
        }
    }
}

/// Why a row is, or is not, part of the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    Included,
    Empty,
    Incomplete,
    InvalidMultiplier,
    Inactive,
}

impl RowStatus {
    pub fn is_included(&self) -> bool {
        matches!(self, RowStatus::Included)
    }
}
