//! Time-sum sheet: the ordered row collection, the daily-norm field and
//! the live result.
//!
//! The sheet is the only owner of its rows. Callers mutate it through the
//! methods below and read back a [`SheetSummary`] after each change.

use crate::config::Config;
use crate::core::calculator::expression::{Operator, evaluate_seconds};
use crate::core::calculator::vacation::{is_valid_daily_norm, vacation_days};
use crate::core::payload::{ExpressionPayload, build_expression_payload};
use crate::errors::AppResult;
use crate::models::row::{Row, RowId};
use crate::utils::decimal::sanitize_multiplier_text;
use crate::utils::mask::mask_to_clock;
use crate::utils::time::{format_signed_seconds, seconds_to_float_hours};
use serde::Serialize;
use tracing::{debug, warn};

pub type RowCallback = Box<dyn FnMut(RowId)>;

/// Hooks fired synchronously after a row mutation.
#[derive(Default)]
pub struct RowCallbacks {
    pub on_change: Option<RowCallback>,
    pub on_toggle: Option<RowCallback>,
    pub on_remove: Option<RowCallback>,
}

fn fire(callback: &mut Option<RowCallback>, id: RowId) {
    if let Some(cb) = callback.as_mut() {
        cb(id);
    }
}

/// Result panel values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetSummary {
    pub total_seconds: i64,
    pub clock: String,
    pub hours: f64,
    pub hours_text: String,
    pub days: f64,
    pub days_text: String,
    pub daily_norm: String,
    pub daily_norm_invalid: bool,
    pub included_rows: usize,
}

impl SheetSummary {
    fn new(
        total_seconds: i64,
        days: f64,
        daily_norm: &str,
        daily_norm_invalid: bool,
        included_rows: usize,
    ) -> Self {
        let mut hours = seconds_to_float_hours(total_seconds);
        if hours.abs() < 0.005 {
            hours = 0.0;
        }
        Self {
            total_seconds,
            clock: format_signed_seconds(total_seconds),
            hours,
            hours_text: format!("{:.2} h", hours),
            days,
            days_text: format!("{:.2}", days),
            daily_norm: daily_norm.to_string(),
            daily_norm_invalid,
            included_rows,
        }
    }
}

pub struct TimeSheet {
    rows: Vec<Row>,
    daily_norm: String,
    primary_norm: String,
    alternate_norm: String,
    callbacks: RowCallbacks,
}

impl TimeSheet {
    /// New sheet with a single empty row.
    pub fn new(daily_norm: &str, primary_norm: &str, alternate_norm: &str) -> Self {
        let mut sheet = Self {
            rows: Vec::new(),
            daily_norm: mask_to_clock(daily_norm),
            primary_norm: primary_norm.to_string(),
            alternate_norm: alternate_norm.to_string(),
            callbacks: RowCallbacks::default(),
        };
        sheet.add_row();
        sheet
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(&cfg.daily_norm, &cfg.primary_norm, &cfg.alternate_norm)
    }

    pub fn set_callbacks(&mut self, callbacks: RowCallbacks) {
        self.callbacks = callbacks;
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }

    fn row_mut(&mut self, id: RowId) -> Option<&mut Row> {
        self.rows.iter_mut().find(|r| r.id == id)
    }

    // ---------------------------
    // Row collection
    // ---------------------------

    pub fn add_row(&mut self) -> RowId {
        let row = Row::new();
        let id = row.id;
        self.rows.push(row);
        debug!(row = %id, total = self.rows.len(), "row added");
        id
    }

    /// Remove a row; the last row is immediately replaced by an empty one.
    /// Returns `false` for an unknown id.
    pub fn remove_row(&mut self, id: RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.id != id);
        if self.rows.len() == before {
            return false;
        }

        debug!(row = %id, "row removed");
        fire(&mut self.callbacks.on_remove, id);

        if self.rows.is_empty() {
            self.add_row();
        }
        true
    }

    pub fn clear_all(&mut self) {
        self.rows.clear();
        debug!("all rows cleared");
        self.add_row();
    }

    // ---------------------------
    // Row edits
    // ---------------------------

    /// Store raw clock keystrokes (masked). Returns the masked text.
    pub fn set_value(&mut self, id: RowId, raw: &str) -> Option<String> {
        let row = self.row_mut(id)?;
        row.value = mask_to_clock(raw);
        let masked = row.value.clone();
        fire(&mut self.callbacks.on_change, id);
        Some(masked)
    }

    /// Store raw multiplier keystrokes (sanitised). Returns the kept text.
    pub fn set_multiplier(&mut self, id: RowId, raw: &str) -> Option<String> {
        let row = self.row_mut(id)?;
        row.multiplier = sanitize_multiplier_text(raw);
        let kept = row.multiplier.clone();
        fire(&mut self.callbacks.on_change, id);
        Some(kept)
    }

    pub fn set_operator(&mut self, id: RowId, operator: Operator) -> bool {
        let Some(row) = self.row_mut(id) else {
            return false;
        };
        if row.operator != operator {
            row.operator = operator;
            fire(&mut self.callbacks.on_toggle, id);
        }
        true
    }

    pub fn toggle_operator(&mut self, id: RowId) -> Option<Operator> {
        let row = self.row_mut(id)?;
        row.operator = row.operator.toggled();
        let op = row.operator;
        fire(&mut self.callbacks.on_toggle, id);
        Some(op)
    }

    pub fn set_active(&mut self, id: RowId, active: bool) -> bool {
        let Some(row) = self.row_mut(id) else {
            return false;
        };
        row.is_active = active;
        fire(&mut self.callbacks.on_change, id);
        true
    }

    /// Labels do not affect the result, so no callback fires.
    pub fn set_description(&mut self, id: RowId, text: &str) -> bool {
        let Some(row) = self.row_mut(id) else {
            return false;
        };
        row.description = text.to_string();
        true
    }

    // ---------------------------
    // Daily norm
    // ---------------------------

    pub fn daily_norm(&self) -> &str {
        &self.daily_norm
    }

    pub fn set_daily_norm(&mut self, raw: &str) -> &str {
        self.daily_norm = mask_to_clock(raw);
        &self.daily_norm
    }

    pub fn is_daily_norm_invalid(&self) -> bool {
        !is_valid_daily_norm(&self.daily_norm)
    }

    /// Norm offered by the quick-toggle button.
    pub fn quick_norm_target(&self) -> &str {
        if self.daily_norm == self.primary_norm {
            &self.alternate_norm
        } else if self.daily_norm == self.alternate_norm {
            &self.primary_norm
        } else {
            &self.alternate_norm
        }
    }

    pub fn toggle_daily_norm_quick(&mut self) -> &str {
        self.daily_norm = self.quick_norm_target().to_string();
        &self.daily_norm
    }

    // ---------------------------
    // Results
    // ---------------------------

    pub fn payload(&self) -> AppResult<ExpressionPayload> {
        build_expression_payload(&self.rows)
    }

    fn evaluate(&self) -> AppResult<(i64, usize)> {
        let payload = self.payload()?;
        let total = evaluate_seconds(
            &payload.times,
            &payload.operator_symbols(),
            Some(payload.multipliers.as_slice()),
        )?;
        Ok((total, payload.term_count()))
    }

    /// Recompute the result panel. A failed evaluation degrades to a zero
    /// result and is logged.
    pub fn recalculate(&self) -> SheetSummary {
        let norm_invalid = self.is_daily_norm_invalid();

        let (total, included) = match self.evaluate() {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "calculation error, showing zero result");
                return SheetSummary::new(0, 0.0, &self.daily_norm, norm_invalid, 0);
            }
        };

        let days = if norm_invalid {
            0.0
        } else {
            vacation_days(total, &self.daily_norm)
        };

        debug!(total, included, days, "sheet recalculated");
        SheetSummary::new(total, days, &self.daily_norm, norm_invalid, included)
    }
}

impl Default for TimeSheet {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
