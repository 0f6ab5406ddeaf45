//! Assembly of an evaluator expression from the ordered sheet rows.

use crate::core::calculator::expression::Operator;
use crate::errors::AppResult;
use crate::models::row::Row;
use crate::utils::decimal::round_half_up_non_negative;
use crate::utils::mask::digits_to_clock;
use crate::utils::time::{ZERO_CLOCK, clock_to_seconds};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpressionPayload {
    /// Base `00:00:00` followed by one clock per included row.
    pub times: Vec<String>,
    pub operators: Vec<Operator>,
    pub multipliers: Vec<f64>,
    pub total_seconds: i64,
}

impl ExpressionPayload {
    pub fn operator_symbols(&self) -> Vec<&'static str> {
        self.operators.iter().map(Operator::symbol).collect()
    }

    pub fn term_count(&self) -> usize {
        self.operators.len()
    }
}

/// Collect active, complete rows with a valid multiplier, in order.
pub fn build_expression_payload<'a, I>(rows: I) -> AppResult<ExpressionPayload>
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut payload = ExpressionPayload {
        times: vec![ZERO_CLOCK.to_string()],
        operators: Vec::new(),
        multipliers: Vec::new(),
        total_seconds: 0,
    };

    for row in rows {
        if !row.status().is_included() {
            continue;
        }
        let Some(multiplier) = row.multiplier_value() else {
            continue;
        };

        let clock = digits_to_clock(&row.value)?;
        let term = round_half_up_non_negative(clock_to_seconds(&clock)? as f64 * multiplier);

        payload.total_seconds = row.operator.apply(payload.total_seconds, term)?;
        payload.times.push(clock);
        payload.operators.push(row.operator);
        payload.multipliers.push(multiplier);
    }

    Ok(payload)
}
