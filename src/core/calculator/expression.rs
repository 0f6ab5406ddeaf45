//! Signed sum of clock terms with per-term multipliers.
//!
//! An expression is a base clock followed by `(clock, operator, multiplier)`
//! terms. Every scaled term is rounded half-up to whole seconds before it is
//! added or subtracted.

use crate::errors::{AppError, AppResult};
use crate::utils::decimal::round_half_up_non_negative;
use crate::utils::time::{clock_to_seconds, format_signed_seconds, seconds_to_float_hours};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    #[default]
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
}

impl Operator {
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s.trim() {
            "+" => Some(Operator::Plus),
            "-" => Some(Operator::Minus),
            _ => None,
        }
    }

    /// Row assembly treats anything that is not `-` as `+`.
    pub fn normalize(s: &str) -> Self {
        Self::from_symbol(s).unwrap_or_default()
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Operator::Plus => Operator::Minus,
            Operator::Minus => Operator::Plus,
        }
    }

    /// Add or subtract `term`, failing when the total leaves the `i64` range.
    pub fn apply(&self, total: i64, term: i64) -> AppResult<i64> {
        let result = match self {
            Operator::Plus => total.checked_add(term),
            Operator::Minus => total.checked_sub(term),
        };
        result.ok_or_else(|| {
            AppError::InvalidExpression(format!(
                "total out of range: {} {} {}",
                total,
                self.symbol(),
                term
            ))
        })
    }
}

fn scaled_seconds(clock: &str, multiplier: f64) -> AppResult<i64> {
    if !multiplier.is_finite() || multiplier < 0.0 {
        return Err(AppError::InvalidExpression(format!(
            "multiplier must be a non-negative number, got {}",
            multiplier
        )));
    }
    let seconds = clock_to_seconds(clock)?;
    Ok(round_half_up_non_negative(seconds as f64 * multiplier))
}

/// Fold the expression into a signed total of seconds.
///
/// `operators` must hold one entry per term after the first, and
/// `multipliers` (when given) one per operator. Missing multipliers default
/// to `1.0`.
pub fn evaluate_seconds<T, O>(
    times: &[T],
    operators: &[O],
    multipliers: Option<&[f64]>,
) -> AppResult<i64>
where
    T: AsRef<str>,
    O: AsRef<str>,
{
    let Some((first, rest)) = times.split_first() else {
        return Err(AppError::InvalidExpression(
            "at least one time value is required".into(),
        ));
    };

    if operators.len() != rest.len() {
        return Err(AppError::InvalidExpression(format!(
            "expected {} operators for {} time values, got {}",
            rest.len(),
            times.len(),
            operators.len()
        )));
    }

    if let Some(m) = multipliers
        && m.len() != operators.len()
    {
        return Err(AppError::InvalidExpression(format!(
            "expected {} multipliers, got {}",
            operators.len(),
            m.len()
        )));
    }

    let mut total = clock_to_seconds(first.as_ref())?;

    for (i, (time, op)) in rest.iter().zip(operators).enumerate() {
        let operator = Operator::from_symbol(op.as_ref()).ok_or_else(|| {
            AppError::InvalidExpression(format!("unsupported operator '{}'", op.as_ref()))
        })?;
        let multiplier = multipliers.map_or(1.0, |m| m[i]);
        let term = scaled_seconds(time.as_ref(), multiplier)?;
        total = operator.apply(total, term)?;
    }

    Ok(total)
}

/// Evaluate an expression into its clock string and decimal hours.
///
/// The clock string carries a leading `-` when the total is negative.
///
/// ```
/// use godzinator::core::calculator::expression::evaluate;
/// let result = evaluate(&["00:00:00", "01:00:00", "00:30:00"], &["+", "-"], None).unwrap();
/// assert_eq!(result, ("00:30:00".to_string(), 0.5));
/// ```
pub fn evaluate<T, O>(
    times: &[T],
    operators: &[O],
    multipliers: Option<&[f64]>,
) -> AppResult<(String, f64)>
where
    T: AsRef<str>,
    O: AsRef<str>,
{
    let total = evaluate_seconds(times, operators, multipliers)?;
    Ok((format_signed_seconds(total), seconds_to_float_hours(total)))
}

/// Scale a single clock value by a non-negative factor.
pub fn multiply_time(clock: &str, factor: f64) -> AppResult<(String, f64)> {
    let total = scaled_seconds(clock, factor)?;
    Ok((format_signed_seconds(total), seconds_to_float_hours(total)))
}
