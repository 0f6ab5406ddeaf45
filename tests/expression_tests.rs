use godzinator::core::calculator::expression::{Operator, evaluate, evaluate_seconds, multiply_time};
use godzinator::errors::AppError;

#[test]
fn test_evaluate_without_multipliers() {
    let result = evaluate(&["00:00:00", "01:00:00", "00:30:00"], &["+", "-"], None).unwrap();
    assert_eq!(result, ("00:30:00".to_string(), 0.5));
}

#[test]
fn test_evaluate_with_multipliers() {
    let result = evaluate(
        &["00:00:00", "01:00:00", "00:30:00"],
        &["+", "-"],
        Some(&[1.5, 2.0][..]),
    )
    .unwrap();
    assert_eq!(result, ("00:30:00".to_string(), 0.5));
}

#[test]
fn test_evaluate_rounds_half_up_per_term() {
    let result = evaluate(&["00:00:00", "00:00:01"], &["+"], Some(&[1.5][..])).unwrap();
    assert_eq!(result, ("00:00:02".to_string(), 0.0));

    // each term is rounded on its own: 1.5 + 1.5 → 2 + 2
    let total =
        evaluate_seconds(&["00:00:00", "00:00:01", "00:00:01"], &["+", "+"], Some(&[1.5, 1.5][..]))
            .unwrap();
    assert_eq!(total, 4);
}

#[test]
fn test_evaluate_single_base_term() {
    let no_ops: &[&str] = &[];
    let result = evaluate(&["07:35:00"], no_ops, None).unwrap();
    assert_eq!(result, ("07:35:00".to_string(), 7.58));
}

#[test]
fn test_evaluate_negative_total_is_signed() {
    let result = evaluate(&["00:00:00", "00:30:00"], &["-"], None).unwrap();
    assert_eq!(result, ("-00:30:00".to_string(), -0.5));
}

#[test]
fn test_evaluate_zero_multiplier_drops_term() {
    let total = evaluate_seconds(&["01:00:00", "05:00:00"], &["+"], Some(&[0.0][..])).unwrap();
    assert_eq!(total, 3600);
}

#[test]
fn test_evaluate_rejects_mismatched_multipliers() {
    let result = evaluate(&["00:00:00", "01:00:00"], &["+"], Some(&[1.0, 2.0][..]));
    assert!(matches!(result, Err(AppError::InvalidExpression(_))));
}

#[test]
fn test_evaluate_rejects_mismatched_operators() {
    let result = evaluate(&["00:00:00", "01:00:00"], &["+", "-"], None);
    assert!(matches!(result, Err(AppError::InvalidExpression(_))));
}

#[test]
fn test_evaluate_rejects_empty_times() {
    let times: &[&str] = &[];
    let ops: &[&str] = &[];
    assert!(matches!(
        evaluate(times, ops, None),
        Err(AppError::InvalidExpression(_))
    ));
}

#[test]
fn test_evaluate_rejects_negative_or_nan_multiplier() {
    for m in [-1.0, f64::NAN, f64::INFINITY] {
        let result = evaluate(&["00:00:00", "01:00:00"], &["+"], Some(&[m][..]));
        assert!(
            matches!(result, Err(AppError::InvalidExpression(_))),
            "multiplier {}",
            m
        );
    }
}

#[test]
fn test_evaluate_rejects_unknown_operator() {
    let result = evaluate(&["00:00:00", "01:00:00"], &["*"], None);
    assert!(matches!(result, Err(AppError::InvalidExpression(_))));
}

#[test]
fn test_evaluate_rejects_total_out_of_range() {
    let result = evaluate(
        &["00:00:00", "100:00:00", "100:00:00"],
        &["+", "+"],
        Some(&[1e20, 1e20][..]),
    );
    assert!(matches!(result, Err(AppError::InvalidExpression(_))));

    let result = evaluate(
        &["00:00:00", "100:00:00", "100:00:00"],
        &["-", "-"],
        Some(&[1e20, 1e20][..]),
    );
    assert!(matches!(result, Err(AppError::InvalidExpression(_))));
}

#[test]
fn test_operator_apply_checks_range() {
    assert_eq!(Operator::Plus.apply(5, 3).unwrap(), 8);
    assert_eq!(Operator::Minus.apply(5, 8).unwrap(), -3);
    assert!(Operator::Plus.apply(i64::MAX, 1).is_err());
    assert!(Operator::Minus.apply(i64::MIN + 1, 2).is_err());
}

#[test]
fn test_evaluate_propagates_parse_errors() {
    let result = evaluate(&["00:00:00", "14:35"], &["+"], None);
    assert!(matches!(result, Err(AppError::Parse(_))));
}

#[test]
fn test_multiply_time() {
    assert_eq!(
        multiply_time("07:35:00", 8.0).unwrap(),
        ("60:40:00".to_string(), 60.67)
    );
    assert_eq!(
        multiply_time("00:00:03", 0.5).unwrap(),
        ("00:00:02".to_string(), 0.0)
    );
    assert!(multiply_time("07:35:00", -2.0).is_err());
}

#[test]
fn test_operator_symbols() {
    assert_eq!(Operator::from_symbol("-"), Some(Operator::Minus));
    assert_eq!(Operator::from_symbol("x"), None);
    assert_eq!(Operator::normalize("*"), Operator::Plus);
    assert_eq!(Operator::Plus.toggled(), Operator::Minus);
    assert_eq!(Operator::Minus.symbol(), "-");
}
