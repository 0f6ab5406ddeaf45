use godzinator::utils::decimal::{
    format_float_compact, is_valid_multiplier, parse_multiplier, parse_non_negative_float,
    round_half_up_non_negative, sanitize_decimal, sanitize_multiplier_text,
};

#[test]
fn test_sanitize_decimal_filters_invalid_characters() {
    assert_eq!(sanitize_decimal("ab1,5x"), ("1,5".to_string(), true));
    assert_eq!(sanitize_decimal("12.34"), ("12.34".to_string(), false));
    // first separator wins, later ones are dropped and flagged
    assert_eq!(sanitize_decimal("1.2,3.4"), ("1.234".to_string(), true));
    assert_eq!(sanitize_decimal(""), (String::new(), false));
}

#[test]
fn test_sanitize_multiplier_text() {
    assert_eq!(sanitize_multiplier_text("-2a"), "2");
    assert_eq!(sanitize_multiplier_text("1,,5"), "1,5");
}

#[test]
fn test_parse_non_negative_float() {
    assert_eq!(parse_non_negative_float("1"), Some(1.0));
    assert_eq!(parse_non_negative_float("1.5"), Some(1.5));
    assert_eq!(parse_non_negative_float("1,5"), Some(1.5));
    assert_eq!(parse_non_negative_float(" 0 "), Some(0.0));
    assert_eq!(parse_non_negative_float("2."), Some(2.0));

    assert_eq!(parse_non_negative_float(""), None);
    assert_eq!(parse_non_negative_float("   "), None);
    assert_eq!(parse_non_negative_float("-1"), None);
    assert_eq!(parse_non_negative_float("1..2"), None);
    assert_eq!(parse_non_negative_float("abc"), None);
    assert_eq!(parse_non_negative_float("."), None);
    assert_eq!(parse_non_negative_float("1e3"), None);
}

#[test]
fn test_parse_multiplier_rejects_partial_entries() {
    for partial in [".", "+", "-", "+.", "-."] {
        assert_eq!(parse_multiplier(partial), None, "input = {:?}", partial);
        assert!(!is_valid_multiplier(partial));
    }
    assert_eq!(parse_multiplier("0,5"), Some(0.5));
    assert!(is_valid_multiplier("1"));
}

#[test]
fn test_round_half_up_non_negative() {
    assert_eq!(round_half_up_non_negative(1.5), 2);
    assert_eq!(round_half_up_non_negative(1.49), 1);
    assert_eq!(round_half_up_non_negative(0.0), 0);
    assert_eq!(round_half_up_non_negative(2.5), 3);
}

#[test]
fn test_format_float_compact() {
    assert_eq!(format_float_compact(90.0), "90");
    assert_eq!(format_float_compact(1.5), "1.5");
    assert_eq!(format_float_compact(0.016666), "0.0167");
    assert_eq!(format_float_compact(0.0), "0");
    assert_eq!(format_float_compact(143.916_666), "143.9167");
}
