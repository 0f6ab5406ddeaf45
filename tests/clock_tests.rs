use godzinator::errors::AppError;
use godzinator::utils::time::{
    clock_to_seconds, format_signed_seconds, parse_signed_clock, seconds_to_clock,
    seconds_to_float_hours,
};

#[test]
fn test_clock_round_trip() {
    let samples = (0..100_000).step_by(37).chain([359_999, 360_000, 3_600_000, 12_345_678]);
    for s in samples {
        assert_eq!(clock_to_seconds(&seconds_to_clock(s)).unwrap(), s, "seconds = {}", s);
    }
}

#[test]
fn test_seconds_to_clock_pads_and_grows_hours() {
    assert_eq!(seconds_to_clock(0), "00:00:00");
    assert_eq!(seconds_to_clock(27_300), "07:35:00");
    assert_eq!(seconds_to_clock(86_400), "24:00:00");
    assert_eq!(seconds_to_clock(518_100), "143:55:00");
}

#[test]
fn test_clock_to_seconds_accepts_unpadded_and_large_hours() {
    assert_eq!(clock_to_seconds("07:35:00").unwrap(), 27_300);
    assert_eq!(clock_to_seconds("1:43:55").unwrap(), 6_235);
    assert_eq!(clock_to_seconds("143:55:00").unwrap(), 518_100);
    // minutes/seconds are not range-checked at this layer
    assert_eq!(clock_to_seconds("0:73:50").unwrap(), 73 * 60 + 50);
}

#[test]
fn test_clock_to_seconds_rejects_wrong_shape() {
    for bad in ["", "14:35", "1:2:3:4", "a:b:c", "01::00", "01:00:0x"] {
        assert!(
            matches!(clock_to_seconds(bad), Err(AppError::Parse(_))),
            "expected parse error for {:?}",
            bad
        );
    }
}

#[test]
fn test_format_signed_seconds() {
    assert_eq!(format_signed_seconds(0), "00:00:00");
    assert_eq!(format_signed_seconds(3661), "01:01:01");
    assert_eq!(format_signed_seconds(-3661), "-01:01:01");
    assert_eq!(format_signed_seconds(-10), "-00:00:10");
    assert_eq!(format_signed_seconds(i64::MIN), "-2562047788015215:30:08");
}

#[test]
fn test_seconds_to_float_hours() {
    assert_eq!(seconds_to_float_hours(1800), 0.5);
    assert_eq!(seconds_to_float_hours(2), 0.0);
    assert_eq!(seconds_to_float_hours(514_200), 142.83);
    assert_eq!(seconds_to_float_hours(-5400), -1.5);
}

#[test]
fn test_parse_signed_clock() {
    assert_eq!(parse_signed_clock("-06:00:00").unwrap(), -21_600);
    assert_eq!(parse_signed_clock("+01:00:00").unwrap(), 3600);
    assert_eq!(parse_signed_clock(" 12:00:00 ").unwrap(), 43_200);
    assert!(parse_signed_clock("-12:00").is_err());
}
