use godzinator::core::calculator::vacation::{
    is_valid_daily_norm, vacation_days, vacation_days_from_clock,
};

#[test]
fn test_vacation_days() {
    assert_eq!(vacation_days(43_200, "07:35:00"), 1.58);
    assert_eq!(vacation_days(-21_600, "08:00:00"), -0.75);
    assert_eq!(vacation_days(28_800, "08:00:00"), 1.0);
}

#[test]
fn test_vacation_days_soft_fails_on_bad_norm() {
    assert_eq!(vacation_days(3600, "00:00:00"), 0.0);
    assert_eq!(vacation_days(3600, ""), 0.0);
    assert_eq!(vacation_days(3600, "14:35"), 0.0);
    assert_eq!(vacation_days(3600, "-08:00:00"), 0.0);
    assert_eq!(vacation_days(3600, "ab:cd:ef"), 0.0);
}

#[test]
fn test_vacation_days_from_clock() {
    assert_eq!(vacation_days_from_clock("13:00:00", "07:35:00").unwrap(), 1.71);
    assert!(vacation_days_from_clock("13:00", "07:35:00").is_err());
}

#[test]
fn test_is_valid_daily_norm() {
    assert!(is_valid_daily_norm("08:00:00"));
    assert!(is_valid_daily_norm("7:35:00"));
    assert!(!is_valid_daily_norm("00:00:00"));
    assert!(!is_valid_daily_norm("08:00"));
    assert!(!is_valid_daily_norm(""));
}
