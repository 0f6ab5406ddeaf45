mod common;
use common::temp_config;
use godzinator::config::Config;
use godzinator::errors::AppError;
use godzinator::ui::labels::Language;
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn test_missing_file_yields_defaults() {
    let (_dir, path) = temp_config();
    let cfg = Config::load_from(&path).unwrap();

    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.daily_norm, "08:00:00");
    assert_eq!(cfg.alternate_norm, "07:35:00");
    assert_eq!(cfg.language, Language::Pl);
}

#[test]
fn test_save_and_reload() {
    let (_dir, path) = temp_config();
    let cfg = Config {
        daily_norm: "07:35:00".into(),
        language: Language::En,
        ..Config::default()
    };
    cfg.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), cfg);
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = temp_config();
    fs::write(&path, "language: en\n").unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.language, Language::En);
    assert_eq!(cfg.daily_norm, "08:00:00");
    assert_eq!(cfg.primary_norm, "08:00:00");
}

#[test]
fn test_malformed_file_is_an_error() {
    let (_dir, path) = temp_config();
    fs::write(&path, "language: [not, a, language\n").unwrap();

    assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
}

#[test]
fn test_init_does_not_overwrite_without_force() {
    let (_dir, path) = temp_config();

    assert!(Config::init_at(&path, false).unwrap());
    fs::write(&path, "daily_norm: \"06:00:00\"\n").unwrap();

    assert!(!Config::init_at(&path, false).unwrap());
    assert_eq!(Config::load_from(&path).unwrap().daily_norm, "06:00:00");

    assert!(Config::init_at(&path, true).unwrap());
    assert_eq!(Config::load_from(&path).unwrap().daily_norm, "08:00:00");
}
