//! Unified application error type.
//! Core functions (clock parsing, expression evaluation) and the CLI layer
//! return AppError so failures surface the same way everywhere.
//!
//! Malformed user input is not an error: the soft parsers return `None`
//! or a zero sentinel instead.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Core contract violations
    // ---------------------------
    #[error("Invalid clock string: {0}")]
    Parse(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Invalid expression: {0}")]
    InvalidExpression(String),

    // ---------------------------
    // CLI input
    // ---------------------------
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ---------------------------
    // Config / serialization
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
