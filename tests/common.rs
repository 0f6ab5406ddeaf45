#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use godzinator::core::calculator::expression::Operator;
use godzinator::models::row::Row;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn godz() -> Command {
    cargo_bin_cmd!("godzinator")
}

/// Config path inside a fresh temp dir; the file itself does not exist yet.
pub fn temp_config() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("godzinator.conf");
    (dir, path)
}

/// Command that ignores any user configuration (defaults apply).
pub fn godz_isolated(config: &PathBuf) -> Command {
    let mut cmd = godz();
    cmd.arg("--config").arg(config);
    cmd
}

pub fn row(op: &str, value: &str) -> Row {
    Row::with_value(Operator::normalize(op), value)
}
