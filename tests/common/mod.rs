//! Shared integration-test harness for running the `personaforge` binary
//! against fixture documents.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Returns the path to a test fixture.
#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Runs the `personaforge` binary with the given arguments and waits for it
/// to exit, capturing stdout and stderr.
#[must_use]
pub fn run_personaforge(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_personaforge"))
        .args(args)
        .output()
        .expect("failed to run personaforge")
}

/// Runs `personaforge validate` on a fixture file.
#[must_use]
pub fn validate_fixture(name: &str) -> Output {
    let path = fixture_path(name);
    run_personaforge(&["validate", path.to_str().expect("non-UTF-8 fixture path")])
}
