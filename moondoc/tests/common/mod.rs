//! Shared helpers for integration tests that exercise the `moondoc`
//! binary and the checked-in site content.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Runs the moondoc binary with the given arguments and captures output.
#[must_use]
pub fn run_moondoc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_moondoc"))
        .args(args)
        .output()
        .expect("failed to spawn moondoc")
}

/// Returns the path to a test fixture.
#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Returns a path under the workspace content directory.
#[must_use]
pub fn content_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../content")
        .join(name)
}

/// Returns a path under the workspace docs tree.
#[must_use]
pub fn docs_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../docs")
        .join(name)
}
