//! Shared helpers for integration tests

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Directory holding committed test fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Copy a fixture into a fresh temp dir, returning the dir (keep it alive)
/// and the copied file's path.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let dest = temp_dir.path().join(name);
    fs::copy(fixtures_dir().join(name), &dest).expect("failed to copy fixture");
    (temp_dir, dest)
}
