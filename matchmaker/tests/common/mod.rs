// Common test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::sync::Once;

use tempfile::TempDir;

static INIT: Once = Once::new();

/// Initialize tracing subscriber once for tests
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Write a user directory JSON document into a fresh temp dir.
///
/// The returned `TempDir` must be kept alive while the file is used.
pub fn write_directory_fixture(json: &str) -> (PathBuf, TempDir) {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = temp_dir.path().join("users.json");
    fs::write(&path, json).expect("failed to write directory fixture");
    (path, temp_dir)
}

pub const SMALL_DIRECTORY_JSON: &str = r#"{
  "memos": {
    "alice": "Rust and distributed systems. Loves Tokio!",
    "bob": "Distributed systems researcher; writes Rust.",
    "carol": "Watercolor painting"
  },
  "task_histories": {
    "alice": ["Built a Tokio-based cache"],
    "carol": ["Painted a mural"],
    "dave": ["Reviewed Rust code"]
  }
}"#;
