//! Configuration loading tests
//!
//! Exercises file loading, defaulting, and validation through real temp
//! files.

use fibworker::config::{ConfigError, WorkerConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
        [worker]
        id = "fib-prod-1"
        description = "production fibonacci worker"

        [limits]
        warn_above = 250000
        "#,
    );

    let config = WorkerConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.worker.id, "fib-prod-1");
    assert_eq!(config.limits.warn_above, 250_000);
}

#[test]
fn test_load_empty_file_uses_defaults() {
    let file = write_config("");

    let config = WorkerConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config, WorkerConfig::default());
}

#[test]
fn test_load_partial_config_fills_defaults() {
    let file = write_config("[worker]\nid = \"only-id\"\n");

    let config = WorkerConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.worker.id, "only-id");
    assert_eq!(config.limits.warn_above, WorkerConfig::default().limits.warn_above);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let result = WorkerConfig::load_from_file("/nonexistent/fibworker.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_load_invalid_toml_is_parse_error() {
    let file = write_config("[worker\nid = ");
    let result = WorkerConfig::load_from_file(file.path());
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_load_rejects_invalid_worker_id() {
    let file = write_config("[worker]\nid = \"bad id!\"\n");
    let result = WorkerConfig::load_from_file(file.path());
    assert!(matches!(result, Err(ConfigError::Validation(_))));
}
