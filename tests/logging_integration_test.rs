//! Integration tests for logging functionality
//!
//! Only one global subscriber can be installed per process, so everything
//! that calls `init_logging` lives in a single test.

use roster::adapters::memory::MemoryEmployeeStore;
use roster::config::LoggingConfig;
use roster::core::import::ImportReconciler;
use roster::domain::Employee;
use roster::logging::init_logging;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "logs");
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_init_logging_rejects_unknown_level() {
    let result = init_logging("chatty", &LoggingConfig::default());
    assert!(result.is_err());
}

#[tokio::test]
async fn test_file_logging_lifecycle() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
    };

    let guard = init_logging("debug", &config).unwrap();
    assert!(log_path.is_dir());

    let reconciler = ImportReconciler::new(Arc::new(MemoryEmployeeStore::new()));
    let outcome = reconciler
        .handle(vec![Employee::new("", "nobody", "000")])
        .await
        .unwrap();
    assert!(!outcome.is_success());
    drop(guard);

    // A second subscriber cannot be installed
    assert!(init_logging("info", &LoggingConfig::default()).is_err());

    let written: String = std::fs::read_dir(&log_path)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| std::fs::read_to_string(entry.path()).ok())
        .collect();
    assert!(written.contains("Starting import"), "log contents: {written}");
    assert!(written.contains("Import rejected"), "log contents: {written}");
}
