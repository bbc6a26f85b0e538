//! Error display and conversion tests.

use peerscan_core::errors::{ConfigError, DetectError, StorageError};

#[test]
fn storage_error_display() {
    let err = StorageError::SqliteError {
        message: "database is locked".to_string(),
    };
    assert_eq!(err.to_string(), "SQLite error: database is locked");

    let err = StorageError::MigrationFailed {
        version: 1,
        message: "syntax error".to_string(),
    };
    assert!(err.to_string().contains("v1"));
}

#[test]
fn detect_error_wraps_storage_error() {
    let storage = StorageError::sqlite("unable to open database file");
    let err: DetectError = storage.into();
    match &err {
        DetectError::DataAccess(inner) => {
            assert!(inner.to_string().contains("unable to open"));
        }
        other => panic!("expected DataAccess, got {other:?}"),
    }
    assert!(err.to_string().starts_with("Data access failure"));
}

#[test]
fn detect_error_wraps_config_error() {
    let config = ConfigError::InvalidValue {
        field: "seed".to_string(),
        message: "bad".to_string(),
    };
    let err: DetectError = config.into();
    assert!(err.to_string().contains("seed"));
}
