//! Metadata-store errors.

/// Errors that can occur while querying the document metadata store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("Migration to v{version} failed: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("Connection pool unavailable: {message}")]
    PoolUnavailable { message: String },
}

impl StorageError {
    /// Wrap a rusqlite error message.
    pub fn sqlite(e: impl std::fmt::Display) -> Self {
        Self::SqliteError {
            message: e.to_string(),
        }
    }
}
