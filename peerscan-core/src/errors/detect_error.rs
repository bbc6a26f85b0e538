//! Top-level detection errors.
//! Aggregates subsystem errors via `From` conversions.

use super::{ConfigError, StorageError};

/// Errors surfaced by one detection call. A failed call never returns a
/// partial `AnomalyResult` — it returns one of these instead.
#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    /// The metadata store was unreachable or a query failed.
    #[error("Data access failure: {0}")]
    DataAccess(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
