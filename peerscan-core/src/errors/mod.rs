//! Error handling for Peerscan.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod detect_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use detect_error::DetectError;
pub use storage_error::StorageError;
