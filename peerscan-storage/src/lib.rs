//! # peerscan-storage
//!
//! SQLite persistence layer for Peerscan.
//!
//! Architecture:
//! - `connection` — serialized writer + round-robin read-only pool
//! - `migrations` — schema versioning via `PRAGMA user_version`
//! - `queries` — parameterized document/metadata queries
//! - `fetcher` — `SqliteMetadataSource`, the Metadata Fetcher

pub mod connection;
pub mod fetcher;
pub mod migrations;
pub mod queries;

pub use connection::DatabaseManager;
pub use fetcher::SqliteMetadataSource;
