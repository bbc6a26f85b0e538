//! # peerscan-core
//!
//! Core types, traits, errors, config, constants, and tracing setup shared
//! across the Peerscan workspace.
//!
//! Architecture:
//! - `types` — `DocumentId`, `TenantId`, `AnomalyResult`, `MetadataSample`
//! - `traits` — the `MetadataSource` seam between detection and storage
//! - `errors` — one error enum per subsystem, `thiserror` only
//! - `config` — TOML-based detector configuration
//! - `constants` — shared defaults and thresholds
//! - `tracing` — `EnvFilter`-based logging initialization

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;
