//! Configuration system for Peerscan.
//! TOML-based, defaults from `constants`.

pub mod detector_config;

pub use detector_config::DetectorConfig;
