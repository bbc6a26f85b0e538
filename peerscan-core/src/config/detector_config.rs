//! Detector configuration.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;

/// Configuration for the peer-group anomaly detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Minimum peer sample size for statistical analysis (default: 10).
    pub min_peer_samples: usize,
    /// Maximum peer sample size fetched per call (default: 1000).
    pub max_peer_samples: usize,
    /// Expected outlier fraction when fitting the primary model
    /// (default: 0.05).
    pub contamination: f64,
    /// Seed for the primary model's ensemble. Explicit so tests can
    /// assert determinism (default: 42).
    pub seed: u64,
    /// Absolute z-score threshold for the fallback strategy (default: 3.0).
    pub z_threshold: f64,
    /// Number of trees in the isolation forest (default: 100).
    pub forest_trees: usize,
    /// Per-tree subsample ceiling for the isolation forest (default: 256).
    pub forest_subsample: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_peer_samples: constants::MIN_PEER_SAMPLES,
            max_peer_samples: constants::MAX_PEER_SAMPLES,
            contamination: constants::DEFAULT_CONTAMINATION,
            seed: constants::DEFAULT_SEED,
            z_threshold: constants::DEFAULT_Z_THRESHOLD,
            forest_trees: constants::DEFAULT_FOREST_TREES,
            forest_subsample: constants::DEFAULT_FOREST_SUBSAMPLE,
        }
    }
}

impl DetectorConfig {
    /// Parse a config from a TOML string and validate it.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_peer_samples < 2 {
            return Err(ConfigError::InvalidValue {
                field: "min_peer_samples".to_string(),
                message: "must be at least 2".to_string(),
            });
        }
        if self.max_peer_samples < self.min_peer_samples {
            return Err(ConfigError::InvalidValue {
                field: "max_peer_samples".to_string(),
                message: "must be >= min_peer_samples".to_string(),
            });
        }
        if !(self.contamination > 0.0 && self.contamination < 0.5) {
            return Err(ConfigError::InvalidValue {
                field: "contamination".to_string(),
                message: "must be in (0.0, 0.5)".to_string(),
            });
        }
        if !(self.z_threshold.is_finite() && self.z_threshold > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "z_threshold".to_string(),
                message: "must be a positive finite number".to_string(),
            });
        }
        if self.forest_trees == 0 {
            return Err(ConfigError::InvalidValue {
                field: "forest_trees".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.forest_subsample < 2 {
            return Err(ConfigError::InvalidValue {
                field: "forest_subsample".to_string(),
                message: "must be at least 2".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = DetectorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.min_peer_samples, 10);
        assert_eq!(config.max_peer_samples, 1000);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_toml_overrides() {
        let config = DetectorConfig::from_toml_str(
            r#"
            contamination = 0.1
            seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(config.contamination, 0.1);
        assert_eq!(config.seed, 7);
        // Unspecified fields keep their defaults
        assert_eq!(config.z_threshold, 3.0);
    }

    #[test]
    fn test_rejects_bad_contamination() {
        let err = DetectorConfig::from_toml_str("contamination = 0.9").unwrap_err();
        assert!(err.to_string().contains("contamination"));
    }

    #[test]
    fn test_rejects_cap_below_minimum() {
        let err = DetectorConfig::from_toml_str("max_peer_samples = 5").unwrap_err();
        assert!(err.to_string().contains("max_peer_samples"));
    }
}
