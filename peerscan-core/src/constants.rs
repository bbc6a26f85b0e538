//! Shared constants for the Peerscan anomaly detector.

/// Peerscan version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum peer sample size for statistical analysis. Below this the
/// engine refuses to judge rather than produce a misleading score.
pub const MIN_PEER_SAMPLES: usize = 10;

/// Maximum peer sample size fetched per call (bounds query cost).
pub const MAX_PEER_SAMPLES: usize = 1000;

/// Expected fraction of outliers in the peer sample when fitting the
/// primary model.
pub const DEFAULT_CONTAMINATION: f64 = 0.05;

/// Fixed seed for the primary model's otherwise-stochastic ensemble.
pub const DEFAULT_SEED: u64 = 42;

/// Absolute z-score threshold for the fallback strategy.
pub const DEFAULT_Z_THRESHOLD: f64 = 3.0;

/// Sigma band used by the reason explainer for "significantly higher/lower".
pub const SIGMA_BAND: f64 = 3.0;

/// Number of trees in the isolation forest ensemble.
pub const DEFAULT_FOREST_TREES: usize = 100;

/// Per-tree subsample ceiling for the isolation forest.
pub const DEFAULT_FOREST_SUBSAMPLE: usize = 256;
