//! Outlier model strategies.
//!
//! The engine is polymorphic over one capability: fit-and-predict an
//! unsupervised one-dimensional outlier model. The capability probe runs
//! once at construction (`resolve_model`); the hot path never branches on
//! availability.

#[cfg(feature = "isolation-forest")]
pub mod isolation_forest;
pub mod zscore;

use std::fmt;

use peerscan_core::config::DetectorConfig;

#[cfg(feature = "isolation-forest")]
pub use isolation_forest::IsolationForest;
pub use zscore::ZScoreModel;

/// A fitted model's verdict on the subject value.
#[derive(Debug, Clone, Copy)]
pub struct ModelDecision {
    /// The model's binary prediction.
    pub is_outlier: bool,
    /// Strategy-dependent score; see `AnomalyResult::score` for the
    /// cross-strategy scale caveat.
    pub score: f64,
}

impl ModelDecision {
    /// A clean verdict with zero score.
    pub fn inlier() -> Self {
        Self {
            is_outlier: false,
            score: 0.0,
        }
    }
}

/// Which detection strategy produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Ensemble model fit fresh on the peer sample (primary).
    IsolationForest,
    /// Deterministic 3-sigma z-score test (fallback).
    ZScoreFallback,
}

impl StrategyKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::IsolationForest => "isolation_forest",
            Self::ZScoreFallback => "z_score_fallback",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The fit-and-predict capability both strategies implement.
///
/// A model is fit on the peer sample and scores the subject in one call;
/// nothing is retained between calls.
pub trait OutlierModel: Send + Sync {
    /// Which strategy this model implements.
    fn kind(&self) -> StrategyKind;

    /// Fit on `peers` and judge `subject`.
    fn evaluate(&self, subject: f64, peers: &[f64]) -> ModelDecision;
}

/// Resolve the best available model for this runtime.
#[cfg(feature = "isolation-forest")]
pub fn resolve_model(config: &DetectorConfig) -> Box<dyn OutlierModel> {
    Box::new(IsolationForest::from_config(config))
}

/// Resolve the best available model for this runtime.
///
/// The primary capability is compiled out, so the z-score fallback is
/// substituted transparently.
#[cfg(not(feature = "isolation-forest"))]
pub fn resolve_model(config: &DetectorConfig) -> Box<dyn OutlierModel> {
    tracing::warn!("primary outlier model unavailable, substituting z-score fallback strategy");
    Box::new(ZScoreModel::new(config.z_threshold))
}
