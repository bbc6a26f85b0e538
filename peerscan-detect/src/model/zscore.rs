//! Fallback strategy: 3-sigma z-score test.
//!
//! Deterministic and dependency-free; used whenever the primary ensemble
//! model is unavailable. Zero peer variance forces z to 0, so a constant
//! peer population never flags anything.

use crate::stats::PeerStats;

use super::{ModelDecision, OutlierModel, StrategyKind};

/// Z-score outlier test with a fixed absolute threshold.
#[derive(Debug, Clone, Copy)]
pub struct ZScoreModel {
    threshold: f64,
}

impl ZScoreModel {
    /// Create a model with the given |z| threshold (3.0 in production).
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl OutlierModel for ZScoreModel {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ZScoreFallback
    }

    fn evaluate(&self, subject: f64, peers: &[f64]) -> ModelDecision {
        let stats = PeerStats::from_values(peers);
        let z = stats.z_score(subject);
        let is_outlier = z.abs() > self.threshold;

        // Score contract: negated z when anomalous, exactly 0.0 otherwise.
        // Not comparable with the primary strategy's decision function.
        let score = if is_outlier { -z } else { 0.0 };

        ModelDecision { is_outlier, score }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_variance_never_flags() {
        let model = ZScoreModel::new(3.0);
        let decision = model.evaluate(1_000_000.0, &[100.0; 10]);
        assert!(!decision.is_outlier);
        assert_eq!(decision.score, 0.0);
    }

    #[test]
    fn test_subject_inside_band_is_clean() {
        let model = ZScoreModel::new(3.0);
        let peers: Vec<f64> = (0..15).map(|i| 95.0 + (i as f64) * (10.0 / 14.0)).collect();
        let decision = model.evaluate(100.0, &peers);
        assert!(!decision.is_outlier);
        assert_eq!(decision.score, 0.0);
    }

    #[test]
    fn test_extreme_subject_is_flagged() {
        let model = ZScoreModel::new(3.0);
        let peers: Vec<f64> = (0..15).map(|i| 95.0 + (i as f64) * (10.0 / 14.0)).collect();
        let decision = model.evaluate(100_000.0, &peers);
        assert!(decision.is_outlier);
        // Negated z: a high outlier gets a negative score
        assert!(decision.score < 0.0);
    }

    #[test]
    fn test_low_outlier_gets_positive_score() {
        let model = ZScoreModel::new(3.0);
        let peers: Vec<f64> = (0..20).map(|i| 1000.0 + i as f64).collect();
        let decision = model.evaluate(-5000.0, &peers);
        assert!(decision.is_outlier);
        assert!(decision.score > 0.0);
    }

    #[test]
    fn test_idempotent() {
        let model = ZScoreModel::new(3.0);
        let peers: Vec<f64> = (0..15).map(|i| 90.0 + i as f64).collect();
        let first = model.evaluate(500.0, &peers);
        let second = model.evaluate(500.0, &peers);
        assert_eq!(first.is_outlier, second.is_outlier);
        assert_eq!(first.score, second.score);
    }
}
