//! The Reason Explainer — verdicts to human-readable justifications.
//!
//! Pure function of the evaluation; produces at most one reason string.

use peerscan_core::constants::SIGMA_BAND;

use crate::engine::Evaluation;
use crate::model::StrategyKind;
use crate::stats::PeerStats;

/// Reason reported when the subject attribute is absent or non-numeric.
pub const INSUFFICIENT_SUBJECT_REASON: &str = "insufficient metadata for analysis";

/// Reason reported when the peer sample is below the statistical minimum.
pub const INSUFFICIENT_PEERS_REASON: &str = "insufficient peer data for statistical analysis";

/// Translate an evaluation into justification strings. Empty when the
/// verdict is not anomalous.
pub fn reasons(evaluation: &Evaluation, z_threshold: f64) -> Vec<String> {
    match evaluation {
        Evaluation::InsufficientSubject => vec![INSUFFICIENT_SUBJECT_REASON.to_string()],
        Evaluation::InsufficientPeers { .. } => vec![INSUFFICIENT_PEERS_REASON.to_string()],
        Evaluation::Scored { decision, .. } if !decision.is_outlier => Vec::new(),
        Evaluation::Scored {
            strategy,
            subject,
            stats,
            z,
            ..
        } => match strategy {
            StrategyKind::IsolationForest => vec![primary_reason(*subject, stats)],
            StrategyKind::ZScoreFallback => vec![fallback_reason(*z, z_threshold)],
        },
    }
}

/// Primary-strategy reason, evaluated in priority order: above the sigma
/// band, below it, then the generic model-only branch.
fn primary_reason(subject: f64, stats: &PeerStats) -> String {
    let band = SIGMA_BAND * stats.std_dev;
    if subject > stats.mean + band {
        format!(
            "amount is significantly higher than average ({:.2})",
            stats.mean
        )
    } else if subject < stats.mean - band {
        format!(
            "amount is significantly lower than average ({:.2})",
            stats.mean
        )
    } else {
        "statistical outlier detected in metadata distribution".to_string()
    }
}

fn fallback_reason(z: f64, threshold: f64) -> String {
    format!(
        "amount deviates {:.2} standard deviations from the peer average (threshold: {:.1})",
        z.abs(),
        threshold
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelDecision;

    fn stats(mean: f64, std_dev: f64, count: usize) -> PeerStats {
        PeerStats {
            mean,
            std_dev,
            count,
        }
    }

    fn scored(strategy: StrategyKind, subject: f64, stats: PeerStats, z: f64) -> Evaluation {
        Evaluation::Scored {
            strategy,
            subject,
            decision: ModelDecision {
                is_outlier: true,
                score: -1.0,
            },
            stats,
            z,
        }
    }

    #[test]
    fn test_insufficient_states_have_fixed_reasons() {
        let reasons = reasons(&Evaluation::InsufficientSubject, 3.0);
        assert_eq!(reasons, vec![INSUFFICIENT_SUBJECT_REASON.to_string()]);
    }

    #[test]
    fn test_clean_verdict_has_no_reasons() {
        let evaluation = Evaluation::Scored {
            strategy: StrategyKind::IsolationForest,
            subject: 100.0,
            decision: ModelDecision::inlier(),
            stats: stats(100.0, 5.0, 20),
            z: 0.0,
        };
        assert!(reasons(&evaluation, 3.0).is_empty());
    }

    #[test]
    fn test_primary_higher_branch() {
        let evaluation = scored(StrategyKind::IsolationForest, 200.0, stats(100.0, 5.0, 20), 20.0);
        let reasons = reasons(&evaluation, 3.0);
        assert_eq!(reasons.len(), 1);
        assert!(reasons[0].contains("significantly higher"));
        assert!(reasons[0].contains("100.00"));
    }

    #[test]
    fn test_primary_lower_branch() {
        let evaluation = scored(StrategyKind::IsolationForest, 10.0, stats(100.0, 5.0, 20), -18.0);
        let reasons = reasons(&evaluation, 3.0);
        assert_eq!(reasons.len(), 1);
        assert!(reasons[0].contains("significantly lower"));
    }

    #[test]
    fn test_primary_generic_branch_inside_sigma_band() {
        // The model flagged the subject but it sits within 3 sigma of the
        // mean, so the reason falls through to the generic branch.
        let evaluation = scored(StrategyKind::IsolationForest, 110.0, stats(100.0, 5.0, 20), 2.0);
        let reasons = reasons(&evaluation, 3.0);
        assert_eq!(
            reasons,
            vec!["statistical outlier detected in metadata distribution".to_string()]
        );
    }

    #[test]
    fn test_fallback_reason_reports_z_and_threshold() {
        let evaluation = scored(StrategyKind::ZScoreFallback, 500.0, stats(100.0, 10.0, 15), 40.0);
        let reasons = reasons(&evaluation, 3.0);
        assert_eq!(reasons.len(), 1);
        assert!(reasons[0].contains("40.00"));
        assert!(reasons[0].contains("3.0"));
    }
}
