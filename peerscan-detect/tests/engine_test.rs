//! Engine-level scenarios: the full Detect → Explain → Assemble pipeline
//! over in-memory samples, under both strategies.

use peerscan_core::config::DetectorConfig;
use peerscan_core::types::{DocumentId, MetadataSample};
use peerscan_detect::model::ZScoreModel;
use peerscan_detect::{DetectionEngine, StrategyKind};

fn engine() -> DetectionEngine {
    DetectionEngine::new(DetectorConfig::default())
}

fn fallback_engine() -> DetectionEngine {
    let config = DetectorConfig::default();
    let model = Box::new(ZScoreModel::new(config.z_threshold));
    DetectionEngine::with_model(config, model)
}

fn uniform_peers() -> Vec<f64> {
    // 15 values evenly spread across [95, 105]
    (0..15).map(|i| 95.0 + (i as f64) * (10.0 / 14.0)).collect()
}

#[test]
fn identical_population_is_clean_with_zero_score() {
    let sample = MetadataSample::new(Some(100.0), vec![100.0; 10]);
    let result = engine().evaluate(DocumentId::new(1), &sample);

    assert!(!result.is_anomaly);
    assert_eq!(result.score, 0.0);
    assert!(result.reasons.is_empty());
}

#[test]
fn subject_within_peer_band_is_clean() {
    let sample = MetadataSample::new(Some(100.0), uniform_peers());
    let result = fallback_engine().evaluate(DocumentId::new(2), &sample);

    assert!(!result.is_anomaly);
    assert_eq!(result.score, 0.0);
    assert!(result.reasons.is_empty());
    assert_eq!(
        result.metadata["strategy"],
        serde_json::json!("z_score_fallback")
    );
}

#[test]
fn extreme_subject_is_anomalous_under_fallback() {
    let sample = MetadataSample::new(Some(100_000.0), uniform_peers());
    let result = fallback_engine().evaluate(DocumentId::new(3), &sample);

    assert!(result.is_anomaly);
    // High outlier, negated z: strongly negative
    assert!(result.score < 0.0);
    assert_eq!(result.reasons.len(), 1);
    assert!(result.reasons[0].contains("standard deviations"));
    assert!(result.metadata.contains_key("z_score"));
}

#[test]
fn extreme_subject_is_anomalous_under_primary() {
    // Wider population so the ensemble has structure to learn
    let peers: Vec<f64> = (0..60).map(|i| 95.0 + (i as f64 * 7.3) % 10.0).collect();
    let sample = MetadataSample::new(Some(100_000.0), peers);

    let engine = engine();
    let result = engine.evaluate(DocumentId::new(4), &sample);

    if engine.strategy() == StrategyKind::IsolationForest {
        assert!(result.is_anomaly);
        assert!(result.score < 0.0);
        assert_eq!(result.reasons.len(), 1);
        assert!(result.reasons[0].contains("significantly higher"));
        assert_eq!(
            result.metadata["strategy"],
            serde_json::json!("isolation_forest")
        );
        assert!(!result.metadata.contains_key("z_score"));
    }
}

#[test]
fn absent_subject_short_circuits() {
    let sample = MetadataSample::new(None, uniform_peers());
    let result = engine().evaluate(DocumentId::new(5), &sample);

    assert!(!result.is_anomaly);
    assert_eq!(result.score, 0.0);
    assert_eq!(
        result.reasons,
        vec!["insufficient metadata for analysis".to_string()]
    );
    assert!(result.metadata.is_empty());
}

#[test]
fn small_peer_sample_short_circuits() {
    let sample = MetadataSample::new(Some(100_000.0), vec![1.0, 2.0, 3.0]);
    let result = engine().evaluate(DocumentId::new(6), &sample);

    assert!(!result.is_anomaly);
    assert_eq!(result.score, 0.0);
    assert_eq!(
        result.reasons,
        vec!["insufficient peer data for statistical analysis".to_string()]
    );
    assert_eq!(result.metadata["peer_count"], serde_json::json!(3));
    assert_eq!(result.metadata["amount"], serde_json::json!(100_000.0));
}

#[test]
fn evaluation_is_deterministic_across_calls() {
    let peers: Vec<f64> = (0..50).map(|i| 80.0 + (i as f64 * 3.7) % 40.0).collect();
    let sample = MetadataSample::new(Some(400.0), peers);

    let engine = engine();
    let first = engine.evaluate(DocumentId::new(7), &sample);
    let second = engine.evaluate(DocumentId::new(7), &sample);

    assert_eq!(first.is_anomaly, second.is_anomaly);
    assert_eq!(first.score, second.score);
    assert_eq!(first.reasons, second.reasons);
}

#[test]
fn scored_metadata_reports_peer_mean() {
    let sample = MetadataSample::new(Some(100.0), vec![100.0; 12]);
    let result = engine().evaluate(DocumentId::new(8), &sample);

    assert_eq!(result.metadata["peer_count"], serde_json::json!(12));
    assert_eq!(result.metadata["peer_mean"], serde_json::json!(100.0));
    assert_eq!(result.metadata["amount"], serde_json::json!(100.0));
}
