//! The Result Assembler — packages an evaluation into the immutable
//! `AnomalyResult` contract.
//!
//! Metadata is diagnostic only; the engine never reads it back, so the
//! data flow stays one-way.

use serde_json::json;

use peerscan_core::types::{AnomalyResult, DocumentId};

use crate::engine::Evaluation;
use crate::model::StrategyKind;

/// Build the final result for one detection call.
pub fn build(document_id: DocumentId, evaluation: &Evaluation, reasons: Vec<String>) -> AnomalyResult {
    let mut result = AnomalyResult::clean(document_id);
    result.reasons = reasons;

    match evaluation {
        // No amount was observed, so the metadata carries none.
        Evaluation::InsufficientSubject => {}

        Evaluation::InsufficientPeers {
            subject,
            peer_count,
        } => {
            result.metadata.insert("amount".to_string(), json!(subject));
            result
                .metadata
                .insert("peer_count".to_string(), json!(peer_count));
        }

        Evaluation::Scored {
            strategy,
            subject,
            decision,
            stats,
            z,
        } => {
            result.is_anomaly = decision.is_outlier;
            result.score = decision.score;

            result.metadata.insert("amount".to_string(), json!(subject));
            result
                .metadata
                .insert("peer_count".to_string(), json!(stats.count));
            result
                .metadata
                .insert("peer_mean".to_string(), json!(stats.mean));
            result
                .metadata
                .insert("strategy".to_string(), json!(strategy.name()));
            if *strategy == StrategyKind::ZScoreFallback {
                result.metadata.insert("z_score".to_string(), json!(z));
            }
        }
    }

    result
}
